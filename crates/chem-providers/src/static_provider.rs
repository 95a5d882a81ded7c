use async_trait::async_trait;
use std::collections::HashMap;

use chem_domain::{Cid, CompoundProperties, SimilarityQuery};

use crate::{CompoundProvider, ProviderError};

/// Proveedor en memoria: devuelve siempre los mismos hits y propiedades.
///
/// Los CIDs sin entrada en la tabla de propiedades responden con error, lo
/// que permite simular fallos de enriquecimiento individuales.
#[derive(Debug, Clone, Default)]
pub struct StaticCompoundProvider {
    hits: Vec<Cid>,
    properties: HashMap<Cid, (Option<String>, Option<String>)>,
    similarity_failure: Option<String>,
}

impl StaticCompoundProvider {
    pub fn new(hits: Vec<Cid>) -> Self {
        Self { hits, ..Default::default() }
    }

    pub fn with_properties(mut self, cid: Cid, name: Option<&str>, cas: Option<&str>) -> Self {
        self.properties.insert(cid, (name.map(str::to_string), cas.map(str::to_string)));
        self
    }

    /// Hace que la búsqueda por similitud falle con `message`.
    pub fn failing_similarity(mut self, message: &str) -> Self {
        self.similarity_failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl CompoundProvider for StaticCompoundProvider {
    fn get_name(&self) -> &str { "static" }
    fn get_description(&self) -> &str { "Fixed in-memory compound data" }

    async fn similar_compounds(&self, _query: &SimilarityQuery) -> Result<Vec<Cid>, ProviderError> {
        match &self.similarity_failure {
            Some(message) => Err(ProviderError::Unavailable(message.clone())),
            None => Ok(self.hits.clone()),
        }
    }

    async fn compound_properties(&self, cid: Cid) -> Result<CompoundProperties, ProviderError> {
        let (name, cas) = self.properties
                              .get(&cid)
                              .cloned()
                              .ok_or_else(|| ProviderError::Unavailable(format!("no properties for CID {cid}")))?;
        Ok(CompoundProperties::new(cid, name, cas))
    }
}
