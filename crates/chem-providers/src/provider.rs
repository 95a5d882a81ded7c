//! Contrato de proveedores de compuestos.
//! Proporciona las dos consultas que la búsqueda hace al servicio externo:
//! similitud (SMILES -> lista de CIDs) y propiedades (CID -> nombre + CAS).
use async_trait::async_trait;

use chem_domain::{Cid, CompoundProperties, SimilarityQuery};

use crate::ProviderError;

#[async_trait]
pub trait CompoundProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_description(&self) -> &str;

    /// CIDs estructuralmente similares a `query`, en el orden del servicio.
    ///
    /// Cero hits es un resultado válido (`Ok(vec![])`), no un error.
    async fn similar_compounds(&self, query: &SimilarityQuery) -> Result<Vec<Cid>, ProviderError>;

    /// Nombre y número CAS de un compuesto. Cualquiera de los dos puede faltar.
    async fn compound_properties(&self, cid: Cid) -> Result<CompoundProperties, ProviderError>;
}
