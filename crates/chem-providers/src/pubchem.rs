//! Cliente HTTP de PubChem PUG REST.
//!
//! Endpoints usados (relativos a `base_url`):
//! - `compound/fastsimilarity_2d/smiles/{smiles}/JSON?Threshold=&MaxRecords=`
//!   devuelve `{"IdentifierList": {"CID": [...]}}`.
//! - `compound/cid/{cid}/property/IUPACName,CAS/JSON` devuelve
//!   `{"PropertyTable": {"Properties": [{...}]}}`.
//!
//! El contrato pertenece a PubChem; aquí sólo se leen los campos anteriores y
//! cualquier otra forma de respuesta se trata como vacía o como error.
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use chem_domain::{Cid, CompoundProperties, SimilarityQuery};

use crate::{CompoundProvider, ProviderError};

pub const DEFAULT_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Synchronous 2D similarity; the plain `similarity` operation answers with a
// ListKey to poll instead of an IdentifierList.
const SIMILARITY_OPERATION: &str = "fastsimilarity_2d";
const PROPERTY_LIST: &str = "IUPACName,CAS";

#[derive(Debug, Default, Deserialize)]
struct SimilarityResponse {
    #[serde(rename = "IdentifierList", default)]
    identifier_list: Option<IdentifierList>,
}

#[derive(Debug, Default, Deserialize)]
struct IdentifierList {
    #[serde(rename = "CID", default)]
    cid: Vec<Cid>,
}

#[derive(Debug, Default, Deserialize)]
struct PropertyResponse {
    #[serde(rename = "PropertyTable", default)]
    property_table: Option<PropertyTable>,
}

#[derive(Debug, Default, Deserialize)]
struct PropertyTable {
    #[serde(rename = "Properties", default)]
    properties: Vec<PropertyRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct PropertyRecord {
    #[serde(rename = "IUPACName", default)]
    iupac_name: Option<String>,
    #[serde(rename = "CAS", default)]
    cas: Option<String>,
}

pub struct PubChemProvider {
    http: Client,
    base_url: Url,
}

impl PubChemProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let base_url = Url::parse(base_url).map_err(|e| ProviderError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::InvalidUrl(base_url.to_string()));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Une `segments` al path base; cada segmento se codifica por separado,
    /// de modo que `/` o `#` dentro de un SMILES no rompen la ruta.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
           .map_err(|_| ProviderError::InvalidUrl(self.base_url.to_string()))?
           .pop_if_empty()
           .extend(segments);
        Ok(url)
    }

    fn similarity_url(&self, query: &SimilarityQuery) -> Result<Url, ProviderError> {
        let mut url = self.endpoint(&["compound", SIMILARITY_OPERATION, "smiles", query.structure(), "JSON"])?;
        url.query_pairs_mut()
           .append_pair("Threshold", &query.threshold().to_string())
           .append_pair("MaxRecords", &query.max_records().to_string());
        Ok(url)
    }

    fn properties_url(&self, cid: Cid) -> Result<Url, ProviderError> {
        self.endpoint(&["compound", "cid", &cid.to_string(), "property", PROPERTY_LIST, "JSON"])
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        debug!("GET {url}");
        let response = self.http.get(url.clone()).header(ACCEPT, "application/json").send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status: status.as_u16(),
                                               url: url.to_string(),
                                               body: body.chars().take(200).collect() });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CompoundProvider for PubChemProvider {
    fn get_name(&self) -> &str { "pubchem" }
    fn get_description(&self) -> &str { "PubChem PUG REST similarity and property lookup" }

    async fn similar_compounds(&self, query: &SimilarityQuery) -> Result<Vec<Cid>, ProviderError> {
        let url = self.similarity_url(query)?;
        let body: SimilarityResponse = self.get_json(url).await?;
        Ok(body.identifier_list.map(|l| l.cid).unwrap_or_default())
    }

    async fn compound_properties(&self, cid: Cid) -> Result<CompoundProperties, ProviderError> {
        let url = self.properties_url(cid)?;
        let body: PropertyResponse = self.get_json(url).await?;
        let record = body.property_table
                         .and_then(|t| t.properties.into_iter().next())
                         .ok_or_else(|| ProviderError::Decode(format!("no property record for CID {cid}")))?;
        Ok(CompoundProperties::new(cid, record.iupac_name, record.cas))
    }
}
