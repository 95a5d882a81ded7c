use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Umbral de similitud (Tanimoto, en porcentaje) usado cuando no se configura otro.
pub const DEFAULT_THRESHOLD: u8 = 70;
/// Tope de registros que se piden al servicio de similitud. Fijo.
pub const DEFAULT_MAX_RECORDS: u32 = 100;

/// Identificador de compuesto de PubChem (CID).
///
/// Se trata como opaco: no se garantiza unicidad más allá de lo que devuelva
/// el servicio externo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(pub u64);

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Cid {
    fn from(value: u64) -> Self {
        Cid(value)
    }
}

/// Consulta de similitud estructural construida a partir de la petición.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityQuery {
    structure: String,
    threshold: u8,
    max_records: u32,
}

impl SimilarityQuery {
    /// Crea una consulta validando que el umbral sea un porcentaje.
    ///
    /// El SMILES no se valida: se envía tal cual al servicio externo.
    pub fn new(structure: impl Into<String>, threshold: u8, max_records: u32) -> Result<Self, DomainError> {
        let structure = structure.into();
        if structure.trim().is_empty() {
            return Err(DomainError::MissingSmiles);
        }
        if threshold > 100 {
            return Err(DomainError::ValidationError(format!("similarity threshold must be within 0..=100, got {threshold}")));
        }
        Ok(Self { structure,
                  threshold,
                  max_records })
    }

    pub fn with_defaults(structure: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(structure, DEFAULT_THRESHOLD, DEFAULT_MAX_RECORDS)
    }

    pub fn structure(&self) -> &str { &self.structure }
    pub fn threshold(&self) -> u8 { self.threshold }
    pub fn max_records(&self) -> u32 { self.max_records }
}

/// Propiedades identificativas de un hit de similitud.
///
/// `name` y `cas` son opcionales: si el enriquecimiento falla o el servicio
/// los omite quedan en `None`, lo cual no es un error para la petición.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundProperties {
    #[serde(rename = "CID")]
    pub cid: Cid,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "CAS")]
    pub cas: Option<String>,
}

impl CompoundProperties {
    pub fn new(cid: Cid, name: Option<String>, cas: Option<String>) -> Self {
        Self { cid,
               name: name.filter(|s| !s.trim().is_empty()),
               cas: cas.filter(|s| !s.trim().is_empty()) }
    }

    /// Registro sin datos, usado cuando la consulta de propiedades falla.
    pub fn absent(cid: Cid) -> Self {
        Self { cid, name: None, cas: None }
    }

    pub fn is_absent(&self) -> bool {
        self.name.is_none() && self.cas.is_none()
    }
}
