//! Cuerpo de la petición de búsqueda y forma de la respuesta exitosa.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CompoundProperties, DomainError, InventoryMatch};

/// Petición `{"smiles": "<string>"}` ya validada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub smiles: String,
}

impl SearchRequest {
    pub fn new(smiles: impl Into<String>) -> Result<Self, DomainError> {
        let smiles = smiles.into();
        if smiles.trim().is_empty() {
            return Err(DomainError::MissingSmiles);
        }
        Ok(Self { smiles })
    }

    /// Extrae el SMILES del cuerpo JSON.
    ///
    /// Cualquier cuerpo que no contenga un `smiles` de tipo cadena no vacía
    /// (cuerpo vacío, JSON inválido, array, número...) es `MissingSmiles`,
    /// independientemente del resto de campos.
    pub fn from_body(body: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| DomainError::MissingSmiles)?;
        let smiles = value.get("smiles").and_then(Value::as_str).ok_or(DomainError::MissingSmiles)?;
        Self::new(smiles)
    }
}

/// Respuesta 200 de `/api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub pubchem_hits: Vec<CompoundProperties>,
    pub inventory_matches: Vec<InventoryMatch>,
}

impl SearchResults {
    /// Resultado vacío ("sin resultados"), válido cuando PubChem no devuelve hits.
    pub fn empty() -> Self {
        Self::default()
    }
}
