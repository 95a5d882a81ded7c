//! Taxonomía de errores de una búsqueda.
//!
//! Los mensajes (`Display`) son los que ve el cliente en `{"error": ...}`.

use chem_domain::DomainError;
use chem_inventory::InventoryError;
use chem_providers::ProviderError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SearchError {
    #[error("No SMILES string provided")]
    MissingSmiles,
    #[error("Error during PubChem similarity search: {0}")]
    Upstream(String),
    #[error("Could not find the inventory file '{file}'.")]
    DatasetNotFound { file: String },
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Clase de error, independiente del transporte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    Upstream,
    DatasetNotFound,
    Unexpected,
}

impl SearchError {
    pub fn class(&self) -> ErrorClass {
        match self {
            SearchError::MissingSmiles => ErrorClass::Input,
            SearchError::Upstream(_) => ErrorClass::Upstream,
            SearchError::DatasetNotFound { .. } => ErrorClass::DatasetNotFound,
            SearchError::Unexpected(_) => ErrorClass::Unexpected,
        }
    }
}

impl From<DomainError> for SearchError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MissingSmiles => SearchError::MissingSmiles,
            DomainError::ValidationError(msg) => SearchError::Unexpected(msg),
        }
    }
}

impl From<ProviderError> for SearchError {
    fn from(e: ProviderError) -> Self {
        SearchError::Upstream(e.to_string())
    }
}

impl From<InventoryError> for SearchError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::NotFound { path } => SearchError::DatasetNotFound { file: path.display().to_string() },
            other => SearchError::Unexpected(other.to_string()),
        }
    }
}
