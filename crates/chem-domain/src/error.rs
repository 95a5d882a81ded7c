use thiserror::Error;

/// Errores de validación del dominio.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("No SMILES string provided")]
    MissingSmiles,
    #[error("{0}")]
    ValidationError(String),
}
