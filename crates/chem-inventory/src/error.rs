//! Errores de carga del inventario.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("inventory file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("could not read inventory file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed inventory data: {0}")]
    Csv(#[from] csv::Error),
    #[error("inventory has no '{0}' column")]
    MissingColumn(&'static str),
}

impl InventoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
