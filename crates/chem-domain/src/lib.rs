// chem-domain library entry point
//! Tipos de valor del dominio de búsqueda: compuestos de PubChem, filas de
//! inventario y su proyección pública. Todos son efímeros (viven lo que dura
//! una petición); nada en este crate hace IO.
pub mod compound;
pub mod error;
pub mod inventory;
pub mod request;

pub use compound::{Cid, CompoundProperties, SimilarityQuery, DEFAULT_MAX_RECORDS, DEFAULT_THRESHOLD};
pub use error::DomainError;
pub use inventory::{InventoryMatch, InventoryRow};
pub use request::{SearchRequest, SearchResults};
