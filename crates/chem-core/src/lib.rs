//! chem-core: pipeline de búsqueda de inventario.
//!
//! Una búsqueda recorre cuatro pasos en orden, sin paralelismo interno:
//! similitud en PubChem -> enriquecimiento por CID -> carga del inventario ->
//! cruce con el inventario. `InventorySearch` los orquesta y `SearchStage`
//! describe en qué punto está cada petición.
pub mod enrichment;
pub mod errors;
pub mod matching;
pub mod pipeline;
pub mod stage;

pub use enrichment::{enrich, Enrichment};
pub use errors::{ErrorClass, SearchError};
pub use matching::{match_inventory, row_matches, MatchKey, MatchSets};
pub use pipeline::{InventorySearch, SearchSettings};
pub use stage::{Outcome, SearchStage};
