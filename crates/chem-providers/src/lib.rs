//! chem-providers
//!
//! Proveedores de datos de compuestos. El contrato (`CompoundProvider`) cubre
//! las dos operaciones que necesita la búsqueda:
//! - búsqueda por similitud estructural a partir de un SMILES,
//! - consulta de nombre y número CAS para un CID.
//!
//! Implementaciones:
//! - `PubChemProvider`: cliente HTTP de PUG REST.
//! - `StaticCompoundProvider`: datos en memoria (tests y modo offline).

pub mod error;
pub mod provider;
pub mod pubchem;
pub mod static_provider;

pub use error::ProviderError;
pub use provider::CompoundProvider;
pub use pubchem::PubChemProvider;
pub use static_provider::StaticCompoundProvider;
