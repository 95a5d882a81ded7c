//! Capa HTTP: estado compartido y router.
//!
//! Rutas:
//! - `POST /api/search` y su alias `POST /search`: búsqueda por SMILES.
//! - `GET /api/health`: comprobación de vida.
//! - `GET /`: página estática configurada (`CHEMSCAN_INDEX_FILE`).
pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use chem_core::InventorySearch;
use chem_inventory::InventorySource;
use chem_providers::PubChemProvider;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::errors::ConfigError;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<InventorySearch>,
}

impl AppState {
    pub fn new(search: InventorySearch) -> Self {
        Self { search: Arc::new(search) }
    }

    /// Construye el cliente PubChem real y la fuente de inventario del config.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let provider = PubChemProvider::new(&config.pubchem_base_url, config.pubchem_timeout)?;
        let search = InventorySearch::new(Arc::new(provider), InventorySource::new(&config.inventory_file))
            .with_settings(config.search_settings());
        Ok(Self::new(search))
    }
}

pub fn build_router(state: AppState, index_file: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/search", post(handlers::search))
        .route("/search", post(handlers::search))
        .route("/api/health", get(handlers::health))
        .route_service("/", ServeFile::new(index_file))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                )
        )
        .with_state(state)
}
