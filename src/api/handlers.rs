use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chem_domain::SearchResults;
use serde_json::{json, Value};

use super::AppState;
use crate::errors::ApiError;

/// El cuerpo se interpreta a mano: un JSON inválido, un `Content-Type`
/// ausente o un `smiles` vacío son todos el mismo 400.
pub async fn search(State(state): State<AppState>, body: Bytes) -> Result<Json<SearchResults>, ApiError> {
    tracing::debug!(bytes = body.len(), "search requested");
    let results = state.search.run_body(&body).await?;
    Ok(Json(results))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
