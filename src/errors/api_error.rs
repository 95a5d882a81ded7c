//! Respuestas de error de la API.
//!
//! Única tabla de correspondencia clase de error -> código HTTP:
//! entrada 400, inventario no encontrado 404, PubChem o inesperado 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chem_core::{ErrorClass, SearchError};
use chem_domain::DomainError;
use serde::{Deserialize, Serialize};

/// Cuerpo `{"error": "<mensaje>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError(pub SearchError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0.class() {
            ErrorClass::Input => StatusCode::BAD_REQUEST,
            ErrorClass::DatasetNotFound => StatusCode::NOT_FOUND,
            ErrorClass::Upstream | ErrorClass::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        ApiError(e)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "search failed");
        } else {
            tracing::warn!(error = %self.0, "search rejected");
        }
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}
