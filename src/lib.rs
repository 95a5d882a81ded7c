//! chemscan
//!
//! Servidor HTTP de búsqueda de inventario químico:
//! - `config`: configuración inmutable construida al arrancar desde el entorno (.env).
//! - `errors`: mapeo explícito de errores de búsqueda a respuestas HTTP.
//! - `api`: router axum y handlers.
//!
//! El binario (`main.rs`) sólo ensambla estas piezas.

pub mod api;
pub mod config;
pub mod errors;
