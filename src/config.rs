//! Configuración del servidor.
//! Carga variables de entorno (.env) una sola vez y construye un
//! `ServerConfig` inmutable que se pasa explícitamente al estado de la app.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use chem_core::{MatchKey, SearchSettings};
use chem_domain::{DEFAULT_MAX_RECORDS, DEFAULT_THRESHOLD};
use chem_inventory::DEFAULT_INVENTORY_FILE;
use chem_providers::pubchem::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub pubchem_base_url: String,
    pub pubchem_timeout: Duration,
    /// Ruta del inventario, relativa al directorio de trabajo del proceso.
    pub inventory_file: PathBuf,
    /// Página servida en `GET /`.
    pub index_file: PathBuf,
    pub similarity_threshold: u8,
    pub match_key: MatchKey,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
               pubchem_base_url: DEFAULT_BASE_URL.to_string(),
               pubchem_timeout: DEFAULT_TIMEOUT,
               inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
               index_file: PathBuf::from(DEFAULT_INDEX_FILE),
               similarity_threshold: DEFAULT_THRESHOLD,
               match_key: MatchKey::default() }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_source(|key| env::var(key).ok())
    }

    /// Construye la configuración leyendo cada variable con `lookup`.
    ///
    /// Valores numéricos no parseables vuelven al valor por defecto; una
    /// dirección de escucha o clave de cruce inválidas son error.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = match var("CHEMSCAN_BIND_ADDR") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid { var: "CHEMSCAN_BIND_ADDR",
                                                                        reason: format!("{raw}: {e}") })?,
            None => defaults.bind_addr,
        };
        let match_key = match var("CHEMSCAN_MATCH_KEY") {
            Some(raw) => raw.parse::<MatchKey>().map_err(|reason| ConfigError::Invalid { var: "CHEMSCAN_MATCH_KEY", reason })?,
            None => defaults.match_key,
        };
        let pubchem_timeout = var("PUBCHEM_TIMEOUT_SECS").and_then(|v| v.parse().ok())
                                                         .map(Duration::from_secs)
                                                         .unwrap_or(defaults.pubchem_timeout);
        let similarity_threshold = var("CHEMSCAN_SIMILARITY_THRESHOLD").and_then(|v| v.parse::<u32>().ok())
                                                                       .map(|v| v.min(100) as u8)
                                                                       .unwrap_or(defaults.similarity_threshold);

        Ok(Self { bind_addr,
                  pubchem_base_url: var("PUBCHEM_BASE_URL").unwrap_or(defaults.pubchem_base_url),
                  pubchem_timeout,
                  inventory_file: var("CHEMSCAN_INVENTORY_FILE").map(PathBuf::from).unwrap_or(defaults.inventory_file),
                  index_file: var("CHEMSCAN_INDEX_FILE").map(PathBuf::from).unwrap_or(defaults.index_file),
                  similarity_threshold,
                  match_key })
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings { threshold: self.similarity_threshold,
                         max_records: DEFAULT_MAX_RECORDS,
                         match_key: self.match_key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.inventory_file, PathBuf::from("Walczak-Inventory.csv"));
        assert_eq!(cfg.search_settings(), SearchSettings::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = config_from(&[("CHEMSCAN_BIND_ADDR", "0.0.0.0:8080"),
                                ("PUBCHEM_BASE_URL", "http://localhost:9000/rest/pug"),
                                ("PUBCHEM_TIMEOUT_SECS", "5"),
                                ("CHEMSCAN_INVENTORY_FILE", "data/inventory.csv"),
                                ("CHEMSCAN_SIMILARITY_THRESHOLD", "90"),
                                ("CHEMSCAN_MATCH_KEY", "pubchem_id")]).unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.pubchem_base_url, "http://localhost:9000/rest/pug");
        assert_eq!(cfg.pubchem_timeout, Duration::from_secs(5));
        assert_eq!(cfg.inventory_file, PathBuf::from("data/inventory.csv"));
        assert_eq!(cfg.similarity_threshold, 90);
        assert_eq!(cfg.match_key, MatchKey::PubChemId);
    }

    #[test]
    fn test_bad_numbers_fall_back_and_threshold_clamps() {
        let cfg = config_from(&[("PUBCHEM_TIMEOUT_SECS", "soon"), ("CHEMSCAN_SIMILARITY_THRESHOLD", "250")]).unwrap();
        assert_eq!(cfg.pubchem_timeout, DEFAULT_TIMEOUT);
        assert_eq!(cfg.similarity_threshold, 100);
    }

    #[test]
    fn test_invalid_bind_addr_and_match_key() {
        assert!(matches!(config_from(&[("CHEMSCAN_BIND_ADDR", "localhost")]),
                         Err(ConfigError::Invalid { var: "CHEMSCAN_BIND_ADDR", .. })));
        assert!(matches!(config_from(&[("CHEMSCAN_MATCH_KEY", "smiles")]),
                         Err(ConfigError::Invalid { var: "CHEMSCAN_MATCH_KEY", .. })));
    }
}
