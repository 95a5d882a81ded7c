use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error("could not build PubChem client: {0}")]
    Provider(#[from] chem_providers::ProviderError),
}
