use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unrecognized table format: {0}")]
    UnknownFormat(String),
    #[error(transparent)]
    Table(#[from] numword_core::ConvertError),
}
