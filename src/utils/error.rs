use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelatedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Content store error: {message}")]
    StoreError { message: String },
}

pub type Result<T> = std::result::Result<T, RelatedError>;
