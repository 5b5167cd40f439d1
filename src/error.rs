use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeakscanError>;

#[derive(Error, Debug)]
pub enum LeakscanError {
    #[error("Invalid pattern '{pattern_id}': {message}")]
    Pattern { pattern_id: String, message: String },

    #[error("Duplicate pattern id: {0}")]
    DuplicatePattern(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
