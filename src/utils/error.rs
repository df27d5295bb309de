use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Dataset request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Dataset parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid selection: {message}")]
    SelectionError { message: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
