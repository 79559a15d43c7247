use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid config value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed stats row: {message}")]
    MappingError { message: String },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("Invalid stat_type: {category}")]
    InvalidCategoryError { category: String },

    #[error("{message}")]
    NotFoundError { message: String },

    #[error("{message}")]
    SummaryError { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
