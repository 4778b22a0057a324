use thiserror::Error;

#[derive(Debug, Error)]
pub enum HsrLcaError {
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("Country '{0}' is not among the configured electricity sources")]
    UnknownCountry(String),

    #[error("Emission '{emission}' is not classified into a recognized impact category (found '{category}')")]
    CategoryMismatch { emission: String, category: String },

    #[error("Unknown phase '{0}'")]
    UnknownPhase(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

impl HsrLcaError {
    pub(crate) fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        HsrLcaError::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HsrLcaError>;
