use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopperError>;

#[derive(Debug, Error)]
pub enum ShopperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV Header: {0}")]
    CsvHeader(String),

    #[error("Invalid CSV row {row}: expected at least 2 columns, got {got}")]
    CsvRow { row: usize, got: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid zone '{category}': {message}")]
    Validation { category: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for ShopperError {
    fn from(err: toml::de::Error) -> Self {
        ShopperError::Config(format!("TOML parse error: {}", err))
    }
}
