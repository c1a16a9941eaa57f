use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
