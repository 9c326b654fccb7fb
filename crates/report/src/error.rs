use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize the report to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write the report file: {0}")]
    Io(#[from] std::io::Error),
}
