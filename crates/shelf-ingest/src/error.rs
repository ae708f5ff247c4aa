use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {source}")]
    JsonLine {
        line: usize,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
