use thiserror::Error;

/// Engine-level error type.
///
/// The engine itself is pure and infallible once a catalog is loaded;
/// every variant here is a load-time failure surfaced before any
/// scoring runs.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
