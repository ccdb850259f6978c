use crate::types::DocId;

/// Boxed error type used by store backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: DocId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// An opaque failure reported by a persistence backend.
///
/// The core never inspects or retries these; they are carried up to the
/// HTTP layer, which turns them into a sanitized 500.
#[derive(Debug, thiserror::Error)]
#[error("Store error: {source}")]
pub struct StoreError {
    #[source]
    source: BoxError,
}

impl StoreError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}
