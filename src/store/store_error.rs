use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store was asked for listings without an endpoint and key.
    #[error("listing store is not configured")]
    Unconfigured,

    /// Transport failure, non-success status, or an unreadable body.
    #[error("listing store query failed: {0}")]
    QueryFailed(#[source] BoxError),
}

impl StoreError {
    pub fn query_failed(cause: impl Into<BoxError>) -> Self {
        StoreError::QueryFailed(cause.into())
    }
}
