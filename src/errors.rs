// errors.rs
use thiserror::Error;

/// The only failure a search hands back to its caller.
/// Store problems never get here; they degrade to sample data instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search query is empty; enter a car brand or model")]
    EmptyQuery,
}

/// Errors originating from the HTTP layer (routing, bad input).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl From<SearchError> for ServerError {
    fn from(err: SearchError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
