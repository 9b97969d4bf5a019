use thiserror::Error;

use crate::backend::BackendError;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    /// A required input was missing or empty and the façade is configured
    /// to treat that as an error rather than a skip.
    #[error("required input '{0}' is empty")]
    EmptyInput(&'static str),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
