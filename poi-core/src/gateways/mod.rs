use thiserror::Error;

pub mod features;
pub mod geocode;
pub mod weather;

/// Failures of calls to external services.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure, timeout or non-success status.
    #[error("Service unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
    /// The response does not have the expected shape.
    #[error("Unexpected response: {0}")]
    Protocol(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
