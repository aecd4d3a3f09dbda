use crate::gateways;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("Location not found")]
    NotFound,
    #[error("Upstream service unavailable")]
    UpstreamUnavailable(#[source] anyhow::Error),
    #[error("Upstream service returned an unexpected response")]
    UpstreamProtocol(#[source] anyhow::Error),
}

/// Caller supplied parameters that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("The location must not be empty")]
    EmptyLocation,
    #[error("Invalid position")]
    Position,
    #[error("Invalid radius")]
    Radius,
    #[error("Invalid limit")]
    Limit,
}

impl From<gateways::Error> for Error {
    fn from(err: gateways::Error) -> Self {
        match err {
            gateways::Error::Unavailable(err) => Self::UpstreamUnavailable(err),
            gateways::Error::Protocol(err) => Self::UpstreamProtocol(err),
        }
    }
}

impl From<poi_entities::geo::CoordinateRangeError> for Error {
    fn from(_: poi_entities::geo::CoordinateRangeError) -> Self {
        Self::InvalidInput(InvalidInput::Position)
    }
}
