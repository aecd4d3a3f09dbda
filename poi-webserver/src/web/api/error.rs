use poi_core::usecases::{Error as UsecaseError, InvalidInput};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

use super::json_error_response;

const UPSTREAM_FAILURE: &str = "An external service is not available, please try again later";

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(#[from] UsecaseError);

impl From<InvalidInput> for Error {
    fn from(err: InvalidInput) -> Self {
        Self(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        let Self(err) = self;
        match &err {
            UsecaseError::InvalidInput(_) => json_error_response(req, &err, Status::BadRequest),
            UsecaseError::NotFound => json_error_response(req, &err, Status::NotFound),
            UsecaseError::UpstreamUnavailable(cause) | UsecaseError::UpstreamProtocol(cause) => {
                error!("{} {}: {err}: {cause:#}", req.method(), req.uri());
                json_error_response(req, &UPSTREAM_FAILURE, Status::InternalServerError)
            }
        }
    }
}
