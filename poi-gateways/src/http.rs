use std::time::Duration;

use anyhow::{anyhow, Result};
use poi_core::gateways::Error;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Identifies this application, required
    /// by the usage policies of public services.
    pub user_agent: String,
    /// Deadline for a whole request including the response body.
    pub timeout: Duration,
}

/// Creates the HTTP client that is shared by all gateways.
///
/// The client keeps a connection pool and is cheap to clone.
pub fn client(cfg: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(cfg.user_agent.as_str())
        .timeout(cfg.timeout)
        .build()?;
    Ok(client)
}

pub(crate) async fn fetch_text(request: reqwest::RequestBuilder) -> Result<String, Error> {
    let response = request.send().await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Unavailable(anyhow!(
            "{} responded with status {status}",
            response.url()
        )));
    }
    response.text().await.map_err(request_error)
}

fn request_error(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::Protocol(err.into())
    } else {
        Error::Unavailable(err.into())
    }
}

pub(crate) fn decode_error(err: serde_json::Error) -> Error {
    Error::Protocol(err.into())
}
