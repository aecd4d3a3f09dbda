use std::{fmt::Display, result, str::FromStr};

use poi_boundary::{self as json, Error as JsonErrorResponse};
use poi_core::usecases::{self, InvalidInput, SearchParams};
use rocket::{
    self, get,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route, State,
};

use super::{guards::*, Cfg};

mod error;
mod pois;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        pois::get_search_location,
        pois::get_points_of_interest,
        pois::get_pois_near,
    ]
}

pub fn server_routes() -> Vec<Route> {
    routes![util::get_version]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Parses an optional query parameter.
///
/// Present but unparsable values are rejected instead of
/// falling back to a default.
fn parse_param<T: FromStr>(
    value: Option<&str>,
    invalid: InvalidInput,
) -> result::Result<Option<T>, InvalidInput> {
    value.map(|v| v.trim().parse().map_err(|_| invalid)).transpose()
}

fn search_params(
    cfg: &Cfg,
    radius: Option<&str>,
    limit: Option<&str>,
) -> result::Result<SearchParams, InvalidInput> {
    let radius_meters =
        parse_param(radius, InvalidInput::Radius)?.unwrap_or(cfg.default_radius_meters);
    let limit = parse_param(limit, InvalidInput::Limit)?.unwrap_or(cfg.default_limit);
    Ok(SearchParams {
        radius_meters,
        limit,
    })
}
