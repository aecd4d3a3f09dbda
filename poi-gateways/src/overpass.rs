use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use itertools::Itertools;
use poi_core::{
    gateways::{features::FeatureGateway, Error, Result},
    query::{FeatureQuery, TagFilter, TagMatch},
};
use poi_entities::{
    feature::{FeatureId, GeometryKind, RawFeature, Tags},
    geo::Coordinate,
};
use serde::Deserialize;
use serde_json::Value;

use crate::http::{decode_error, fetch_text};

pub const DEFAULT_API_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_SERVER_TIMEOUT: Duration = Duration::from_secs(25);

/// Spatial tag queries against an Overpass API instance.
#[derive(Debug, Clone)]
pub struct Overpass {
    client: reqwest::Client,
    api_url: String,
    /// Query timeout that is enforced by the server.
    server_timeout: Duration,
}

impl Overpass {
    pub fn new(client: reqwest::Client, api_url: String, server_timeout: Duration) -> Self {
        Self {
            client,
            api_url,
            server_timeout,
        }
    }
}

#[async_trait]
impl FeatureGateway for Overpass {
    async fn query_features(&self, query: &FeatureQuery) -> Result<Vec<RawFeature>> {
        let ql = overpass_ql(query, self.server_timeout);
        log::debug!("Overpass query: {ql}");
        let request = self
            .client
            .post(&self.api_url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(ql);
        let body = fetch_text(request).await?;
        decode_features(&body)
    }
}

/// Renders the query as Overpass QL.
///
/// Area features are requested with their center instead
/// of the full geometry.
pub fn overpass_ql(query: &FeatureQuery, server_timeout: Duration) -> String {
    let FeatureQuery {
        center,
        radius_meters,
        filters,
        geometries,
        max_results,
    } = query;
    let around = format!("(around:{radius_meters},{},{})", center.lat(), center.lon());
    let statements = geometries
        .iter()
        .cartesian_product(filters.iter())
        .format_with("", |(geometry, filter), f| {
            f(&format_args!(
                "  {}{}{around};\n",
                geometry.as_str(),
                tag_filter(filter)
            ))
        });
    format!(
        "[out:json][timeout:{}];\n(\n{statements});\nout center {max_results};\n",
        server_timeout.as_secs()
    )
}

fn tag_filter(filter: &TagFilter) -> String {
    let key = escape(filter.key);
    match filter.value {
        TagMatch::Any => format!("[\"{key}\"]"),
        TagMatch::OneOf(values) => {
            let alternatives = values.iter().map(|v| escape_regex(v)).join("|");
            let pattern = escape(&format!("^({alternatives})$"));
            format!("[\"{key}\"~\"{pattern}\"]")
        }
    }
}

/// Escapes a string literal.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_regex(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<Value>,
    remark: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawElement {
    Node {
        id: FeatureId,
        lat: Option<f64>,
        lon: Option<f64>,
        #[serde(default)]
        tags: Tags,
    },
    Way {
        id: FeatureId,
        center: Option<RawPosition>,
        #[serde(default)]
        tags: Tags,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct RawPosition {
    lat: f64,
    lon: f64,
}

impl RawElement {
    fn into_feature(self) -> Option<RawFeature> {
        match self {
            Self::Node { id, lat, lon, tags } => Some(RawFeature {
                id,
                geometry: GeometryKind::Node,
                point: lat.zip(lon).and_then(|(lat, lon)| position(id, lat, lon)),
                centroid: None,
                tags,
            }),
            Self::Way { id, center, tags } => Some(RawFeature {
                id,
                geometry: GeometryKind::Way,
                point: None,
                centroid: center.and_then(|RawPosition { lat, lon }| position(id, lat, lon)),
                tags,
            }),
            Self::Other => None,
        }
    }
}

fn position(id: FeatureId, lat: f64, lon: f64) -> Option<Coordinate> {
    Coordinate::try_from_lat_lon_deg(lat, lon)
        .map_err(|err| log::warn!("Ignoring position of element {id}: {err}"))
        .ok()
}

/// Prefix of remarks that report a failed query, e.g. a server side
/// timeout or exceeded memory limits.
const RUNTIME_ERROR_REMARK: &str = "runtime error";

/// Decodes the response envelope.
///
/// Elements that cannot be decoded are skipped.
fn decode_features(body: &str) -> Result<Vec<RawFeature>> {
    let OverpassResponse { elements, remark } =
        serde_json::from_str(body).map_err(decode_error)?;
    if let Some(remark) = remark {
        if remark.trim_start().starts_with(RUNTIME_ERROR_REMARK) {
            return Err(Error::Unavailable(anyhow!("Overpass query failed: {remark}")));
        }
        log::warn!("Overpass remark: {remark}");
    }
    let count = elements.len();
    let features: Vec<_> = elements
        .into_iter()
        .filter_map(|element| match serde_json::from_value::<RawElement>(element) {
            Ok(element) => element.into_feature(),
            Err(err) => {
                log::warn!("Skipping malformed element: {err}");
                None
            }
        })
        .collect();
    log::debug!("Decoded {} of {count} elements", features.len());
    Ok(features)
}
