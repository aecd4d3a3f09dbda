use super::{normalize_features, prelude::*, resolve_location, select_pois};
use crate::query::{FeatureQuery, DEFAULT_MAX_RESULTS};

pub const DEFAULT_RADIUS_METERS: u32 = 2_000;
pub const DEFAULT_MAX_RADIUS_METERS: u32 = 50_000;
pub const DEFAULT_LIMIT: usize = 5;

/// Bounds for caller supplied search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub max_radius_meters: u32,
    /// Upstream result ceiling, also the maximum limit.
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_radius_meters: DEFAULT_MAX_RADIUS_METERS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub radius_meters: u32,
    pub limit: usize,
}

impl SearchParams {
    pub fn validate(&self, settings: &SearchSettings) -> Result<()> {
        if self.radius_meters == 0 || self.radius_meters > settings.max_radius_meters {
            return Err(InvalidInput::Radius.into());
        }
        if self.limit == 0 || self.limit > settings.max_results {
            return Err(InvalidInput::Limit.into());
        }
        Ok(())
    }
}

/// The external services of a search.
#[derive(Clone, Copy)]
pub struct Sources<'a> {
    pub geocoding: &'a dyn GeoCodingGateway,
    pub features: &'a dyn FeatureGateway,
    /// Weather enrichment is skipped if missing
    pub weather: Option<&'a dyn WeatherGateway>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPois {
    pub location: ResolvedLocation,
    pub pois: Vec<Poi>,
    pub weather: Option<Weather>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Resolving,
    Querying,
    Normalizing,
    Selecting,
    Enriching,
}

fn aborted(stage: Stage) -> impl FnOnce(Error) -> Error {
    move |err| {
        match &err {
            Error::UpstreamProtocol(cause) => {
                log::error!("Search aborted while {stage:?}: {err}: {cause:#}");
            }
            Error::UpstreamUnavailable(cause) => {
                log::warn!("Search aborted while {stage:?}: {err}: {cause:#}");
            }
            _ => {
                log::debug!("Search aborted while {stage:?}: {err}");
            }
        }
        err
    }
}

/// Finds POIs around a known position.
pub async fn find_pois_at(
    features: &dyn FeatureGateway,
    settings: &SearchSettings,
    center: Coordinate,
    params: SearchParams,
) -> Result<Vec<Poi>> {
    params.validate(settings)?;

    log::debug!("{:?} features within {} m around {center}", Stage::Querying, params.radius_meters);
    let query = FeatureQuery::pois_around(center, params.radius_meters, settings.max_results);
    let raw = features
        .query_features(&query)
        .await
        .map_err(Error::from)
        .map_err(aborted(Stage::Querying))?;

    log::debug!("{:?} {} features", Stage::Normalizing, raw.len());
    let pois = normalize_features(raw);

    log::debug!("{:?} up to {} of {} POIs", Stage::Selecting, params.limit, pois.len());
    let pois = select_pois(pois, params.limit);
    Ok(pois)
}

/// Resolves a place name and finds the POIs around it.
///
/// A failing weather service never fails the search.
pub async fn find_pois_near(
    sources: Sources<'_>,
    settings: &SearchSettings,
    location_query: &str,
    params: SearchParams,
) -> Result<NearbyPois> {
    // Reject invalid parameters before calling any service
    params.validate(settings)?;

    log::debug!("{:?} '{}'", Stage::Resolving, location_query.trim());
    let location = resolve_location(sources.geocoding, location_query)
        .await
        .map_err(aborted(Stage::Resolving))?;

    let pois = find_pois_at(sources.features, settings, location.coordinate, params).await?;

    let weather = match sources.weather {
        Some(gw) => {
            log::debug!("{:?} with weather at {}", Stage::Enriching, location.coordinate);
            match gw.current_weather(location.coordinate).await {
                Ok(weather) => Some(weather),
                Err(err) => {
                    log::warn!("Unable to fetch weather: {err}");
                    None
                }
            }
        }
        None => None,
    };

    Ok(NearbyPois {
        location,
        pois,
        weather,
    })
}
