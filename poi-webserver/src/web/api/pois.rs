use poi_entities::geo::Coordinate;

use super::*;

pub const NO_POIS_FOUND: &str = "No points of interest found in this area";

fn no_pois_message(pois: &[json::Poi]) -> Option<String> {
    pois.is_empty().then(|| NO_POIS_FOUND.to_string())
}

fn position(lat: Option<&str>, lon: Option<&str>) -> result::Result<Coordinate, InvalidInput> {
    let lat = parse_param(lat, InvalidInput::Position)?.ok_or(InvalidInput::Position)?;
    let lon = parse_param(lon, InvalidInput::Position)?.ok_or(InvalidInput::Position)?;
    Coordinate::try_from_lat_lon_deg(lat, lon).map_err(|_| InvalidInput::Position)
}

#[get("/search-location?<location>")]
pub async fn get_search_location(
    geocoding: &State<GeoCoding>,
    location: Option<&str>,
) -> Result<json::Location> {
    let location =
        usecases::resolve_location(&**geocoding.inner(), location.unwrap_or_default()).await?;
    Ok(Json(location.into()))
}

#[get("/points-of-interest?<lat>&<lon>&<radius>&<limit>")]
pub async fn get_points_of_interest(
    features: &State<Features>,
    cfg: &State<Cfg>,
    lat: Option<&str>,
    lon: Option<&str>,
    radius: Option<&str>,
    limit: Option<&str>,
) -> Result<json::PoiList> {
    let center = position(lat, lon)?;
    let params = search_params(cfg, radius, limit)?;
    let pois = usecases::find_pois_at(&**features.inner(), &cfg.search, center, params).await?;
    let pois: Vec<json::Poi> = pois.into_iter().map(Into::into).collect();
    let message = no_pois_message(&pois);
    Ok(Json(json::PoiList { pois, message }))
}

#[get("/pois-near?<location>&<radius>&<limit>")]
pub async fn get_pois_near(
    geocoding: &State<GeoCoding>,
    features: &State<Features>,
    weather: &State<Weather>,
    cfg: &State<Cfg>,
    location: Option<&str>,
    radius: Option<&str>,
    limit: Option<&str>,
) -> Result<json::NearbyPois> {
    let params = search_params(cfg, radius, limit)?;
    let sources = sources(geocoding.inner(), features.inner(), weather.inner());
    let usecases::NearbyPois {
        location,
        pois,
        weather,
    } = usecases::find_pois_near(sources, &cfg.search, location.unwrap_or_default(), params)
        .await?;
    let pois: Vec<json::Poi> = pois.into_iter().map(Into::into).collect();
    let message = no_pois_message(&pois);
    Ok(Json(json::NearbyPois {
        location: location.into(),
        pois,
        weather: weather.map(Into::into),
        message,
    }))
}
