use anyhow::anyhow;
use async_trait::async_trait;
use poi_core::gateways::{geocode::GeoCodingGateway, Error, Result};
use poi_entities::{
    geo::{BoundingBox, Coordinate},
    location::ResolvedLocation,
};
use serde::Deserialize;

use crate::http::{decode_error, fetch_text};

pub const DEFAULT_API_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Place name search scoped to a single country.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::Client,
    api_url: String,
    country: String,
}

impl Nominatim {
    pub fn new(client: reqwest::Client, api_url: String, country: String) -> Self {
        Self {
            client,
            api_url,
            country,
        }
    }

    fn qualified_query(&self, query: &str) -> String {
        format!("{query}, {}", self.country)
    }
}

#[async_trait]
impl GeoCodingGateway for Nominatim {
    async fn resolve_place(&self, query: &str) -> Result<Option<ResolvedLocation>> {
        let q = self.qualified_query(query);
        let request = self
            .client
            .get(&self.api_url)
            .query(&[("q", q.as_str()), ("format", "json"), ("limit", "1")]);
        let body = fetch_text(request).await?;
        decode_first_place(&body)
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    display_name: String,
    lat: String,
    lon: String,
    boundingbox: Option<Vec<String>>,
}

fn decode_first_place(body: &str) -> Result<Option<ResolvedLocation>> {
    let places: Vec<Place> = serde_json::from_str(body).map_err(decode_error)?;
    places.into_iter().next().map(Place::try_into_location).transpose()
}

impl Place {
    fn try_into_location(self) -> Result<ResolvedLocation> {
        let Self {
            display_name,
            lat,
            lon,
            boundingbox,
        } = self;
        let coordinate = parse_coordinate(&lat, &lon)?;
        let bbox = boundingbox.and_then(|bbox| {
            let bbox = parse_bbox(&bbox);
            if bbox.is_none() {
                log::warn!("Ignoring invalid bounding box of '{display_name}'");
            }
            bbox
        });
        Ok(ResolvedLocation {
            display_name,
            coordinate,
            bbox,
        })
    }
}

fn parse_coordinate(lat: &str, lon: &str) -> Result<Coordinate> {
    let lat = lat
        .parse::<f64>()
        .map_err(|err| Error::Protocol(anyhow!("Invalid latitude '{lat}': {err}")))?;
    let lon = lon
        .parse::<f64>()
        .map_err(|err| Error::Protocol(anyhow!("Invalid longitude '{lon}': {err}")))?;
    Coordinate::try_from_lat_lon_deg(lat, lon).map_err(|err| Error::Protocol(err.into()))
}

fn parse_bbox(values: &[String]) -> Option<BoundingBox> {
    let [south, north, west, east] = values else {
        return None;
    };
    let bbox = BoundingBox::from([
        south.parse().ok()?,
        north.parse().ok()?,
        west.parse().ok()?,
        east.parse().ok()?,
    ]);
    bbox.is_valid().then_some(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANOI: &str = r#"[{
        "place_id": 311172257,
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0. http://osm.org/copyright",
        "osm_type": "relation",
        "osm_id": 1903516,
        "lat": "21.0283334",
        "lon": "105.854041",
        "class": "boundary",
        "type": "administrative",
        "place_rank": 8,
        "importance": 0.7462,
        "addresstype": "city",
        "name": "Hà Nội",
        "display_name": "Hà Nội, Việt Nam",
        "boundingbox": ["20.5645154", "21.3852463", "105.2854", "106.0201"]
    }]"#;

    #[test]
    fn append_the_country_to_the_query() {
        let gw = Nominatim::new(
            reqwest::Client::new(),
            DEFAULT_API_URL.into(),
            "Vietnam".into(),
        );
        assert_eq!(gw.qualified_query("Hoan Kiem"), "Hoan Kiem, Vietnam");
    }

    #[test]
    fn decode_place() {
        let location = decode_first_place(HANOI).unwrap().unwrap();
        assert_eq!(location.display_name, "Hà Nội, Việt Nam");
        assert_eq!(
            location.coordinate,
            Coordinate::from_lat_lon_deg(21.0283334, 105.854041)
        );
        assert_eq!(
            location.bbox.unwrap().to_array(),
            [20.5645154, 21.3852463, 105.2854, 106.0201]
        );
    }

    #[test]
    fn no_candidates() {
        assert!(decode_first_place("[]").unwrap().is_none());
    }

    #[test]
    fn missing_or_broken_bbox_is_ignored() {
        let body = r#"[{"display_name":"x","lat":"1.5","lon":"2.5"}]"#;
        assert!(decode_first_place(body).unwrap().unwrap().bbox.is_none());
        let body =
            r#"[{"display_name":"x","lat":"1.5","lon":"2.5","boundingbox":["1","2","x","4"]}]"#;
        assert!(decode_first_place(body).unwrap().unwrap().bbox.is_none());
        let body = r#"[{"display_name":"x","lat":"1.5","lon":"2.5","boundingbox":["1","2"]}]"#;
        assert!(decode_first_place(body).unwrap().unwrap().bbox.is_none());
    }

    #[test]
    fn invalid_coordinates_are_protocol_errors() {
        for body in [
            r#"[{"display_name":"x","lat":"north","lon":"2.5"}]"#,
            r#"[{"display_name":"x","lat":"91.0","lon":"2.5"}]"#,
        ] {
            assert!(matches!(decode_first_place(body), Err(Error::Protocol(_))));
        }
    }

    #[test]
    fn unexpected_shape_is_a_protocol_error() {
        for body in [r#"{"error":"Unable to geocode"}"#, "<html></html>", ""] {
            assert!(matches!(decode_first_place(body), Err(Error::Protocol(_))));
        }
    }
}
