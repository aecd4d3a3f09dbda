//! Current weather from the MET Norway location forecast.

use anyhow::anyhow;
use async_trait::async_trait;
use poi_core::gateways::{weather::WeatherGateway, Error, Result};
use poi_entities::{geo::Coordinate, weather::Weather};
use serde::Deserialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::http::{decode_error, fetch_text};

pub const DEFAULT_API_URL: &str = "https://api.met.no/weatherapi/locationforecast/2.0/compact";

#[derive(Debug, Clone)]
pub struct MetNo {
    client: reqwest::Client,
    api_url: String,
}

impl MetNo {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl WeatherGateway for MetNo {
    async fn current_weather(&self, pos: Coordinate) -> Result<Weather> {
        // The service asks clients to truncate coordinates to 4 decimals
        let lat = format!("{:.4}", pos.lat());
        let lon = format!("{:.4}", pos.lon());
        let request = self
            .client
            .get(&self.api_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("lat", lat.as_str()), ("lon", lon.as_str())]);
        let body = fetch_text(request).await?;
        decode_current_weather(&body)
    }
}

#[derive(Deserialize)]
struct Forecast {
    properties: Properties,
}

#[derive(Deserialize)]
struct Properties {
    timeseries: Vec<Timeseries>,
}

#[derive(Deserialize)]
struct Timeseries {
    time: String,
    data: TimeseriesData,
}

#[derive(Deserialize)]
struct TimeseriesData {
    instant: Instant,
    next_1_hours: Option<NextHours>,
}

#[derive(Deserialize)]
struct Instant {
    details: InstantDetails,
}

#[derive(Deserialize)]
struct InstantDetails {
    air_temperature: Option<f64>,
    wind_speed: Option<f64>,
    wind_from_direction: Option<f64>,
    relative_humidity: Option<f64>,
}

#[derive(Deserialize)]
struct NextHours {
    summary: Summary,
}

#[derive(Deserialize)]
struct Summary {
    symbol_code: String,
}

/// Picks the first entry of the forecast as the current weather.
fn decode_current_weather(body: &str) -> Result<Weather> {
    let Forecast { properties } = serde_json::from_str(body).map_err(decode_error)?;
    let Timeseries { time, data } = properties
        .timeseries
        .into_iter()
        .next()
        .ok_or_else(|| Error::Protocol(anyhow!("Empty forecast timeseries")))?;
    let time = OffsetDateTime::parse(&time, &Rfc3339)
        .map_err(|err| Error::Protocol(anyhow!("Invalid forecast time '{time}': {err}")))?;
    let TimeseriesData {
        instant,
        next_1_hours,
    } = data;
    let InstantDetails {
        air_temperature,
        wind_speed,
        wind_from_direction,
        relative_humidity,
    } = instant.details;
    Ok(Weather {
        time,
        air_temperature,
        wind_speed,
        wind_from_direction,
        relative_humidity,
        symbol_code: next_1_hours.map(|next| next.summary.symbol_code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn decode_first_entry() {
        let body = r#"{
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [105.85, 21.03, 12] },
          "properties": {
            "meta": { "updated_at": "2024-06-01T11:30:00Z", "units": {} },
            "timeseries": [
              {
                "time": "2024-06-01T12:00:00Z",
                "data": {
                  "instant": {
                    "details": {
                      "air_pressure_at_sea_level": 1003.1,
                      "air_temperature": 31.4,
                      "relative_humidity": 74.2,
                      "wind_from_direction": 140.5,
                      "wind_speed": 2.8
                    }
                  },
                  "next_1_hours": {
                    "summary": { "symbol_code": "partlycloudy_day" },
                    "details": { "precipitation_amount": 0.0 }
                  }
                }
              },
              {
                "time": "2024-06-01T13:00:00Z",
                "data": { "instant": { "details": { "air_temperature": 32.0 } } }
              }
            ]
          }
        }"#;
        let weather = decode_current_weather(body).unwrap();
        assert_eq!(weather.time, datetime!(2024-06-01 12:00 UTC));
        assert_eq!(weather.air_temperature, Some(31.4));
        assert_eq!(weather.wind_speed, Some(2.8));
        assert_eq!(weather.wind_from_direction, Some(140.5));
        assert_eq!(weather.relative_humidity, Some(74.2));
        assert_eq!(weather.symbol_code.as_deref(), Some("partlycloudy_day"));
    }

    #[test]
    fn decode_without_summary() {
        let body = r#"{"properties": {"timeseries": [
            { "time": "2024-06-01T12:00:00+07:00", "data": { "instant": { "details": {} } } }
        ]}}"#;
        let weather = decode_current_weather(body).unwrap();
        assert_eq!(weather.time, datetime!(2024-06-01 05:00 UTC));
        assert!(weather.air_temperature.is_none());
        assert!(weather.symbol_code.is_none());
    }

    #[test]
    fn reject_empty_timeseries() {
        let body = r#"{"properties": {"timeseries": []}}"#;
        assert!(matches!(decode_current_weather(body), Err(Error::Protocol(_))));
    }

    #[test]
    fn reject_invalid_time() {
        let body = r#"{"properties": {"timeseries": [
            { "time": "yesterday", "data": { "instant": { "details": {} } } }
        ]}}"#;
        assert!(matches!(decode_current_weather(body), Err(Error::Protocol(_))));
    }
}
