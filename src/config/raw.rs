use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::{net::IpAddr, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("poifinder.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub http: Option<Http>,
    pub geocoding: Option<Geocoding>,
    pub features: Option<Features>,
    pub pois: Option<Pois>,
    pub weather: Option<Weather>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Http {
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Http {
    fn default() -> Self {
        Config::default().http.expect("HTTP configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub api_url: Option<String>,
    pub country: String,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Features {
    pub api_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub server_timeout: Option<Duration>,
    pub max_results: usize,
}

impl Default for Features {
    fn default() -> Self {
        Config::default().features.expect("Features configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pois {
    pub default_radius: u32,
    pub max_radius: u32,
    pub limit: usize,
}

impl Default for Pois {
    fn default() -> Self {
        Config::default().pois.expect("POI configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Weather {
    pub enabled: bool,
    pub api_url: Option<String>,
}

impl Default for Weather {
    fn default() -> Self {
        Config::default().weather.expect("Weather configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.webserver.is_some());
        assert!(cfg.http.is_some());
        assert!(cfg.geocoding.is_some());
        assert!(cfg.features.is_some());
        assert!(cfg.pois.is_some());
        assert!(cfg.weather.is_some());
    }

    #[test]
    fn parse_durations() {
        let cfg = Http::default();
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        let cfg = Features::default();
        assert_eq!(cfg.server_timeout, Some(Duration::from_secs(25)));
    }

    #[test]
    fn optional_service_urls() {
        let cfg: Config = toml::from_str(
            r#"
            [features]
            max-results = 20

            [weather]
            enabled = false
            "#,
        )
        .unwrap();
        let features = cfg.features.unwrap();
        assert!(features.api_url.is_none());
        assert!(features.server_timeout.is_none());
        assert!(cfg.weather.unwrap().api_url.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [pois]
            default-radius = 500
            max-radius = 1000
            limit = 3
            "#,
        )
        .unwrap();
        assert!(cfg.webserver.is_none());
        assert_eq!(cfg.pois.map(|p| p.limit), Some(3));
    }
}
