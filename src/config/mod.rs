use anyhow::{anyhow, Result};
use poi_gateways::{met_no, nominatim, overpass};
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "poifinder.toml";

const ENV_NAME_PORT: &str = "PORT";

pub struct Config {
    pub webserver: WebServer,
    pub http: Http,
    pub geocoding: Geocoding,
    pub features: Features,
    pub pois: Pois,
    pub weather: Weather,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(port) = env::var(ENV_NAME_PORT) {
            cfg.webserver.port = port
                .parse()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_PORT} '{port}': {err}"))?;
        }
        Ok(cfg)
    }
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub struct Http {
    pub user_agent: String,
    pub timeout: Duration,
}

pub struct Geocoding {
    pub api_url: String,
    /// Appended to every place name query
    pub country: String,
}

pub struct Features {
    pub api_url: String,
    pub server_timeout: Duration,
    pub max_results: usize,
}

pub struct Pois {
    pub default_radius_meters: u32,
    pub max_radius_meters: u32,
    pub default_limit: usize,
}

pub struct Weather {
    /// Disabled if missing
    pub api_url: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            http,
            geocoding,
            features,
            pois,
            weather,
        } = from;

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::Http {
            user_agent,
            timeout,
        } = http.unwrap_or_default();
        if user_agent.trim().is_empty() {
            return Err(anyhow!("Missing user agent"));
        }
        if timeout.is_zero() {
            return Err(anyhow!("Invalid HTTP timeout"));
        }
        let http = Http {
            user_agent,
            timeout,
        };

        let raw::Geocoding { api_url, country } = geocoding.unwrap_or_default();
        let geocoding = Geocoding {
            api_url: api_url.unwrap_or_else(|| nominatim::DEFAULT_API_URL.to_string()),
            country,
        };

        let raw::Features {
            api_url,
            server_timeout,
            max_results,
        } = features.unwrap_or_default();
        if max_results == 0 {
            return Err(anyhow!("The maximum number of results must be positive"));
        }
        let server_timeout = server_timeout.unwrap_or(overpass::DEFAULT_SERVER_TIMEOUT);
        // Otherwise the client gives up before the server reports the timeout
        if server_timeout >= http.timeout {
            return Err(anyhow!(
                "The feature query server timeout must be shorter than the HTTP timeout"
            ));
        }
        let features = Features {
            api_url: api_url.unwrap_or_else(|| overpass::DEFAULT_API_URL.to_string()),
            server_timeout,
            max_results,
        };

        let raw::Pois {
            default_radius,
            max_radius,
            limit,
        } = pois.unwrap_or_default();
        if default_radius == 0 || default_radius > max_radius {
            return Err(anyhow!(
                "The default radius must be within 1..={max_radius} m"
            ));
        }
        if limit == 0 || limit > max_results {
            return Err(anyhow!("The POI limit must be within 1..={max_results}"));
        }
        let pois = Pois {
            default_radius_meters: default_radius,
            max_radius_meters: max_radius,
            default_limit: limit,
        };

        let raw::Weather { enabled, api_url } = weather.unwrap_or_default();
        let weather = Weather {
            api_url: enabled
                .then(|| api_url.unwrap_or_else(|| met_no::DEFAULT_API_URL.to_string())),
        };

        Ok(Self {
            webserver,
            http,
            geocoding,
            features,
            pois,
            weather,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_values() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.webserver.port, 3000);
        assert!(cfg.webserver.enable_cors);
        assert_eq!(cfg.http.user_agent, "VietnamPOIApp/1.0");
        assert_eq!(cfg.http.timeout, Duration::from_secs(30));
        assert_eq!(cfg.geocoding.api_url, nominatim::DEFAULT_API_URL);
        assert_eq!(cfg.geocoding.country, "Vietnam");
        assert_eq!(cfg.features.api_url, overpass::DEFAULT_API_URL);
        assert_eq!(cfg.features.server_timeout, Duration::from_secs(25));
        assert_eq!(cfg.features.max_results, 50);
        assert_eq!(cfg.pois.default_radius_meters, 2000);
        assert_eq!(cfg.pois.max_radius_meters, 50000);
        assert_eq!(cfg.pois.default_limit, 5);
        assert_eq!(cfg.weather.api_url.as_deref(), Some(met_no::DEFAULT_API_URL));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse(
            r#"
            [geocoding]
            country = "Laos"

            [weather]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.geocoding.country, "Laos");
        assert_eq!(cfg.pois.default_limit, 5);
        assert!(cfg.weather.api_url.is_none());
    }

    #[test]
    fn reject_limit_above_max_results() {
        let err = parse(
            r#"
            [features]
            max-results = 10

            [pois]
            default-radius = 2000
            max-radius = 50000
            limit = 11
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn reject_zero_limit() {
        let err = parse(
            r#"
            [pois]
            default-radius = 2000
            max-radius = 50000
            limit = 0
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn reject_default_radius_above_max_radius() {
        let err = parse(
            r#"
            [pois]
            default-radius = 5000
            max-radius = 1000
            limit = 5
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn reject_server_timeout_not_below_http_timeout() {
        let err = parse(
            r#"
            [http]
            user-agent = "test"
            timeout = "20s"

            [features]
            server-timeout = "20s"
            max-results = 50
            "#,
        );
        assert!(err.is_err());

        let cfg = parse(
            r#"
            [http]
            user-agent = "test"
            timeout = "20s"

            [features]
            server-timeout = "15s"
            max-results = 50
            "#,
        )
        .unwrap();
        assert_eq!(cfg.features.server_timeout, Duration::from_secs(15));
    }

    #[test]
    fn reject_blank_user_agent() {
        let err = parse(
            r#"
            [http]
            user-agent = " "
            timeout = "30s"
            "#,
        );
        assert!(err.is_err());
    }
}
