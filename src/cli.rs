use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use poi_core::{gateways::weather::WeatherGateway, usecases::SearchSettings};
use poi_gateways::{met_no::MetNo, nominatim::Nominatim, overpass::Overpass, HttpConfig};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "Find points of interest near a place")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,
    /// Overrides the configured port
    #[arg(long)]
    port: Option<u16>,
    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let Config {
        webserver,
        http,
        geocoding,
        features,
        pois,
        weather,
    } = Config::try_load_from_file_or_default(args.config_file)?;

    let client = poi_gateways::client(&HttpConfig {
        user_agent: http.user_agent,
        timeout: http.timeout,
    })?;

    log::info!(
        "Resolving places in {} with {}",
        geocoding.country,
        geocoding.api_url
    );
    let geocoding = Nominatim::new(client.clone(), geocoding.api_url, geocoding.country);

    log::info!("Querying features with {}", features.api_url);
    let feature_gw = Overpass::new(client.clone(), features.api_url, features.server_timeout);

    let weather = weather.api_url.map(|api_url| {
        log::info!("Fetching weather with {api_url}");
        Box::new(MetNo::new(client, api_url)) as Box<dyn WeatherGateway>
    });

    let cfg = poi_webserver::Cfg {
        default_radius_meters: pois.default_radius_meters,
        default_limit: pois.default_limit,
        search: SearchSettings {
            max_radius_meters: pois.max_radius_meters,
            max_results: features.max_results,
        },
    };

    poi_webserver::run(
        webserver.address,
        args.port.unwrap_or(webserver.port),
        args.enable_cors || webserver.enable_cors,
        cfg,
        Box::new(geocoding),
        Box::new(feature_gw),
        weather,
        env!("CARGO_PKG_VERSION"),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_flags() {
        let args = Args::parse_from([
            "poifinder",
            "--config-file",
            "custom.toml",
            "--port",
            "8080",
            "--enable-cors",
        ]);
        assert_eq!(args.config_file, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.port, Some(8080));
        assert!(args.enable_cors);
    }
}
