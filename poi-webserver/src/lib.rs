#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use std::net::IpAddr;

use poi_core::gateways::{
    features::FeatureGateway, geocode::GeoCodingGateway, weather::WeatherGateway,
};

mod web;

pub use web::Cfg;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    address: IpAddr,
    port: u16,
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Box<dyn GeoCodingGateway>,
    features: Box<dyn FeatureGateway>,
    weather: Option<Box<dyn WeatherGateway>>,
    version: &'static str,
) -> anyhow::Result<()> {
    let rocket_cfg = rocket::Config {
        address,
        port,
        ..rocket::Config::default()
    };
    let gateways = web::Gateways {
        geocoding,
        features,
        weather,
    };
    web::run(enable_cors, rocket_cfg, cfg, gateways, version).await
}
