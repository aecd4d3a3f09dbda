use anyhow::anyhow;
use poi_core::{
    gateways::{features::FeatureGateway, geocode::GeoCodingGateway, weather::WeatherGateway},
    usecases::{SearchSettings, DEFAULT_LIMIT, DEFAULT_RADIUS_METERS},
};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Used if the request has no radius
    pub default_radius_meters: u32,
    /// Used if the request has no limit
    pub default_limit: usize,
    pub search: SearchSettings,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            default_radius_meters: DEFAULT_RADIUS_METERS,
            default_limit: DEFAULT_LIMIT,
            search: SearchSettings::default(),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    pub geocoding: Box<dyn GeoCodingGateway>,
    pub features: Box<dyn FeatureGateway>,
    pub weather: Option<Box<dyn WeatherGateway>>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways {
        geocoding,
        features,
        weather,
    } = gateways;

    if weather.is_none() {
        info!("Weather enrichment is disabled");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(guards::GeoCoding(geocoding))
        .manage(guards::Features(features))
        .manage(guards::Weather(weather))
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", api::server_routes())]
}

pub(crate) async fn run(
    enable_cors: bool,
    rocket_cfg: RocketCfg,
    cfg: Cfg,
    gateways: Gateways,
    version: &'static str,
) -> anyhow::Result<()> {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version,
    };
    let instance = rocket_instance(options, gateways);
    let server_task = if enable_cors {
        info!("CORS is enabled");
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .map_err(|err| anyhow!("Invalid CORS options: {err}"))?;
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
        return Err(anyhow!("Web server terminated with an error"));
    }
    Ok(())
}
