use std::ops::Deref;

use poi_core::{
    gateways::{features::FeatureGateway, geocode::GeoCodingGateway, weather::WeatherGateway},
    usecases,
};

pub struct GeoCoding(pub Box<dyn GeoCodingGateway>);

impl Deref for GeoCoding {
    type Target = dyn GeoCodingGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Features(pub Box<dyn FeatureGateway>);

impl Deref for Features {
    type Target = dyn FeatureGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Weather enrichment is disabled if empty.
pub struct Weather(pub Option<Box<dyn WeatherGateway>>);

impl Weather {
    pub fn gateway(&self) -> Option<&dyn WeatherGateway> {
        self.0.as_deref()
    }
}

pub struct Version(pub &'static str);

pub(crate) fn sources<'a>(
    geocoding: &'a GeoCoding,
    features: &'a Features,
    weather: &'a Weather,
) -> usecases::Sources<'a> {
    usecases::Sources {
        geocoding: &**geocoding,
        features: &**features,
        weather: weather.gateway(),
    }
}
