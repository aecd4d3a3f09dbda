mod error;
mod find_pois;
mod normalize_features;
mod resolve_location;
mod select_pois;


pub use self::{
    error::{Error, InvalidInput},
    find_pois::*,
    normalize_features::*,
    resolve_location::*,
    select_pois::*,
};

mod prelude {
    pub use super::error::{Error, InvalidInput};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{features::FeatureGateway, geocode::GeoCodingGateway, weather::WeatherGateway},
    };
}
