use async_trait::async_trait;
use poi_entities::{geo::Coordinate, weather::Weather};

use super::Result;

#[async_trait]
pub trait WeatherGateway: Send + Sync {
    async fn current_weather(&self, pos: Coordinate) -> Result<Weather>;
}
