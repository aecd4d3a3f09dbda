use async_trait::async_trait;
use poi_entities::location::ResolvedLocation;

use super::Result;

#[async_trait]
pub trait GeoCodingGateway: Send + Sync {
    /// Looks up the best matching place for a free-text query.
    ///
    /// Returns `None` if the service found no candidate.
    async fn resolve_place(&self, query: &str) -> Result<Option<ResolvedLocation>>;
}
