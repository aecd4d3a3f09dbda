use async_trait::async_trait;
use poi_entities::feature::RawFeature;

use super::Result;
use crate::query::FeatureQuery;

#[async_trait]
pub trait FeatureGateway: Send + Sync {
    /// Fetches all features that match the query.
    ///
    /// An empty result is not an error.
    async fn query_features(&self, query: &FeatureQuery) -> Result<Vec<RawFeature>>;
}
