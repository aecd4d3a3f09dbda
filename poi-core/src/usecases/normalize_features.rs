use super::prelude::*;
use crate::tag::{POI_CLASSIFIER, TAG_NAME};

/// Turns raw features into POIs.
///
/// Features without a usable position or name are dropped.
/// The order of the remaining features is preserved.
pub fn normalize_features(features: Vec<RawFeature>) -> Vec<Poi> {
    let count = features.len();
    let pois: Vec<_> = features.into_iter().filter_map(normalize_feature).collect();
    if pois.len() < count {
        log::debug!("Dropped {} of {count} features", count - pois.len());
    }
    pois
}

pub fn normalize_feature(feature: RawFeature) -> Option<Poi> {
    let Some(coordinate) = feature.position() else {
        log::debug!(
            "Dropping {} {} without position",
            feature.geometry.as_str(),
            feature.id
        );
        return None;
    };
    let category = POI_CLASSIFIER.classify(&feature);
    let Some(name) = feature.tag(TAG_NAME).map(ToString::to_string) else {
        log::debug!(
            "Dropping {} {} without name",
            feature.geometry.as_str(),
            feature.id
        );
        return None;
    };
    let RawFeature { id, tags, .. } = feature;
    Some(Poi {
        id,
        name,
        category,
        coordinate,
        tags,
    })
}
