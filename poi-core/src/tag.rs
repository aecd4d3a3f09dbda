use poi_entities::{feature::RawFeature, poi::Category};

pub const TAG_NAME: &str = "name";
pub const TAG_TOURISM: &str = "tourism";
pub const TAG_AMENITY: &str = "amenity";
pub const TAG_HISTORIC: &str = "historic";

/// Ordered classification rules.
///
/// The first tag key with a non-empty value determines the
/// category, otherwise the fallback is used.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    pub rules: &'static [&'static str],
    pub fallback: &'static str,
}

pub const POI_CLASSIFIER: Classifier = Classifier {
    rules: &[TAG_TOURISM, TAG_AMENITY, TAG_HISTORIC],
    fallback: Category::POINT_OF_INTEREST,
};

impl Classifier {
    pub fn classify(&self, feature: &RawFeature) -> Category {
        self.rules
            .iter()
            .find_map(|key| feature.tag(key))
            .unwrap_or(self.fallback)
            .into()
    }
}
