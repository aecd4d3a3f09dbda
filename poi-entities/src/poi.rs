use std::fmt;

use crate::{
    feature::{FeatureId, Tags},
    geo::Coordinate,
};

/// The classification of a POI.
///
/// The value is taken from the first matching tag family
/// of the source feature, e.g. `museum` or `cafe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub const POINT_OF_INTEREST: &'static str = "point_of_interest";

    pub fn point_of_interest() -> Self {
        Self(Self::POINT_OF_INTEREST.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_point_of_interest(&self) -> bool {
        self.0 == Self::POINT_OF_INTEREST
    }

    /// Human readable form, e.g. `fast_food` becomes `Fast food`.
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.map(|c| if c == '_' { ' ' } else { c }))
                .collect(),
            None => String::new(),
        }
    }
}

impl From<String> for Category {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Category {
    fn from(from: &str) -> Self {
        Self(from.to_string())
    }
}

impl From<Category> for String {
    fn from(from: Category) -> Self {
        from.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, classified and geolocated point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub id: FeatureId,
    pub name: String,
    pub category: Category,
    pub coordinate: Coordinate,
    pub tags: Tags,
}
