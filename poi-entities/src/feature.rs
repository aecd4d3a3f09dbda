use std::collections::BTreeMap;

use crate::geo::Coordinate;

pub type FeatureId = u64;

pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// A single point
    Node,
    /// An area with a computed centroid
    Way,
}

impl GeometryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
        }
    }
}

/// An untrusted feature record as delivered by the
/// external feature database.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeature {
    pub id: FeatureId,
    pub geometry: GeometryKind,
    pub point: Option<Coordinate>,
    pub centroid: Option<Coordinate>,
    pub tags: Tags,
}

impl RawFeature {
    /// The coordinate that matches the geometry kind.
    pub fn position(&self) -> Option<Coordinate> {
        match self.geometry {
            GeometryKind::Node => self.point,
            GeometryKind::Way => self.centroid,
        }
    }

    /// Returns the value of a tag unless it is missing or blank.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn position_depends_on_geometry_kind() {
        let node = RawFeature::build().id(1).point(1.0, 2.0).finish();
        assert_eq!(node.position(), Some(Coordinate::from_lat_lon_deg(1.0, 2.0)));
        let way = RawFeature::build().id(2).centroid(3.0, 4.0).finish();
        assert_eq!(way.position(), Some(Coordinate::from_lat_lon_deg(3.0, 4.0)));

        // A node never falls back to a centroid
        let mut node_with_centroid = way.clone();
        node_with_centroid.geometry = GeometryKind::Node;
        assert_eq!(node_with_centroid.position(), None);
    }

    #[test]
    fn blank_tags_are_treated_as_missing() {
        let f = RawFeature::build()
            .id(1)
            .tag("name", "  ")
            .tag("tourism", "museum")
            .finish();
        assert_eq!(f.tag("name"), None);
        assert_eq!(f.tag("tourism"), Some("museum"));
        assert_eq!(f.tag("amenity"), None);
    }
}
