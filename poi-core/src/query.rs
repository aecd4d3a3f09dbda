//! Description of a spatial tag query.
//!
//! The query is pure data, gateways translate it into the
//! query language of their service.

use poi_entities::{feature::GeometryKind, geo::Coordinate};

use crate::tag::*;

/// Upstream result ceiling.
///
/// Larger than the number of POIs returned to the caller
/// to leave room for features that are dropped.
pub const DEFAULT_MAX_RESULTS: usize = 50;

pub const POI_AMENITIES: &[&str] = &[
    "restaurant",
    "cafe",
    "museum",
    "theatre",
    "library",
    "cinema",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMatch {
    /// The tag exists with an arbitrary value
    Any,
    /// The tag value is one of the listed values
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFilter {
    pub key: &'static str,
    pub value: TagMatch,
}

/// The tag families of interest.
pub const POI_TAG_FILTERS: &[TagFilter] = &[
    TagFilter {
        key: TAG_TOURISM,
        value: TagMatch::Any,
    },
    TagFilter {
        key: TAG_AMENITY,
        value: TagMatch::OneOf(POI_AMENITIES),
    },
    TagFilter {
        key: TAG_HISTORIC,
        value: TagMatch::Any,
    },
];

pub const POI_GEOMETRIES: &[GeometryKind] = &[GeometryKind::Node, GeometryKind::Way];

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureQuery {
    pub center: Coordinate,
    pub radius_meters: u32,
    /// Features matching any of the filters are selected
    pub filters: &'static [TagFilter],
    pub geometries: &'static [GeometryKind],
    pub max_results: usize,
}

impl FeatureQuery {
    pub fn pois_around(center: Coordinate, radius_meters: u32, max_results: usize) -> Self {
        debug_assert!(radius_meters > 0);
        Self {
            center,
            radius_meters,
            filters: POI_TAG_FILTERS,
            geometries: POI_GEOMETRIES,
            max_results,
        }
    }
}
