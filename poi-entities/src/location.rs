use crate::geo::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub display_name: String,
    pub coordinate: Coordinate,
    pub bbox: Option<BoundingBox>,
}
