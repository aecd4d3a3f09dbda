use std::fmt;

use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LON_DEG_MIN: f64 = -180.0;
const LON_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Coordinate out of range: lat = {lat}, lon = {lon}")]
pub struct CoordinateRangeError {
    pub lat: f64,
    pub lon: f64,
}

/// A WGS84 position in degrees.
///
/// Values of this type are always within the valid ranges,
/// i.e. latitude in [-90, 90] and longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn is_valid_lat_deg(lat: f64) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)
    }

    pub fn is_valid_lon_deg(lon: f64) -> bool {
        (LON_DEG_MIN..=LON_DEG_MAX).contains(&lon)
    }

    pub fn try_from_lat_lon_deg(lat: f64, lon: f64) -> Result<Self, CoordinateRangeError> {
        // NaN is rejected by both range checks
        if Self::is_valid_lat_deg(lat) && Self::is_valid_lon_deg(lon) {
            Ok(Self { lat, lon })
        } else {
            Err(CoordinateRangeError { lat, lon })
        }
    }

    /// Panics in debug builds if the values are out of range.
    pub fn from_lat_lon_deg(lat: f64, lon: f64) -> Self {
        debug_assert!(Self::is_valid_lat_deg(lat));
        debug_assert!(Self::is_valid_lon_deg(lon));
        Self { lat, lon }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lon(self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// The extent of a resolved place as reported by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Same order as the geocoder reports it.
    pub const fn to_array(self) -> [f64; 4] {
        [self.south, self.north, self.west, self.east]
    }

    pub fn is_valid(&self) -> bool {
        Coordinate::is_valid_lat_deg(self.south)
            && Coordinate::is_valid_lat_deg(self.north)
            && Coordinate::is_valid_lon_deg(self.west)
            && Coordinate::is_valid_lon_deg(self.east)
            && self.south <= self.north
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([south, north, west, east]: [f64; 4]) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }
}
