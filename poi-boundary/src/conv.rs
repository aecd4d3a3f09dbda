use super::*;
use poi_entities as e;

impl From<e::location::ResolvedLocation> for Location {
    fn from(from: e::location::ResolvedLocation) -> Self {
        let e::location::ResolvedLocation {
            display_name,
            coordinate,
            bbox,
        } = from;
        Self {
            name: display_name,
            lat: coordinate.lat(),
            lon: coordinate.lon(),
            boundingbox: bbox.map(e::geo::BoundingBox::to_array),
        }
    }
}

impl From<e::poi::Poi> for Poi {
    fn from(from: e::poi::Poi) -> Self {
        let e::poi::Poi {
            id,
            name,
            category,
            coordinate,
            tags,
        } = from;
        Self {
            id,
            name,
            type_name: category.display_name(),
            category: category.into(),
            lat: coordinate.lat(),
            lon: coordinate.lon(),
            tags,
        }
    }
}

impl From<e::weather::Weather> for Weather {
    fn from(from: e::weather::Weather) -> Self {
        let e::weather::Weather {
            time,
            air_temperature,
            wind_speed,
            wind_from_direction,
            relative_humidity,
            symbol_code,
        } = from;
        Self {
            time: time.unix_timestamp(),
            air_temperature,
            wind_speed,
            wind_from_direction,
            relative_humidity,
            symbol_code,
        }
    }
}
