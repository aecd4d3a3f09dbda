pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{poi_builder::*, raw_feature_builder::*};

pub mod raw_feature_builder {

    use super::*;
    use crate::{feature::*, geo::*};

    #[derive(Debug)]
    pub struct RawFeatureBuild {
        feature: RawFeature,
    }

    impl RawFeatureBuild {
        pub fn id(mut self, id: FeatureId) -> Self {
            self.feature.id = id;
            self
        }
        pub fn point(mut self, lat: f64, lon: f64) -> Self {
            self.feature.geometry = GeometryKind::Node;
            self.feature.point = Some(Coordinate::from_lat_lon_deg(lat, lon));
            self.feature.centroid = None;
            self
        }
        pub fn centroid(mut self, lat: f64, lon: f64) -> Self {
            self.feature.geometry = GeometryKind::Way;
            self.feature.point = None;
            self.feature.centroid = Some(Coordinate::from_lat_lon_deg(lat, lon));
            self
        }
        pub fn geometry(mut self, geometry: GeometryKind) -> Self {
            self.feature.geometry = geometry;
            self
        }
        pub fn tag(mut self, key: &str, value: &str) -> Self {
            self.feature.tags.insert(key.into(), value.into());
            self
        }
        pub fn name(self, name: &str) -> Self {
            self.tag("name", name)
        }
        pub fn finish(self) -> RawFeature {
            self.feature
        }
    }

    impl Builder for RawFeature {
        type Build = RawFeatureBuild;
        fn build() -> RawFeatureBuild {
            RawFeatureBuild {
                feature: RawFeature {
                    id: 0,
                    geometry: GeometryKind::Node,
                    point: None,
                    centroid: None,
                    tags: Tags::new(),
                },
            }
        }
    }
}

pub mod poi_builder {

    use super::*;
    use crate::{feature::*, geo::*, poi::*};

    #[derive(Debug)]
    pub struct PoiBuild {
        poi: Poi,
    }

    impl PoiBuild {
        pub fn id(mut self, id: FeatureId) -> Self {
            self.poi.id = id;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.poi.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.poi.category = category.into();
            self
        }
        pub fn pos(mut self, lat: f64, lon: f64) -> Self {
            self.poi.coordinate = Coordinate::from_lat_lon_deg(lat, lon);
            self
        }
        pub fn tag(mut self, key: &str, value: &str) -> Self {
            self.poi.tags.insert(key.into(), value.into());
            self
        }
        pub fn finish(self) -> Poi {
            self.poi
        }
    }

    impl Builder for Poi {
        type Build = PoiBuild;
        fn build() -> PoiBuild {
            PoiBuild {
                poi: Poi {
                    id: 0,
                    name: "POI".into(),
                    category: Category::point_of_interest(),
                    coordinate: Coordinate::from_lat_lon_deg(0.0, 0.0),
                    tags: Tags::new(),
                },
            }
        }
    }
}
