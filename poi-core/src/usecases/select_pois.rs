use std::collections::HashSet;

use super::prelude::*;

/// Picks at most `limit` POIs with distinct ids.
///
/// The first occurrence of an id wins and the arrival
/// order is preserved.
pub fn select_pois(pois: Vec<Poi>, limit: usize) -> Vec<Poi> {
    let mut seen = HashSet::with_capacity(pois.len());
    pois.into_iter()
        .filter(|poi| seen.insert(poi.id))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::normalize_features;
    use poi_entities::builders::*;

    fn pois(ids: &[FeatureId]) -> Vec<Poi> {
        ids.iter()
            .map(|id| Poi::build().id(*id).name(&format!("POI {id}")).finish())
            .collect()
    }

    fn ids(pois: &[Poi]) -> Vec<FeatureId> {
        pois.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_input_is_no_error() {
        assert!(select_pois(vec![], 5).is_empty());
    }

    #[test]
    fn remove_duplicates_and_keep_order() {
        let selected = select_pois(pois(&[4, 2, 4, 1, 2, 3]), 10);
        assert_eq!(ids(&selected), vec![4, 2, 1, 3]);
    }

    #[test]
    fn truncate_after_deduplication() {
        let selected = select_pois(pois(&[1, 1, 1, 2, 3, 4]), 3);
        assert_eq!(ids(&selected), vec![1, 2, 3]);
    }

    #[test]
    fn first_occurrence_wins() {
        let first = Poi::build().id(1).name("First").category("museum").finish();
        let second = Poi::build().id(1).name("Second").category("cafe").finish();
        let selected = select_pois(vec![first.clone(), second], 5);
        assert_eq!(selected, vec![first]);
    }

    #[test]
    fn never_more_than_limit_and_no_duplicate_ids() {
        let input = pois(&[5, 3, 5, 8, 1, 1, 9, 3, 2, 7, 7, 6]);
        for limit in 1..15 {
            let selected = select_pois(input.clone(), limit);
            assert!(selected.len() <= limit);
            let unique: HashSet<_> = selected.iter().map(|p| p.id).collect();
            assert_eq!(unique.len(), selected.len());
        }
    }

    #[test]
    fn selecting_twice_changes_nothing() {
        let input = pois(&[5, 3, 5, 8, 1, 1, 9, 3, 2]);
        for limit in 1..10 {
            let once = select_pois(input.clone(), limit);
            let twice = select_pois(once.clone(), limit);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn duplicated_and_unnamed_features() {
        let museum = || {
            RawFeature::build()
                .id(1)
                .point(21.03, 105.85)
                .tag("tourism", "museum")
                .name("History Museum")
                .finish()
        };
        let cafe = RawFeature::build()
            .id(2)
            .centroid(21.04, 105.86)
            .tag("amenity", "cafe")
            .finish();
        let normalized = normalize_features(vec![museum(), museum(), cafe]);
        assert_eq!(ids(&normalized), vec![1, 1]);
        let selected = select_pois(normalized, 5);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, 1);
        assert_eq!(selected[0].category.as_str(), "museum");
    }

    #[test]
    fn keep_first_of_features_with_same_id_but_different_tags() {
        let a = RawFeature::build()
            .id(42)
            .point(1.0, 1.0)
            .tag("tourism", "viewpoint")
            .name("Lookout")
            .finish();
        let b = RawFeature::build()
            .id(42)
            .centroid(2.0, 2.0)
            .tag("historic", "ruins")
            .name("Old Lookout")
            .finish();
        let selected = select_pois(normalize_features(vec![a, b]), 5);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Lookout");
        assert_eq!(selected[0].category.as_str(), "viewpoint");
    }
}
