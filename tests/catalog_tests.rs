//! Tests for relation linking, region filtering and catalog validation.

mod support;

use std::collections::HashMap;
use std::sync::Arc;

use rstest::rstest;
use tourpack::catalog::{build_attraction_index, link_relations, Catalog, LinkReport};
use tourpack::error::CatalogError;
use tourpack::models::{Attraction, AttractionId, Tour};

use support::{attraction, link, region, three_tour_catalog};

fn attraction_map(attractions: Vec<Attraction>) -> HashMap<AttractionId, Arc<Attraction>> {
    attractions
        .into_iter()
        .map(|a| (a.id, Arc::new(a)))
        .collect()
}

#[test]
fn test_link_relations_skips_unresolved_records() {
    let mut tours = vec![Tour::new(1, "R", "T1", 1.0, 1), Tour::new(2, "R", "T2", 1.0, 1)];
    let attractions = attraction_map(vec![attraction(10, "R", 3), attraction(11, "R", 4)]);
    let links = vec![link(1, 10), link(1, 99), link(42, 10), link(2, 11), link(2, 10)];

    let report = link_relations(&mut tours, &attractions, &links);

    assert_eq!(report, LinkReport { linked: 3, skipped: 2 });
    assert_eq!(tours[0].attraction_ids().collect::<Vec<_>>(), vec![10]);
    assert_eq!(tours[1].attraction_ids().collect::<Vec<_>>(), vec![10, 11]);
}

#[test]
fn test_link_relations_is_idempotent_for_repeated_records() {
    let mut tours = vec![Tour::new(1, "R", "T1", 1.0, 1)];
    let attractions = attraction_map(vec![attraction(10, "R", 3)]);

    link_relations(&mut tours, &attractions, &[link(1, 10), link(1, 10)]);

    assert_eq!(tours[0].cultural_value(), 3);
}

#[test]
fn test_attraction_index_mirrors_tour_sets() {
    let catalog = three_tour_catalog();
    let index = build_attraction_index(catalog.tours());

    for tour in catalog.tours() {
        for attraction_id in tour.attraction_ids() {
            assert!(index[&attraction_id].contains(&tour.id));
        }
    }
    for (attraction_id, tour_ids) in &index {
        for tour_id in tour_ids {
            let tour = catalog.tour(*tour_id).expect("indexed tour exists");
            assert!(tour.visits(*attraction_id));
        }
    }
}

#[rstest]
#[case(1, vec![1, 3])]
#[case(2, vec![2])]
#[case(3, vec![3])]
#[case(99, vec![])]
fn test_tours_for_attraction(#[case] attraction_id: u32, #[case] expected: Vec<u32>) {
    let catalog = three_tour_catalog();

    let ids: Vec<u32> = catalog
        .tours_for_attraction(attraction_id)
        .iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, expected);
}

#[test]
fn test_tours_for_region_keeps_catalog_order() {
    let tours = vec![
        Tour::new(5, "A", "first", 1.0, 1),
        Tour::new(2, "B", "other", 1.0, 1),
        Tour::new(9, "A", "second", 1.0, 1),
        Tour::new(1, "A", "third", 1.0, 1),
    ];
    let catalog = Catalog::from_parts(vec![region("A"), region("B")], tours, vec![], &[])
        .expect("valid catalog");

    let names: Vec<&str> = catalog
        .tours_for_region("A")
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert_eq!(names, vec!["first", "second", "third"]);
    assert!(catalog.tours_for_region("C").is_empty());
}

#[test]
fn test_list_regions_and_lookups() {
    let catalog = three_tour_catalog();

    let ids: Vec<&str> = catalog.list_regions().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["R", "EMPTY"]);
    assert_eq!(catalog.region("R").map(|r| r.name.as_str()), Some("Region R"));
    assert!(catalog.region("X").is_none());
    assert_eq!(catalog.attraction(3).map(|a| a.cultural_value), Some(2));
    assert_eq!(catalog.tour(2).map(|t| t.name.as_str()), Some("T2"));
    assert_eq!(catalog.attraction_count(), 3);
    assert_eq!(catalog.link_report(), LinkReport { linked: 4, skipped: 0 });
}

#[rstest]
#[case::negative(-1.0)]
#[case::nan(f64::NAN)]
#[case::infinite(f64::INFINITY)]
fn test_rejects_invalid_tour_cost(#[case] cost: f64) {
    let tours = vec![Tour::new(7, "R", "Broken", cost, 1)];

    let result = Catalog::from_parts(vec![region("R")], tours, vec![], &[]);

    assert!(matches!(
        result,
        Err(CatalogError::InvalidTourCost { tour_id: 7, .. })
    ));
}

#[test]
fn test_rejects_duplicate_identifiers() {
    let duplicate_tours = Catalog::from_parts(
        vec![],
        vec![Tour::new(1, "R", "a", 1.0, 1), Tour::new(1, "R", "b", 1.0, 1)],
        vec![],
        &[],
    );
    assert!(matches!(duplicate_tours, Err(CatalogError::DuplicateTour(1))));

    let duplicate_attractions = Catalog::from_parts(
        vec![],
        vec![],
        vec![attraction(4, "R", 1), attraction(4, "R", 2)],
        &[],
    );
    assert!(matches!(
        duplicate_attractions,
        Err(CatalogError::DuplicateAttraction(4))
    ));

    let duplicate_regions = Catalog::from_parts(vec![region("R"), region("R")], vec![], vec![], &[]);
    assert!(matches!(
        duplicate_regions,
        Err(CatalogError::DuplicateRegion(ref id)) if id == "R"
    ));
}

#[test]
fn test_rejects_overflowing_cultural_values() {
    let half = i64::MAX / 2 + 1;
    let tours = vec![Tour::new(1, "R", "T1", 1.0, 1), Tour::new(2, "R", "T2", 1.0, 1)];
    let attractions = vec![attraction(1, "R", half), attraction(2, "R", half)];

    let result = Catalog::from_parts(vec![region("R")], tours, attractions, &[link(1, 1), link(2, 2)]);

    assert!(matches!(
        result,
        Err(CatalogError::CulturalValueOverflow { attraction_id: 2 })
    ));
}

#[test]
fn test_rejects_minimum_cultural_value() {
    let attractions = vec![attraction(1, "R", i64::MIN)];

    let result = Catalog::from_parts(vec![region("R")], vec![], attractions, &[]);

    assert!(matches!(
        result,
        Err(CatalogError::CulturalValueOverflow { attraction_id: 1 })
    ));
}

#[test]
fn test_large_cultural_values_within_range_are_searched() {
    let value = i64::MAX / 4;
    let tours = vec![Tour::new(1, "R", "T1", 1.0, 1), Tour::new(2, "R", "T2", 1.0, 1)];
    let attractions = vec![attraction(1, "R", value), attraction(2, "R", value)];
    let catalog = Catalog::from_parts(vec![region("R")], tours, attractions, &[link(1, 1), link(2, 2)])
        .expect("values fit in range");

    let package = catalog.build_package("R", None, None);

    assert_eq!(package.tour_ids(), vec![1, 2]);
    assert_eq!(package.total_value, value * 2);
}

#[test]
fn test_zero_cost_tour_is_accepted() {
    let tours = vec![Tour::new(1, "R", "Free walk", 0.0, 0)];

    let catalog = Catalog::from_parts(vec![region("R")], tours, vec![], &[]);

    assert!(catalog.is_ok());
}
