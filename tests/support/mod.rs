//! Catalog builders shared by the integration tests.
#![allow(dead_code)]

use tourpack::catalog::Catalog;
use tourpack::models::{Attraction, Region, Tour, TourAttractionLink};

pub fn region(id: &str) -> Region {
    Region {
        id: id.to_string(),
        name: format!("Region {}", id),
    }
}

pub fn attraction(id: u32, region_id: &str, cultural_value: i64) -> Attraction {
    Attraction {
        id,
        name: format!("A{}", id),
        cultural_value,
        region_id: region_id.to_string(),
    }
}

pub fn link(tour_id: u32, attraction_id: u32) -> TourAttractionLink {
    TourAttractionLink {
        tour_id,
        attraction_id,
    }
}

/// The three-tour example of region `R`:
///
/// - `T1`: cost 10, 2 days, `{A1(5)}`
/// - `T2`: cost 8, 1 day, `{A2(6)}`
/// - `T3`: cost 6, 2 days, `{A1(5), A3(2)}`
pub fn three_tour_catalog() -> Catalog {
    let tours = vec![
        Tour::new(1, "R", "T1", 10.0, 2),
        Tour::new(2, "R", "T2", 8.0, 1),
        Tour::new(3, "R", "T3", 6.0, 2),
    ];
    let attractions = vec![
        attraction(1, "R", 5),
        attraction(2, "R", 6),
        attraction(3, "R", 2),
    ];
    let links = vec![link(1, 1), link(2, 2), link(3, 1), link(3, 3)];

    match Catalog::from_parts(vec![region("R"), region("EMPTY")], tours, attractions, &links) {
        Ok(catalog) => catalog,
        Err(err) => panic!("build test catalog: {err}"),
    }
}
