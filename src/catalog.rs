//! In-memory catalog of regions, tours and attractions.
//!
//! The catalog is built once from a [`CatalogSource`]: entities are
//! validated, tour/attraction relations are linked, and a reverse index from
//! attractions to tours is derived from the tours' own attraction sets. After
//! construction the catalog is read-only and every query borrows from it.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use log::{debug, warn};

use crate::error::CatalogError;
use crate::models::{
    Attraction, AttractionId, Package, PackageConstraints, Region, SearchStats, Tour,
    TourAttractionLink, TourId,
};
use crate::optimizer::optimize_with_stats;

/// Supplier of raw catalog records.
///
/// Tours are returned with empty attraction sets; the relations come
/// separately as link records. Sequences are in insertion order.
pub trait CatalogSource {
    /// All regions known to the catalog.
    fn get_regions(&self) -> Result<Vec<Region>, CatalogError>;
    /// All tours, unlinked.
    fn get_tours(&self) -> Result<Vec<Tour>, CatalogError>;
    /// All attractions.
    fn get_attractions(&self) -> Result<Vec<Attraction>, CatalogError>;
    /// All `(tour_id, attraction_id)` association records.
    fn get_tour_attraction_links(&self) -> Result<Vec<TourAttractionLink>, CatalogError>;
}

/// Counts produced by [`link_relations`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Records that were attached to a tour
    pub linked: usize,
    /// Records naming a tour or attraction that does not exist
    pub skipped: usize,
}

/// Attaches attractions to tours according to the link records.
///
/// Records whose tour or attraction identifier does not resolve are skipped
/// and counted. A record repeated for the same pair is idempotent.
pub fn link_relations(
    tours: &mut [Tour],
    attractions: &HashMap<AttractionId, Arc<Attraction>>,
    links: &[TourAttractionLink],
) -> LinkReport {
    let positions: HashMap<TourId, usize> = tours
        .iter()
        .enumerate()
        .map(|(pos, tour)| (tour.id, pos))
        .collect();

    let mut report = LinkReport::default();
    for link in links {
        let tour = positions
            .get(&link.tour_id)
            .and_then(|&pos| tours.get_mut(pos));
        let attraction = attractions.get(&link.attraction_id);

        match (tour, attraction) {
            (Some(tour), Some(attraction)) => {
                if tour.region_id != attraction.region_id {
                    debug!(
                        "tour {} ({}) links attraction {} from region {}",
                        tour.id, tour.region_id, attraction.id, attraction.region_id
                    );
                }
                tour.add_attraction(Arc::clone(attraction));
                report.linked += 1;
            }
            _ => {
                warn!(
                    "skipping link record: tour {} -> attraction {} does not resolve",
                    link.tour_id, link.attraction_id
                );
                report.skipped += 1;
            }
        }
    }
    report
}

/// Derives the attraction -> tours back-references from the tours' sets.
pub fn build_attraction_index(tours: &[Tour]) -> HashMap<AttractionId, BTreeSet<TourId>> {
    let mut index: HashMap<AttractionId, BTreeSet<TourId>> = HashMap::new();
    for tour in tours {
        for attraction_id in tour.attraction_ids() {
            index.entry(attraction_id).or_default().insert(tour.id);
        }
    }
    index
}

/// Linked, validated catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: Vec<Region>,
    tours: Vec<Tour>,
    tour_positions: HashMap<TourId, usize>,
    attractions: HashMap<AttractionId, Arc<Attraction>>,
    tours_by_attraction: HashMap<AttractionId, BTreeSet<TourId>>,
    link_report: LinkReport,
}

impl Catalog {
    /// Loads, validates and links every record supplied by `source`.
    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self, CatalogError> {
        Self::from_parts(
            source.get_regions()?,
            source.get_tours()?,
            source.get_attractions()?,
            &source.get_tour_attraction_links()?,
        )
    }

    /// Builds a catalog from already materialized records.
    ///
    /// # Errors
    ///
    /// Fails on duplicate identifiers, on tours whose cost is negative or
    /// not finite, and on cultural values whose magnitudes sum past `i64`. Unresolvable link records are skipped, not reported as
    /// errors.
    pub fn from_parts(
        regions: Vec<Region>,
        mut tours: Vec<Tour>,
        attractions: Vec<Attraction>,
        links: &[TourAttractionLink],
    ) -> Result<Self, CatalogError> {
        let mut region_ids = HashSet::new();
        for region in &regions {
            if !region_ids.insert(region.id.clone()) {
                return Err(CatalogError::DuplicateRegion(region.id.clone()));
            }
        }

        let mut tour_positions = HashMap::with_capacity(tours.len());
        for (pos, tour) in tours.iter().enumerate() {
            if !tour.cost.is_finite() || tour.cost < 0.0 {
                return Err(CatalogError::InvalidTourCost {
                    tour_id: tour.id,
                    cost: tour.cost,
                });
            }
            if tour_positions.insert(tour.id, pos).is_some() {
                return Err(CatalogError::DuplicateTour(tour.id));
            }
        }

        // Any package sums distinct attractions, so bounding the sum of
        // magnitudes keeps every running value in range.
        let mut value_bound: i64 = 0;
        let mut attraction_map = HashMap::with_capacity(attractions.len());
        for attraction in attractions {
            let id = attraction.id;
            value_bound = attraction
                .cultural_value
                .checked_abs()
                .and_then(|v| value_bound.checked_add(v))
                .ok_or(CatalogError::CulturalValueOverflow { attraction_id: id })?;
            if attraction_map.insert(id, Arc::new(attraction)).is_some() {
                return Err(CatalogError::DuplicateAttraction(id));
            }
        }

        let link_report = link_relations(&mut tours, &attraction_map, links);
        let tours_by_attraction = build_attraction_index(&tours);

        debug!(
            "catalog loaded: {} regions, {} tours, {} attractions, {} links ({} skipped)",
            regions.len(),
            tours.len(),
            attraction_map.len(),
            link_report.linked,
            link_report.skipped
        );

        Ok(Self {
            regions,
            tours,
            tour_positions,
            attractions: attraction_map,
            tours_by_attraction,
            link_report,
        })
    }

    /// All regions, in catalog order.
    pub fn list_regions(&self) -> &[Region] {
        &self.regions
    }

    /// Looks up a region by code.
    pub fn region(&self, region_id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == region_id)
    }

    /// All tours, in catalog order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Looks up a tour by identifier.
    pub fn tour(&self, tour_id: TourId) -> Option<&Tour> {
        self.tour_positions
            .get(&tour_id)
            .and_then(|&pos| self.tours.get(pos))
    }

    /// Looks up an attraction by identifier.
    pub fn attraction(&self, attraction_id: AttractionId) -> Option<&Attraction> {
        self.attractions.get(&attraction_id).map(|a| a.as_ref())
    }

    /// Number of attractions in the catalog.
    pub fn attraction_count(&self) -> usize {
        self.attractions.len()
    }

    /// Outcome of linking the relation records.
    pub fn link_report(&self) -> LinkReport {
        self.link_report
    }

    /// Tours belonging to `region_id`, in catalog order.
    ///
    /// An unknown region yields an empty list.
    pub fn tours_for_region(&self, region_id: &str) -> Vec<&Tour> {
        self.tours
            .iter()
            .filter(|t| t.region_id == region_id)
            .collect()
    }

    /// Tours visiting `attraction_id`, ordered by tour id.
    pub fn tours_for_attraction(&self, attraction_id: AttractionId) -> Vec<&Tour> {
        self.tours_by_attraction
            .get(&attraction_id)
            .map(|ids| ids.iter().filter_map(|&id| self.tour(id)).collect())
            .unwrap_or_default()
    }

    /// Computes the best package for a region.
    ///
    /// `None` limits are unbounded. See [`crate::optimizer::optimize`].
    pub fn build_package(
        &self,
        region_id: &str,
        max_days: Option<i64>,
        max_budget: Option<f64>,
    ) -> Package<'_> {
        self.build_package_with_stats(region_id, max_days, max_budget)
            .0
    }

    /// Same as [`Catalog::build_package`], also returning search counters.
    pub fn build_package_with_stats(
        &self,
        region_id: &str,
        max_days: Option<i64>,
        max_budget: Option<f64>,
    ) -> (Package<'_>, SearchStats) {
        let candidates = self.tours_for_region(region_id);
        let constraints = PackageConstraints {
            max_days,
            max_budget,
        };
        debug!(
            "building package for region {region_id}: {} candidates, {constraints:?}",
            candidates.len()
        );
        optimize_with_stats(&candidates, &constraints)
    }
}
