//! Data models and structures for Tourpack.
//!
//! This module contains the catalog entities (regions, attractions, tours),
//! the package returned by the optimizer, and the CSV row structures used
//! when loading a catalog from disk.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifier of a tour.
pub type TourId = u32;

/// Identifier of an attraction.
pub type AttractionId = u32;

/// A geographic grouping of tours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region code (e.g., "LOM")
    pub id: String,
    /// Display name (e.g., "Lombardia")
    pub name: String,
}

/// A sightseeing item with a cultural value.
///
/// Attractions are shared between tours; the catalog keeps one instance per
/// identifier and tours hold reference-counted handles to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    /// Unique attraction identifier
    pub id: AttractionId,
    /// Display name
    pub name: String,
    /// Cultural value contributed when the attraction is visited
    pub cultural_value: i64,
    /// Region the attraction belongs to
    pub region_id: String,
}

/// A purchasable multi-day itinerary.
///
/// The attraction set is empty until the catalog links relations, and is
/// never modified afterwards.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tourpack::models::{Attraction, Tour};
///
/// let mut tour = Tour::new(1, "LOM", "Lakes and villas", 250.0, 3);
/// tour.add_attraction(Arc::new(Attraction {
///     id: 7,
///     name: "Villa Carlotta".to_string(),
///     cultural_value: 8,
///     region_id: "LOM".to_string(),
/// }));
///
/// assert_eq!(tour.cultural_value(), 8);
/// assert!(tour.visits(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Unique tour identifier
    pub id: TourId,
    /// Region the tour belongs to
    pub region_id: String,
    /// Display name
    pub name: String,
    /// Price of the tour
    pub cost: f64,
    /// Length of the tour in whole days
    pub duration_days: u32,
    attractions: BTreeMap<AttractionId, Arc<Attraction>>,
}

impl Tour {
    /// Creates a tour with no attractions attached.
    pub fn new(
        id: TourId,
        region_id: impl Into<String>,
        name: impl Into<String>,
        cost: f64,
        duration_days: u32,
    ) -> Self {
        Self {
            id,
            region_id: region_id.into(),
            name: name.into(),
            cost,
            duration_days,
            attractions: BTreeMap::new(),
        }
    }

    /// Associates an attraction with this tour.
    ///
    /// Returns `false` if the attraction was already associated.
    pub fn add_attraction(&mut self, attraction: Arc<Attraction>) -> bool {
        self.attractions.insert(attraction.id, attraction).is_none()
    }

    /// Iterates over the attractions visited by this tour, ordered by id.
    pub fn attractions(&self) -> impl Iterator<Item = &Attraction> + '_ {
        self.attractions.values().map(|a| a.as_ref())
    }

    /// Iterates over the identifiers of the attractions visited by this tour.
    pub fn attraction_ids(&self) -> impl Iterator<Item = AttractionId> + '_ {
        self.attractions.keys().copied()
    }

    /// Returns `true` if the tour visits the given attraction.
    pub fn visits(&self, attraction_id: AttractionId) -> bool {
        self.attractions.contains_key(&attraction_id)
    }

    /// Sum of the cultural values of all attractions visited by this tour.
    pub fn cultural_value(&self) -> i64 {
        self.attractions.values().map(|a| a.cultural_value).sum()
    }
}

/// A raw `(tour_id, attraction_id)` association record from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourAttractionLink {
    /// Tour side of the association
    pub tour_id: TourId,
    /// Attraction side of the association
    pub attraction_id: AttractionId,
}

/// Optional resource limits for a package search.
///
/// `None` means unbounded. Negative limits are accepted and make every
/// non-empty combination infeasible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackageConstraints {
    /// Maximum total duration in days
    pub max_days: Option<i64>,
    /// Maximum total cost
    pub max_budget: Option<f64>,
}

impl PackageConstraints {
    /// Constraints with neither a duration nor a budget limit.
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// The best feasible combination of tours found for a region.
///
/// The tour list is an independent vector of shared references into the
/// catalog; it is never aliased with the optimizer's working buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Package<'a> {
    /// Selected tours, in candidate order
    pub tours: Vec<&'a Tour>,
    /// Sum of the costs of the selected tours
    pub total_cost: f64,
    /// Sum of the cultural values of all attractions of the selected tours
    pub total_value: i64,
}

impl<'a> Package<'a> {
    /// The empty package: no tours, zero cost, zero value.
    pub fn empty() -> Self {
        Self {
            tours: Vec::new(),
            total_cost: 0.0,
            total_value: 0,
        }
    }

    /// Returns `true` if no tour was selected.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Total duration of the selected tours in days.
    pub fn total_days(&self) -> u64 {
        self.tours.iter().map(|t| u64::from(t.duration_days)).sum()
    }

    /// Identifiers of every attraction visited by the package.
    pub fn attraction_ids(&self) -> Vec<AttractionId> {
        self.tours.iter().flat_map(|t| t.attraction_ids()).collect()
    }

    /// Identifiers of the selected tours, in order.
    pub fn tour_ids(&self) -> Vec<TourId> {
        self.tours.iter().map(|t| t.id).collect()
    }
}

impl Default for Package<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Counters collected while exploring the include/exclude decision tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Decision points visited, terminal points included
    pub nodes_explored: u64,
    /// Include branches rejected because an attraction was already used
    pub prunings_attraction: u64,
    /// Include branches rejected because the duration limit was exceeded
    pub prunings_duration: u64,
    /// Include branches rejected because the budget was exceeded
    pub prunings_budget: u64,
    /// Times the best package was replaced by a strictly better one
    pub improvements: u64,
}

impl SearchStats {
    /// Total number of include branches that were pruned.
    pub fn prunings(&self) -> u64 {
        self.prunings_attraction + self.prunings_duration + self.prunings_budget
    }
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for `regions.csv`.
#[derive(Debug, Deserialize)]
pub struct RegionRow {
    /// Region code
    pub id: String,
    /// Display name
    pub name: String,
}

/// CSV row structure for `tours.csv`.
#[derive(Debug, Deserialize)]
pub struct TourRow {
    /// Tour identifier
    pub id: TourId,
    /// Owning region code
    pub region_id: String,
    /// Display name
    pub name: String,
    /// Price of the tour
    pub cost: f64,
    /// Length in whole days
    pub duration_days: u32,
}

/// CSV row structure for `attractions.csv`.
#[derive(Debug, Deserialize)]
pub struct AttractionRow {
    /// Attraction identifier
    pub id: AttractionId,
    /// Owning region code
    pub region_id: String,
    /// Display name
    pub name: String,
    /// Cultural value
    pub cultural_value: i64,
}

/// CSV row structure for `tour_attractions.csv`.
#[derive(Debug, Deserialize)]
pub struct LinkRow {
    /// Tour identifier
    pub tour_id: TourId,
    /// Attraction identifier
    pub attraction_id: AttractionId,
}
