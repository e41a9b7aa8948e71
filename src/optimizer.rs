//! Package optimization for Tourpack.
//!
//! This module contains the exhaustive search that picks, among the tours of
//! a region, the attraction-disjoint combination with the highest cultural
//! value that fits the optional duration and budget limits.
//!
//! The search walks a binary include/exclude decision tree over the
//! candidates in order. The exclude branch is always explored first; the
//! include branch is only entered when the tour is feasible, so infeasible
//! subtrees are never descended into. State is shared across the whole walk
//! and restored on the way back up.

use std::collections::HashSet;

use log::{debug, trace};

use crate::models::{AttractionId, Package, PackageConstraints, SearchStats, Tour};

/// Reason a tour cannot join the current partial combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infeasibility {
    /// One of the tour's attractions is already visited by a chosen tour
    AttractionReused(AttractionId),
    /// The running duration would strictly exceed `max_days`
    DurationExceeded,
    /// The running cost would strictly exceed `max_budget`
    BudgetExceeded,
}

/// Checks whether `tour` can be added to a partial combination.
///
/// A combination that lands exactly on a limit is feasible. A NaN budget
/// admits nothing. On success the new running duration and cost are returned.
///
/// # Arguments
///
/// * `tour` - The tour to add
/// * `used` - Attractions visited by the tours already chosen
/// * `days` - Running duration of the partial combination
/// * `cost` - Running cost of the partial combination
/// * `constraints` - Duration and budget limits
pub fn check_inclusion(
    tour: &Tour,
    used: &HashSet<AttractionId>,
    days: i64,
    cost: f64,
    constraints: &PackageConstraints,
) -> Result<(i64, f64), Infeasibility> {
    if let Some(reused) = tour.attraction_ids().find(|id| used.contains(id)) {
        return Err(Infeasibility::AttractionReused(reused));
    }

    let new_days = days + i64::from(tour.duration_days);
    if constraints.max_days.is_some_and(|max| new_days > max) {
        return Err(Infeasibility::DurationExceeded);
    }

    let new_cost = cost + tour.cost;
    if constraints
        .max_budget
        .is_some_and(|max| max.is_nan() || new_cost > max)
    {
        return Err(Infeasibility::BudgetExceeded);
    }

    Ok((new_days, new_cost))
}

/// Mutable state of one search invocation.
struct Search<'c, 'a> {
    candidates: &'c [&'a Tour],
    values: Vec<i64>,
    constraints: PackageConstraints,
    used: HashSet<AttractionId>,
    partial: Vec<&'a Tour>,
    best: Package<'a>,
    stats: SearchStats,
}

impl<'c, 'a> Search<'c, 'a> {
    fn new(candidates: &'c [&'a Tour], constraints: &PackageConstraints) -> Self {
        Self {
            candidates,
            values: candidates.iter().map(|t| t.cultural_value()).collect(),
            constraints: *constraints,
            used: HashSet::new(),
            partial: Vec::with_capacity(candidates.len()),
            best: Package::empty(),
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self, index: usize, days: i64, cost: f64, value: i64) {
        self.stats.nodes_explored += 1;

        let (Some(&tour), Some(&tour_value)) =
            (self.candidates.get(index), self.values.get(index))
        else {
            self.record(cost, value);
            return;
        };

        // Skip the tour first.
        self.run(index + 1, days, cost, value);

        match check_inclusion(tour, &self.used, days, cost, &self.constraints) {
            Ok((new_days, new_cost)) => {
                self.used.extend(tour.attraction_ids());
                self.partial.push(tour);

                self.run(index + 1, new_days, new_cost, value + tour_value);

                self.partial.pop();
                for id in tour.attraction_ids() {
                    self.used.remove(&id);
                }
            }
            Err(Infeasibility::AttractionReused(_)) => self.stats.prunings_attraction += 1,
            Err(Infeasibility::DurationExceeded) => self.stats.prunings_duration += 1,
            Err(Infeasibility::BudgetExceeded) => self.stats.prunings_budget += 1,
        }
    }

    fn record(&mut self, cost: f64, value: i64) {
        if value > self.best.total_value {
            self.best = Package {
                tours: self.partial.clone(),
                total_cost: cost,
                total_value: value,
            };
            self.stats.improvements += 1;
        }
    }
}

/// Finds the most valuable feasible package among `candidates`.
///
/// The returned package holds distinct tours with pairwise-disjoint
/// attraction sets, respects both limits, and has the maximum total cultural
/// value over all such combinations. Among equally valuable combinations the
/// first one reached by the search is kept. If nothing beats the empty
/// combination, the empty package is returned.
///
/// Running time is exponential in the number of candidates.
///
/// # Example
///
/// ```
/// use tourpack::models::{PackageConstraints, Tour};
/// use tourpack::optimizer::optimize;
///
/// let tours = vec![Tour::new(1, "R", "Walk", 10.0, 1)];
/// let candidates: Vec<&Tour> = tours.iter().collect();
///
/// // A tour without attractions adds no value.
/// let package = optimize(&candidates, &PackageConstraints::unbounded());
/// assert!(package.is_empty());
/// assert_eq!(package.total_value, 0);
/// ```
pub fn optimize<'a>(candidates: &[&'a Tour], constraints: &PackageConstraints) -> Package<'a> {
    optimize_with_stats(candidates, constraints).0
}

/// Same as [`optimize`], also returning the search counters.
pub fn optimize_with_stats<'a>(
    candidates: &[&'a Tour],
    constraints: &PackageConstraints,
) -> (Package<'a>, SearchStats) {
    for tour in candidates {
        trace!(
            "candidate tour {}: cost {}, {} days, value {}",
            tour.name,
            tour.cost,
            tour.duration_days,
            tour.cultural_value()
        );
    }

    let mut search = Search::new(candidates, constraints);
    search.run(0, 0, 0.0, 0);

    debug!(
        "search over {} candidates: {} nodes, {} prunings, best value {} with {} tours",
        candidates.len(),
        search.stats.nodes_explored,
        search.stats.prunings(),
        search.best.total_value,
        search.best.tours.len()
    );

    (search.best, search.stats)
}
