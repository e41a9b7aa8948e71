//! Display and formatting utilities for Tourpack.
//!
//! This module provides functions for formatting output and displaying
//! regions and recommended packages in a readable format.

use crate::models::{Package, Region, SearchStats};

/// Formats a monetary amount with two decimals.
///
/// # Example
///
/// ```
/// use tourpack::display::format_cost;
///
/// assert_eq!(format_cost(14.0), "14.00");
/// assert_eq!(format_cost(1250.5), "1250.50");
/// ```
pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}

/// Formats a number of days.
///
/// # Example
///
/// ```
/// use tourpack::display::format_days;
///
/// assert_eq!(format_days(1), "1 day");
/// assert_eq!(format_days(3), "3 days");
/// ```
pub fn format_days(days: u64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Formats an optional limit, using `unbounded` for `None`.
pub fn format_limit<T: std::fmt::Display>(limit: Option<T>) -> String {
    limit
        .map(|l| l.to_string())
        .unwrap_or_else(|| "unbounded".to_string())
}

/// Displays the list of regions to stdout.
pub fn display_regions(regions: &[Region]) {
    println!();
    println!("[REGIONS]");
    println!("----------------------------------------------------------------");
    if regions.is_empty() {
        println!("  No regions available.");
        return;
    }
    for region in regions {
        println!("  {:<8} {}", region.id, region.name);
    }
}

/// Displays a recommended package to stdout.
///
/// This function prints:
/// - One row per selected tour with its duration, cost and value
/// - The attractions each tour visits
/// - Summary totals and search counters
///
/// # Arguments
///
/// * `region` - The region the package was built for
/// * `package` - The package to display
/// * `stats` - Counters collected by the search
pub fn display_package(region: &Region, package: &Package<'_>, stats: &SearchStats) {
    println!();
    println!("+================================================================+");
    println!("|              RECOMMENDED TOURISTIC PACKAGE                     |");
    println!("+================================================================+");
    println!();
    println!("  Region: {} ({})", region.name, region.id);
    println!();

    if package.is_empty() {
        println!("[WARNING] No tour fits the requested limits.");
    } else {
        println!("[SELECTED TOURS]");
        println!("----------------------------------------------------------------");
        println!(
            "{:<28} {:>10} {:>12} {:>10}",
            "Tour", "Duration", "Cost", "Value"
        );
        println!("----------------------------------------------------------------");

        for tour in &package.tours {
            println!(
                "{:<28} {:>10} {:>12} {:>10}",
                tour.name,
                format_days(u64::from(tour.duration_days)),
                format_cost(tour.cost),
                tour.cultural_value()
            );
            for attraction in tour.attractions() {
                println!("    → {} (value {})", attraction.name, attraction.cultural_value);
            }
        }
    }

    println!();
    println!("[SUMMARY]");
    println!("----------------------------------------------------------------");
    println!("  Tours:            {}", package.tours.len());
    println!("  Total Duration:   {}", format_days(package.total_days()));
    println!("  Total Cost:       {}", format_cost(package.total_cost));
    println!("  Cultural Value:   {}", package.total_value);
    println!(
        "  Search:           {} nodes, {} pruned branches",
        stats.nodes_explored,
        stats.prunings()
    );
    println!();
}
