//! # Tourpack
//!
//! A command-line tool and library that recommends a touristic package for a
//! region: the subset of pre-defined tours with the highest cumulative
//! cultural value that respects
//!
//! - an optional maximum trip duration (in days)
//! - an optional maximum budget
//! - the rule that no attraction is visited by more than one selected tour
//!
//! ## Modules
//!
//! - [`models`] - Regions, tours, attractions, packages and CSV rows
//! - [`error`] - Catalog loading errors
//! - [`data`] - CSV catalog loading
//! - [`catalog`] - Relation linking, region filtering and the package entry point
//! - [`optimizer`] - Exhaustive package search
//! - [`display`] - Output formatting and display utilities
//! - [`wasm`] - JSON bindings for JavaScript callers
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use tourpack::data::load_catalog;
//!
//! let catalog = load_catalog(Path::new("data")).unwrap();
//!
//! // Best package in Lombardy lasting at most 5 days and costing at most 600
//! let package = catalog.build_package("LOM", Some(5), Some(600.0));
//! for tour in &package.tours {
//!     println!("{} ({} days)", tour.name, tour.duration_days);
//! }
//! println!("cost {} value {}", package.total_cost, package.total_value);
//! ```
//!
//! ## Search
//!
//! The optimizer enumerates every attraction-disjoint subset of the region's
//! tours that fits the limits. Running time grows exponentially with the
//! number of tours in the region; pruning only removes combinations that
//! already break a limit or reuse an attraction.

pub mod catalog;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod wasm;
