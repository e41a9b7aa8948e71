//! Error types raised while loading a catalog.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{AttractionId, TourId};

/// Errors raised while reading or validating catalog data.
///
/// Inconsistent link records are not errors; the linker skips them.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Opening a catalog file failed.
    #[error("failed to open catalog file {path}")]
    Io {
        /// File that could not be opened.
        path: PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A catalog file contained a malformed row.
    #[error("failed to parse catalog file {path}")]
    Csv {
        /// File containing the malformed row.
        path: PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Two regions share an identifier.
    #[error("region {0} is defined more than once")]
    DuplicateRegion(String),
    /// Two tours share an identifier.
    #[error("tour {0} is defined more than once")]
    DuplicateTour(TourId),
    /// Two attractions share an identifier.
    #[error("attraction {0} is defined more than once")]
    DuplicateAttraction(AttractionId),
    /// Cultural values are too large to be summed without overflow.
    #[error("cultural values overflow at attraction {attraction_id}")]
    CulturalValueOverflow {
        /// Attraction whose value pushed the total out of range.
        attraction_id: AttractionId,
    },
    /// A tour cost is negative or not a finite number.
    #[error("tour {tour_id} has invalid cost {cost}")]
    InvalidTourCost {
        /// Affected tour.
        tour_id: TourId,
        /// Rejected cost.
        cost: f64,
    },
}
