//! Data loading functionality for Tourpack.
//!
//! This module reads a catalog from CSV files located in a data directory.
//! Each entity type has its own file:
//!
//! - `regions.csv`: `id, name`
//! - `tours.csv`: `id, region_id, name, cost, duration_days`
//! - `attractions.csv`: `id, region_id, name, cultural_value`
//! - `tour_attractions.csv`: `tour_id, attraction_id`
//!
//! Row order in each file is the catalog insertion order.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use crate::catalog::{Catalog, CatalogSource};
use crate::error::CatalogError;
use crate::models::{
    Attraction, AttractionRow, LinkRow, Region, RegionRow, Tour, TourAttractionLink, TourRow,
};

/// File name of the region sheet.
pub const REGIONS_FILE: &str = "regions.csv";
/// File name of the tour sheet.
pub const TOURS_FILE: &str = "tours.csv";
/// File name of the attraction sheet.
pub const ATTRACTIONS_FILE: &str = "attractions.csv";
/// File name of the tour/attraction relation sheet.
pub const LINKS_FILE: &str = "tour_attractions.csv";

/// Deserializes every row of a CSV file into `T`.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    rdr.deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| CatalogError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// A catalog stored as a directory of CSV files.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    data_dir: PathBuf,
}

impl CsvCatalog {
    /// Creates a loader reading from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory the sheets are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl CatalogSource for CsvCatalog {
    fn get_regions(&self) -> Result<Vec<Region>, CatalogError> {
        let rows: Vec<RegionRow> = read_rows(&self.data_dir.join(REGIONS_FILE))?;
        Ok(rows
            .into_iter()
            .map(|row| Region {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    fn get_tours(&self) -> Result<Vec<Tour>, CatalogError> {
        let rows: Vec<TourRow> = read_rows(&self.data_dir.join(TOURS_FILE))?;
        Ok(rows
            .into_iter()
            .map(|row| Tour::new(row.id, row.region_id, row.name, row.cost, row.duration_days))
            .collect())
    }

    fn get_attractions(&self) -> Result<Vec<Attraction>, CatalogError> {
        let rows: Vec<AttractionRow> = read_rows(&self.data_dir.join(ATTRACTIONS_FILE))?;
        Ok(rows
            .into_iter()
            .map(|row| Attraction {
                id: row.id,
                name: row.name,
                cultural_value: row.cultural_value,
                region_id: row.region_id,
            })
            .collect())
    }

    fn get_tour_attraction_links(&self) -> Result<Vec<TourAttractionLink>, CatalogError> {
        let rows: Vec<LinkRow> = read_rows(&self.data_dir.join(LINKS_FILE))?;
        Ok(rows
            .into_iter()
            .map(|row| TourAttractionLink {
                tour_id: row.tour_id,
                attraction_id: row.attraction_id,
            })
            .collect())
    }
}

/// Loads and links the whole catalog from the data directory.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use tourpack::data::load_catalog;
///
/// let catalog = load_catalog(Path::new("data")).unwrap();
/// println!("Loaded {} tours", catalog.tours().len());
/// ```
pub fn load_catalog(data_dir: &Path) -> Result<Catalog, CatalogError> {
    Catalog::load(&CsvCatalog::new(data_dir))
}
