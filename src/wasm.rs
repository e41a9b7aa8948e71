//! WebAssembly bindings for Tourpack.
//!
//! This module provides JavaScript-accessible functions for the package
//! optimizer. The catalog travels inline in the JSON input, so the bindings
//! need no file access.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::models::{Attraction, Package, Region, SearchStats, Tour, TourAttractionLink};

/// JavaScript-friendly tour record.
#[derive(Debug, Clone, Deserialize)]
pub struct JsTourInput {
    pub id: u32,
    pub region_id: String,
    pub name: String,
    pub cost: f64,
    pub duration_days: u32,
}

/// JavaScript-friendly catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct JsCatalogInput {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub tours: Vec<JsTourInput>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub links: Vec<TourAttractionLink>,
}

/// JavaScript-friendly input for package optimization.
#[derive(Debug, Clone, Deserialize)]
pub struct JsPackageInput {
    #[serde(flatten)]
    pub catalog: JsCatalogInput,
    pub region: String,
    #[serde(default)]
    pub max_days: Option<i64>,
    #[serde(default)]
    pub max_budget: Option<f64>,
}

/// JavaScript-friendly selected tour.
#[derive(Debug, Clone, Serialize)]
pub struct JsTour {
    pub id: u32,
    pub name: String,
    pub cost: f64,
    pub duration_days: u32,
    pub cultural_value: i64,
    pub attractions: Vec<String>,
}

/// JavaScript-friendly optimization result.
#[derive(Debug, Clone, Serialize, Default)]
pub struct JsPackageResult {
    pub success: bool,
    pub error: Option<String>,
    pub tours: Vec<JsTour>,
    pub total_cost: f64,
    pub total_value: i64,
    pub total_days: u64,
    pub nodes_explored: u64,
}

impl From<&Tour> for JsTour {
    fn from(tour: &Tour) -> Self {
        JsTour {
            id: tour.id,
            name: tour.name.clone(),
            cost: tour.cost,
            duration_days: tour.duration_days,
            cultural_value: tour.cultural_value(),
            attractions: tour.attractions().map(|a| a.name.clone()).collect(),
        }
    }
}

impl JsPackageResult {
    fn from_package(package: &Package<'_>, stats: &SearchStats) -> Self {
        JsPackageResult {
            success: true,
            error: None,
            tours: package.tours.iter().map(|t| JsTour::from(*t)).collect(),
            total_cost: package.total_cost,
            total_value: package.total_value,
            total_days: package.total_days(),
            nodes_explored: stats.nodes_explored,
        }
    }

    fn failure(message: String) -> Self {
        JsPackageResult {
            success: false,
            error: Some(message),
            ..Default::default()
        }
    }
}

fn build_catalog(input: JsCatalogInput) -> Result<Catalog, String> {
    let tours = input
        .tours
        .into_iter()
        .map(|t| Tour::new(t.id, t.region_id, t.name, t.cost, t.duration_days))
        .collect();
    Catalog::from_parts(input.regions, tours, input.attractions, &input.links)
        .map_err(|e| format!("Invalid catalog: {}", e))
}

/// Build the best package for the region named in the input.
///
/// Takes a JSON string input and returns a JSON string result.
#[wasm_bindgen]
pub fn build_package(input_json: &str) -> String {
    let result = match serde_json::from_str::<JsPackageInput>(input_json) {
        Ok(input) => match build_catalog(input.catalog) {
            Ok(catalog) => {
                let (package, stats) =
                    catalog.build_package_with_stats(&input.region, input.max_days, input.max_budget);
                JsPackageResult::from_package(&package, &stats)
            }
            Err(message) => JsPackageResult::failure(message),
        },
        Err(e) => JsPackageResult::failure(format!("Invalid input: {}", e)),
    };

    serde_json::to_string(&result).unwrap_or_default()
}

/// Get the list of regions of an inline catalog.
/// Returns a JSON array, empty if the input cannot be parsed.
#[wasm_bindgen]
pub fn list_regions(input_json: &str) -> String {
    let regions = serde_json::from_str::<JsCatalogInput>(input_json)
        .map_err(|e| e.to_string())
        .and_then(build_catalog)
        .map(|catalog| catalog.list_regions().to_vec())
        .unwrap_or_default();

    serde_json::to_string(&regions).unwrap_or_default()
}

/// Get the version of the optimizer.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
