//! Tests for the JSON bindings.

use serde_json::{json, Value};
use tourpack::wasm::{build_package, get_version, list_regions};

fn catalog_json() -> Value {
    json!({
        "regions": [
            { "id": "R", "name": "Region R" },
            { "id": "S", "name": "Region S" }
        ],
        "tours": [
            { "id": 1, "region_id": "R", "name": "T1", "cost": 10.0, "duration_days": 2 },
            { "id": 2, "region_id": "R", "name": "T2", "cost": 8.0, "duration_days": 1 },
            { "id": 3, "region_id": "R", "name": "T3", "cost": 6.0, "duration_days": 2 }
        ],
        "attractions": [
            { "id": 1, "region_id": "R", "name": "A1", "cultural_value": 5 },
            { "id": 2, "region_id": "R", "name": "A2", "cultural_value": 6 },
            { "id": 3, "region_id": "R", "name": "A3", "cultural_value": 2 }
        ],
        "links": [
            { "tour_id": 1, "attraction_id": 1 },
            { "tour_id": 2, "attraction_id": 2 },
            { "tour_id": 3, "attraction_id": 1 },
            { "tour_id": 3, "attraction_id": 3 }
        ]
    })
}

fn call(input: &Value) -> Value {
    serde_json::from_str(&build_package(&input.to_string())).expect("result is valid JSON")
}

#[test]
fn test_build_package_with_limits() {
    let mut input = catalog_json();
    input["region"] = json!("R");
    input["max_days"] = json!(3);
    input["max_budget"] = json!(20.0);

    let result = call(&input);

    assert_eq!(result["success"], json!(true));
    assert_eq!(result["total_value"], json!(13));
    assert_eq!(result["total_cost"], json!(14.0));
    assert_eq!(result["total_days"], json!(3));
    let names: Vec<&str> = result["tours"]
        .as_array()
        .expect("tours array")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(names, vec!["T2", "T3"]);
    assert_eq!(result["tours"][1]["attractions"], json!(["A1", "A3"]));
}

#[test]
fn test_build_package_limits_are_optional() {
    let mut input = catalog_json();
    input["region"] = json!("S");

    let result = call(&input);

    assert_eq!(result["success"], json!(true));
    assert_eq!(result["tours"], json!([]));
    assert_eq!(result["total_value"], json!(0));
}

#[test]
fn test_build_package_rejects_invalid_json() {
    let result: Value = serde_json::from_str(&build_package("{ not json")).expect("valid JSON");

    assert_eq!(result["success"], json!(false));
    assert!(result["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Invalid input")));
}

#[test]
fn test_build_package_rejects_invalid_catalog() {
    let mut input = catalog_json();
    input["region"] = json!("R");
    input["tours"][0]["cost"] = json!(-3.0);

    let result = call(&input);

    assert_eq!(result["success"], json!(false));
    assert!(result["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Invalid catalog")));
}

#[test]
fn test_list_regions() {
    let regions: Value =
        serde_json::from_str(&list_regions(&catalog_json().to_string())).expect("valid JSON");

    assert_eq!(regions[0]["id"], json!("R"));
    assert_eq!(regions[1]["name"], json!("Region S"));
    assert_eq!(list_regions("not json"), "[]");
}

#[test]
fn test_get_version() {
    assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
}
