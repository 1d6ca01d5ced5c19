//! Integration tests running the bundled store config and sample list

use shopper::{Config, RenderOptions, UnmatchedPolicy, plan_trip, read_shopping_list};
use std::path::PathBuf;
use tempfile::TempDir;

fn repo_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(name)
}

#[test]
fn test_default_config_loads() {
    let config = Config::load_from_file(repo_file("config/default.toml")).unwrap();
    let registry = config.registry().unwrap();

    assert_eq!(registry.len(), 15);
    assert_eq!(registry.get("mirelit").unwrap().order, 99);
    assert_eq!(config.report.unmatched, UnmatchedPolicy::Include);
}

#[test]
fn test_sample_list_route() {
    let config = Config::load_from_file(repo_file("config/default.toml")).unwrap();
    let registry = config.registry().unwrap();
    let entries = read_shopping_list(repo_file("shoppinglist.csv")).unwrap();

    let plan = plan_trip(
        entries.into_iter().map(|e| (e.item, e.category)),
        &registry,
    )
    .unwrap();

    let stops: Vec<&str> = plan
        .route
        .stops
        .iter()
        .map(|s| s.category.as_str())
        .collect();
    assert_eq!(
        stops,
        vec![
            "édesség",
            "ital",
            "tej",
            "felvágott",
            "pékáru",
            "zöldség-gyümölcs",
            "mirelit"
        ]
    );
    assert_eq!(plan.segments().len(), 6);
    assert_eq!(plan.categorized.unmatched.len(), 1);
    assert_eq!(plan.categorized.unmatched[0].items, vec!["elem"]);

    // tej zone is a quadrilateral: mean of its four corners
    let tej = &plan.route.stops[2];
    assert!((tej.centroid.x - 1883.25).abs() < 1e-9);
    assert!((tej.centroid.y - 2967.25).abs() < 1e-9);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["route"]["stops"].as_array().unwrap().len(), 7);
}

#[test]
fn test_render_default_store() {
    let config = Config::load_from_file(repo_file("config/default.toml")).unwrap();
    let registry = config.registry().unwrap();
    let plan = plan_trip(vec![("kóla", "ital"), ("tej", "tej")], &registry).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("route.svg");
    shopper::render_route_map(
        &plan,
        &registry,
        &config.map,
        &RenderOptions::default(),
        &path,
    )
    .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("dunakeszi_terkep.jpg"));
    assert_eq!(svg.matches("marker-end").count(), 1);
}
