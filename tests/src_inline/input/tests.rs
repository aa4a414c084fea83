use super::*;
use std::fs;

use crate::fixtures::{installation, make_temp_dir, sample_dataset};
use crate::model::{CategoryFilter, EnergyCategory};

#[test]
fn test_dataset_selector_options() {
    let dataset = sample_dataset();
    assert_eq!(dataset.len(), 9);
    assert_eq!(dataset.cantons(), vec!["Bern", "Valais", "Zurich"]);
    assert_eq!(
        dataset.canton_options(),
        vec!["All", "Bern", "Valais", "Zurich"]
    );
    assert_eq!(
        dataset.category_options(),
        vec!["All", "Bioenergy", "Hydro", "Solar", "Wind"]
    );
}

#[test]
fn test_category_filters_follow_present_categories() {
    let dataset = Dataset::new(
        vec![
            installation("Uri", EnergyCategory::Wind, 1.0, 10.0),
            installation("Uri", EnergyCategory::Hydro, 1.0, 10.0),
        ],
        BoundarySet::default(),
    );
    assert_eq!(
        dataset.category_filters(),
        vec![
            CategoryFilter::All,
            CategoryFilter::Only(EnergyCategory::Hydro),
            CategoryFilter::Only(EnergyCategory::Wind),
        ]
    );
    assert_eq!(dataset.category_options(), vec!["All", "Hydro", "Wind"]);
}

#[test]
fn test_dataset_load_from_files() {
    let dir = make_temp_dir("dataset");
    let csv_path = dir.join("energy.csv");
    let geo_path = dir.join("cantons.geojson");
    fs::write(
        &csv_path,
        "canton_name,energy_source_level_2,electrical_capacity,production,commissioning_date,lat,lon\n\
         Uri,Hydro,3,100,2001-02-03,46.7,8.6\n\
         Uri,Solar,0.1,90,,46.8,8.6\n",
    )
    .unwrap();
    fs::write(
        &geo_path,
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"kan_name":"Uri"},"geometry":{"type":"Polygon","coordinates":[[[8.4,46.5],[8.9,46.5],[8.9,46.9]]]}}]}"#,
    )
    .unwrap();

    let dataset = Dataset::load(&csv_path, &geo_path).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.boundaries().len(), 1);
    assert_eq!(dataset.cantons(), vec!["Uri"]);
}

#[test]
fn test_dataset_load_rejects_empty_table() {
    let dir = make_temp_dir("dataset_empty");
    let csv_path = dir.join("energy.csv");
    fs::write(&csv_path, "canton_name,energy_source_level_2\n").unwrap();
    let err = Dataset::load(&csv_path, &dir.join("unused.geojson")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}
