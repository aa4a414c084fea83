use super::*;
use crate::fixtures::sample_records;
use crate::model::{CantonFilter, EnergyCategory};

#[test]
fn test_all_all_returns_full_table() {
    let records = sample_records();
    let view = filter(&records, &Selection::all());
    assert_eq!(view.len(), records.len());
    for (got, expected) in view.iter().zip(records.iter()) {
        assert_eq!(got, expected);
    }
}

#[test]
fn test_canton_and_category_are_anded() {
    let records = sample_records();
    let selection = Selection::parse(Some("Zurich"), Some("Solar")).unwrap();
    let view = filter(&records, &selection);
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|r| r.canton_name == "Zurich"
        && r.energy_source_level_2 == EnergyCategory::Solar));
}

#[test]
fn test_filter_preserves_base_order() {
    let records = sample_records();
    let selection = Selection::parse(Some("Bern"), None).unwrap();
    let view = filter(&records, &selection);
    let categories = view
        .iter()
        .map(|r| r.energy_source_level_2)
        .collect::<Vec<_>>();
    assert_eq!(
        categories,
        vec![
            EnergyCategory::Solar,
            EnergyCategory::Hydro,
            EnergyCategory::Wind
        ]
    );
}

#[test]
fn test_zero_matches_is_explicit_no_data() {
    let records = sample_records();
    let selection = Selection::parse(Some("Zurich"), Some("Wind")).unwrap();
    let view = filter(&records, &selection);
    assert!(view.is_empty());
    match view.require_data() {
        Outcome::NoData(no_data) => {
            assert_eq!(no_data.canton, "Zurich");
            assert_eq!(no_data.category, "Wind");
        }
        Outcome::Ready(_) => panic!("expected no data"),
    }
}

#[test]
fn test_unknown_canton_is_empty_not_error() {
    let records = sample_records();
    let selection = Selection::new(CantonFilter::parse("Atlantis"), CategoryFilter::All);
    assert!(!filter(&records, &selection).require_data().is_ready());
}

#[test]
fn test_refine_matches_direct_filter() {
    let records = sample_records();
    let wide = filter(&records, &Selection::parse(Some("Valais"), None).unwrap());
    let refined = wide.refine(CategoryFilter::Only(EnergyCategory::Hydro));
    let direct = filter(
        &records,
        &Selection::parse(Some("Valais"), Some("Hydro")).unwrap(),
    );
    assert_eq!(refined.records(), direct.records());
    assert_eq!(refined.selection(), direct.selection());
}

#[test]
fn test_filter_does_not_touch_base_table() {
    let records = sample_records();
    let before = records.clone();
    let _a = filter(&records, &Selection::parse(Some("Bern"), None).unwrap());
    let _b = filter(&records, &Selection::parse(None, Some("Hydro")).unwrap());
    assert_eq!(records, before);
}
