use super::*;
use crate::model::category_display_name;

#[test]
fn test_all_and_empty_mean_no_predicate() {
    assert_eq!(CantonFilter::parse("All"), CantonFilter::All);
    assert_eq!(CantonFilter::parse("  "), CantonFilter::All);
    assert_eq!(CategoryFilter::parse("All").unwrap(), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse("").unwrap(), CategoryFilter::All);
    assert_eq!(Selection::parse(None, None).unwrap(), Selection::all());
}

#[test]
fn test_parse_specific_values() {
    let selection = Selection::parse(Some("Bern"), Some("Solar")).unwrap();
    assert_eq!(selection.canton, CantonFilter::Only("Bern".to_string()));
    assert_eq!(
        selection.category,
        CategoryFilter::Only(EnergyCategory::Solar)
    );
    assert!(selection.canton.matches("Bern"));
    assert!(!selection.canton.matches("bern"));
    assert!(selection.category.matches(EnergyCategory::Solar));
    assert!(!selection.category.matches(EnergyCategory::Wind));
}

#[test]
fn test_unknown_category_is_rejected() {
    let err = CategoryFilter::parse("Nuclear").unwrap_err();
    assert_eq!(err, SelectionError::UnknownCategory("Nuclear".to_string()));
}

#[test]
fn test_canton_only_drops_category() {
    let selection = Selection::parse(Some("Valais"), Some("Hydro")).unwrap();
    let wide = selection.canton_only();
    assert_eq!(wide.canton, selection.canton);
    assert_eq!(wide.category, CategoryFilter::All);
}

#[test]
fn test_no_data_message() {
    let selection = Selection::parse(Some("Uri"), Some("Wind")).unwrap();
    let no_data = NoData::for_selection(&selection);
    assert_eq!(
        no_data.message,
        "There are no energy sources available for Wind energy in the canton of Uri."
    );
}

#[test]
fn test_display_names_fall_back_to_identity() {
    assert_eq!(category_display_name("All"), "Total Renewable");
    assert_eq!(category_display_name("Hydro"), "Hydropower");
    assert_eq!(category_display_name("Solar"), "Solar Power");
    assert_eq!(category_display_name("Wind"), "Wind Power");
    assert_eq!(category_display_name("Bioenergy"), "Bio");
    assert_eq!(category_display_name("Geothermal"), "Geothermal");
    assert_eq!(CantonFilter::All.display_name(), "Switzerland");
    assert_eq!(CantonFilter::parse("Jura").display_name(), "Jura");
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let ready: Outcome<u32> = Outcome::Ready(3);
    let json = serde_json::to_value(&ready).unwrap();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["data"], 3);

    let empty: Outcome<u32> = Outcome::NoData(NoData::for_selection(&Selection::all()));
    let json = serde_json::to_value(&empty).unwrap();
    assert_eq!(json["status"], "no_data");
    assert_eq!(json["data"]["category"], "All");
}

#[test]
fn test_selection_serializes_labels() {
    let selection = Selection::parse(Some("Zurich"), Some("Bioenergy")).unwrap();
    let json = serde_json::to_value(&selection).unwrap();
    assert_eq!(json["canton"], "Zurich");
    assert_eq!(json["category"], "Bioenergy");
}
