use super::*;
use crate::fixtures::{make_temp_dir, sample_dataset};
use crate::model::Selection;
use crate::views::{ViewRequest, build_dashboard};

fn report_for(canton: Option<&str>, category: Option<&str>) -> DashboardReport {
    let request = ViewRequest {
        selection: Selection::parse(canton, category).unwrap(),
        trim_outliers: false,
    };
    build_dashboard(&sample_dataset(), &request)
}

#[test]
fn test_format_f64_2() {
    assert_eq!(format_f64_2(58210.0), "58210.00");
    assert_eq!(format_f64_2(1.0 / 3.0), "0.33");
}

#[test]
fn test_write_reports_outputs() {
    let dir = make_temp_dir("report");
    let out_dir = dir.join("nested").join("out");
    let report = report_for(Some("Bern"), None);
    write_reports(&report, &out_dir).unwrap();

    let json = fs::read_to_string(out_dir.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["n_records"], 9);
    assert_eq!(value["request"]["selection"]["canton"], "Bern");
    assert_eq!(value["request"]["selection"]["category"], "All");
    assert_eq!(value["overview"]["status"], "ready");
    assert_eq!(value["locations"]["map"]["status"], "ready");
    assert_eq!(value["growth"]["status"], "ready");
    assert_eq!(value["efficiency"]["undefined_ratio_count"], 1);

    let text = fs::read_to_string(out_dir.join("report.txt")).unwrap();
    assert!(text.contains("Selection: Bern / Total Renewable"));
    assert!(text.contains("Most energy sources: Bern (3.00)"));
    assert!(text.contains("Highest production: Valais (58210.00 MWh)"));
    assert!(text.contains("Total number of energy sources: 3"));
    assert!(text.contains("Installations without capacity (ratio undefined): 1"));
}

#[test]
fn test_no_data_sections_render_message() {
    let report = report_for(Some("Zurich"), Some("Wind"));
    let message = "There are no energy sources available for Wind energy in the canton of Zurich.";

    let json = json::render_summary_json(&report).unwrap();
    assert!(json.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["locations"]["map"]["status"], "no_data");
    assert_eq!(value["growth"]["status"], "no_data");
    assert_eq!(value["growth"]["data"]["message"], message);

    let text = text::render_report_text(&report);
    assert!(text.contains("Category: Wind Power Energy"));
    assert!(text.contains(message));
    assert!(!text.contains("Map center"));
}
