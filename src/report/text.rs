use std::fmt::Write;

use crate::model::{Measure, Outcome};
use crate::report::format_f64_2;
use crate::views::{DashboardReport, MapPlacement};

fn measure_unit(measure: Measure) -> &'static str {
    match measure {
        Measure::Count => "",
        Measure::ElectricalCapacity => " MW",
        Measure::Production => " MWh",
    }
}

fn measure_title(measure: Measure) -> &'static str {
    match measure {
        Measure::Count => "Most energy sources",
        Measure::ElectricalCapacity => "Highest electrical capacity",
        Measure::Production => "Highest production",
    }
}

pub fn render_report_text(report: &DashboardReport) -> String {
    let mut out = String::new();
    let selection = &report.request.selection;

    out.push_str("Clean Renewable Energy in Switzerland\n");
    out.push_str("=====================================\n\n");
    let _ = writeln!(
        out,
        "Selection: {} / {} (outliers removed: {})",
        selection.canton.display_name(),
        selection.category.display_name(),
        if report.request.trim_outliers { "yes" } else { "no" }
    );
    let _ = writeln!(
        out,
        "Dataset: {} installations, {} cantons, {} boundaries\n",
        report.n_records, report.n_cantons, report.n_boundaries
    );

    out.push_str("1. Top cantons\n");
    match &report.overview {
        Outcome::Ready(overview) => {
            let _ = writeln!(
                out,
                "Category: {} Energy",
                overview.display_name
            );
            for top in &overview.top {
                let _ = writeln!(
                    out,
                    "{}: {} ({}{})",
                    measure_title(top.measure),
                    top.canton,
                    format_f64_2(top.value),
                    measure_unit(top.measure)
                );
            }
        }
        Outcome::NoData(no_data) => {
            let _ = writeln!(out, "{}", no_data.message);
        }
    }
    out.push('\n');

    out.push_str("2. Selection summary\n");
    match &report.locations.totals {
        Outcome::Ready(totals) => {
            let _ = writeln!(out, "Total number of energy sources: {}", totals.count);
            let _ = writeln!(
                out,
                "Total electrical capacity (MW): {}",
                format_f64_2(totals.total_capacity)
            );
            let _ = writeln!(
                out,
                "Total production (MWh): {}",
                format_f64_2(totals.total_production)
            );
        }
        Outcome::NoData(no_data) => {
            let _ = writeln!(out, "{}", no_data.message);
        }
    }
    if report.locations.unplaced_count > 0 {
        let _ = writeln!(
            out,
            "Installations without coordinates (not on the map): {}",
            report.locations.unplaced_count
        );
    }
    match &report.locations.map {
        MapPlacement::Ready { view } => {
            let _ = writeln!(
                out,
                "Map center: {:.4}, {:.4} (zoom {:.2})",
                view.lat_center, view.lon_center, view.zoom
            );
        }
        MapPlacement::NoData { .. } => {}
        MapPlacement::Unavailable { reason } => {
            let _ = writeln!(out, "Map unavailable: {}", reason);
        }
    }
    out.push('\n');

    out.push_str("3. Efficiency (production / capacity)\n");
    for (category, m) in &report.efficiency.reference_medians {
        let _ = writeln!(out, "Median {}: {}", category, format_f64_2(*m));
    }
    if report.efficiency.undefined_ratio_count > 0 {
        let _ = writeln!(
            out,
            "Installations without capacity (ratio undefined): {}",
            report.efficiency.undefined_ratio_count
        );
    }
    out.push('\n');

    out.push_str("4. Cumulative growth\n");
    match &report.growth {
        Outcome::Ready(growth) => {
            for measure in &growth.measures {
                for series in &measure.series {
                    match series.points.last() {
                        Some(last) => {
                            let _ = writeln!(
                                out,
                                "{} [{}]: {} by {}",
                                measure.axis_label,
                                series.label,
                                format_f64_2(last.value),
                                last.date
                            );
                        }
                        None => {
                            let _ = writeln!(
                                out,
                                "{} [{}]: no dated installations",
                                measure.axis_label, series.label
                            );
                        }
                    }
                }
            }
            if growth.undated_count > 0 {
                let _ = writeln!(
                    out,
                    "Installations without commissioning date: {}",
                    growth.undated_count
                );
            }
        }
        Outcome::NoData(no_data) => {
            let _ = writeln!(out, "{}", no_data.message);
        }
    }

    out
}
