use serde::Serialize;

use crate::input::Dataset;
use crate::model::{Measure, Outcome, Selection};
use crate::pipeline::stage1_filter::filter;
use crate::pipeline::stage3_derived::{GrowthSeries, growth_series};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureGrowth {
    pub measure: Measure,
    pub axis_label: &'static str,
    pub series: Vec<GrowthSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthView {
    pub selection: Selection,
    /// Selected records without a commissioning date; absent from every
    /// series.
    pub undated_count: usize,
    pub measures: Vec<MeasureGrowth>,
}

pub fn growth(dataset: &Dataset, selection: &Selection) -> Outcome<GrowthView> {
    filter(dataset.records(), selection)
        .require_data()
        .map(|view| {
            let undated_count = view
                .iter()
                .filter(|r| r.commissioning_date.is_none())
                .count();
            let measures = Measure::ALL
                .into_iter()
                .map(|measure| MeasureGrowth {
                    measure,
                    axis_label: measure.label(),
                    series: growth_series(view.records(), selection.category, measure),
                })
                .collect();
            GrowthView {
                selection: selection.clone(),
                undated_count,
                measures,
            }
        })
}
