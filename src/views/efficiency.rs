use std::collections::BTreeMap;

use serde::Serialize;

use crate::input::Dataset;
use crate::model::{EnergyCategory, Outcome, Selection};
use crate::pipeline::stage1_filter::filter;
use crate::pipeline::stage3_derived::{
    RatioRecord, median_ratio_by_category, ratio_distribution, undefined_ratio_count,
    with_ratios,
};
use crate::pipeline::stage4_outliers::trim_bivariate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub canton_name: String,
    pub category: EnergyCategory,
    pub electrical_capacity: f64,
    pub production: f64,
    pub ratio: f64,
}

impl From<RatioRecord<'_>> for ScatterPoint {
    fn from(rr: RatioRecord<'_>) -> Self {
        Self {
            canton_name: rr.record.canton_name.clone(),
            category: rr.record.energy_source_level_2,
            electrical_capacity: rr.record.electrical_capacity,
            production: rr.record.production,
            ratio: rr.ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyView {
    pub selection: Selection,
    pub trim_outliers: bool,
    pub points: Outcome<Vec<ScatterPoint>>,
    /// Selected records left out of the scatter because their capacity is 0.
    pub undefined_ratio_count: usize,
    /// Country-wide median ratio per category (reference slopes).
    pub reference_medians: BTreeMap<EnergyCategory, f64>,
    /// Country-wide ratio values per category (histogram input).
    pub ratio_distribution: BTreeMap<EnergyCategory, Vec<f64>>,
}

pub fn efficiency(dataset: &Dataset, selection: &Selection, trim_outliers: bool) -> EfficiencyView {
    let everything = filter(dataset.records(), &Selection::all());
    let selected = filter(dataset.records(), selection);
    let undefined = undefined_ratio_count(selected.records());

    let points = selected.require_data().map(|view| {
        let ratios = with_ratios(view.records());
        trim_bivariate(&ratios, trim_outliers)
            .into_iter()
            .map(ScatterPoint::from)
            .collect()
    });

    EfficiencyView {
        selection: selection.clone(),
        trim_outliers,
        points,
        undefined_ratio_count: undefined,
        reference_medians: median_ratio_by_category(everything.records()),
        ratio_distribution: ratio_distribution(everything.records()),
    }
}
