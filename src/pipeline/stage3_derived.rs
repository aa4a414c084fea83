use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{CategoryFilter, EnergyCategory, Installation, Measure};
use crate::stats;

/// Installation paired with its production / capacity ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioRecord<'a> {
    pub record: &'a Installation,
    pub ratio: f64,
}

/// `production / electrical_capacity`, undefined for zero capacity.
pub fn efficiency_ratio(record: &Installation) -> Option<f64> {
    if record.electrical_capacity == 0.0 {
        return None;
    }
    let ratio = record.production / record.electrical_capacity;
    ratio.is_finite().then_some(ratio)
}

/// Records with a defined ratio, in input order.
pub fn with_ratios<'a>(records: &[&'a Installation]) -> Vec<RatioRecord<'a>> {
    records
        .iter()
        .copied()
        .filter_map(|record| {
            efficiency_ratio(record).map(|ratio| RatioRecord { record, ratio })
        })
        .collect()
}

pub fn undefined_ratio_count(records: &[&Installation]) -> usize {
    records
        .iter()
        .filter(|r| efficiency_ratio(r).is_none())
        .count()
}

/// Ratio values per category; categories without any defined ratio are
/// absent.
pub fn ratio_distribution(records: &[&Installation]) -> BTreeMap<EnergyCategory, Vec<f64>> {
    let mut out: BTreeMap<EnergyCategory, Vec<f64>> = BTreeMap::new();
    for rr in with_ratios(records) {
        out.entry(rr.record.energy_source_level_2)
            .or_default()
            .push(rr.ratio);
    }
    out
}

pub fn median_ratio_by_category(records: &[&Installation]) -> BTreeMap<EnergyCategory, f64> {
    ratio_distribution(records)
        .into_iter()
        .filter_map(|(category, ratios)| stats::median(&ratios).map(|m| (category, m)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Running sum of `measure` in commissioning-date order. Undated records
/// are left out; records sharing a date keep their input order.
pub fn cumulative_series(records: &[&Installation], measure: Measure) -> Vec<CumulativePoint> {
    let mut dated = records
        .iter()
        .filter_map(|r| r.commissioning_date.map(|date| (date, measure.value_of(r))))
        .collect::<Vec<_>>();
    dated.sort_by_key(|(date, _)| *date);

    let mut running = 0.0;
    dated
        .into_iter()
        .map(|(date, value)| {
            running += value;
            CumulativePoint {
                date,
                value: running,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSeries {
    pub label: &'static str,
    pub measure: Measure,
    pub points: Vec<CumulativePoint>,
}

/// One independent cumulative series per curve: for `All` the combined
/// curve followed by Solar, Hydro, Bioenergy and Wind; otherwise only the
/// selected category.
pub fn growth_series(
    records: &[&Installation],
    category: CategoryFilter,
    measure: Measure,
) -> Vec<GrowthSeries> {
    let curves: Vec<CategoryFilter> = match category {
        CategoryFilter::All => std::iter::once(CategoryFilter::All)
            .chain(
                EnergyCategory::GROWTH_ORDER
                    .into_iter()
                    .map(CategoryFilter::Only),
            )
            .collect(),
        only => vec![only],
    };

    curves
        .into_iter()
        .map(|curve| {
            let subset = records
                .iter()
                .copied()
                .filter(|r| curve.matches(r.energy_source_level_2))
                .collect::<Vec<_>>();
            GrowthSeries {
                label: curve.label(),
                measure,
                points: cumulative_series(&subset, measure),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_derived.rs"]
mod tests;
