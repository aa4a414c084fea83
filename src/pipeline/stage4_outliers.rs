use serde::Serialize;

use crate::pipeline::stage3_derived::RatioRecord;
use crate::stats::quantile_sorted;

pub const IQR_FENCE_FACTOR: f64 = 1.5;

/// Tukey fences of one distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fences {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Fences {
    /// `None` for empty input. Constant input collapses both fences onto
    /// the constant.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let q1 = quantile_sorted(&sorted, 0.25);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        Some(Self {
            q1,
            q3,
            lower: q1 - IQR_FENCE_FACTOR * iqr,
            upper: q3 + IQR_FENCE_FACTOR * iqr,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Keeps values within the IQR fences of `values`; identity when disabled.
pub fn trim(values: &[f64], enabled: bool) -> Vec<f64> {
    if !enabled {
        return values.to_vec();
    }
    match Fences::from_values(values) {
        Some(fences) => values
            .iter()
            .copied()
            .filter(|v| fences.contains(*v))
            .collect(),
        None => Vec::new(),
    }
}

/// A record survives only if both its capacity and its production lie
/// within their own fences, each computed over the whole input.
pub fn trim_bivariate<'a>(records: &[RatioRecord<'a>], enabled: bool) -> Vec<RatioRecord<'a>> {
    if !enabled {
        return records.to_vec();
    }
    let capacities = records
        .iter()
        .map(|rr| rr.record.electrical_capacity)
        .collect::<Vec<_>>();
    let productions = records
        .iter()
        .map(|rr| rr.record.production)
        .collect::<Vec<_>>();
    let (Some(capacity_fences), Some(production_fences)) = (
        Fences::from_values(&capacities),
        Fences::from_values(&productions),
    ) else {
        return Vec::new();
    };
    records
        .iter()
        .copied()
        .filter(|rr| {
            capacity_fences.contains(rr.record.electrical_capacity)
                && production_fences.contains(rr.record.production)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_outliers.rs"]
mod tests;
