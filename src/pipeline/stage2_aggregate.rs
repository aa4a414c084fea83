use std::collections::BTreeMap;

use crate::model::{AggregateRow, GroupKey, Installation, Measure, Totals};

/// Groups records by canton or category. Only keys present in the input
/// produce a row; rows are ordered by key.
pub fn aggregate_by(records: &[&Installation], key: GroupKey) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<&str, AggregateRow> = BTreeMap::new();
    for record in records {
        let group = key.key_of(record);
        groups
            .entry(group)
            .or_insert_with(|| AggregateRow::zero(group))
            .accumulate(record);
    }
    groups.into_values().collect()
}

/// Left-joins `rows` onto `domain`; keys without a row become zero rows.
/// Output follows the order of `domain`.
pub fn complete_over(rows: &[AggregateRow], domain: &[String]) -> Vec<AggregateRow> {
    let by_key: BTreeMap<&str, &AggregateRow> =
        rows.iter().map(|row| (row.key.as_str(), row)).collect();
    domain
        .iter()
        .map(|key| match by_key.get(key.as_str()) {
            Some(row) => (*row).clone(),
            None => AggregateRow::zero(key.as_str()),
        })
        .collect()
}

/// Row with the largest value of `measure`. Ties go to the smallest key, so
/// the answer does not depend on the order of `rows`.
pub fn top_by(rows: &[AggregateRow], measure: Measure) -> Option<&AggregateRow> {
    let mut best: Option<&AggregateRow> = None;
    for row in rows {
        best = match best {
            None => Some(row),
            Some(current) => {
                let (value, current_value) = (measure.of_row(row), measure.of_row(current));
                if value > current_value || (value == current_value && row.key < current.key) {
                    Some(row)
                } else {
                    Some(current)
                }
            }
        };
    }
    best
}

/// Rows sorted by `measure`, largest first; equal values keep key order.
pub fn ranked_by(rows: &[AggregateRow], measure: Measure) -> Vec<AggregateRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| {
        measure
            .of_row(b)
            .total_cmp(&measure.of_row(a))
            .then_with(|| a.key.cmp(&b.key))
    });
    ranked
}

pub fn totals(records: &[&Installation]) -> Totals {
    let mut out = Totals::default();
    for record in records {
        out.count += 1;
        out.total_capacity += record.electrical_capacity;
        out.total_production += record.production;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
