use serde::Serialize;

use crate::input::Dataset;
use crate::model::{
    AggregateRow, CantonFilter, CategoryFilter, GroupKey, Measure, Outcome, Selection,
};
use crate::pipeline::stage1_filter::filter;
use crate::pipeline::stage2_aggregate::{aggregate_by, complete_over, ranked_by, top_by};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCanton {
    pub measure: Measure,
    pub canton: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub measure: Measure,
    pub rows: Vec<AggregateRow>,
}

/// Country-wide canton comparison for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub category: CategoryFilter,
    pub display_name: &'static str,
    /// One row per canton of the base table, zero for cantons without a
    /// matching installation (choropleth input).
    pub per_canton: Vec<AggregateRow>,
    pub top: Vec<TopCanton>,
    /// Bar-chart orderings over the cantons that have installations.
    pub rankings: Vec<Ranking>,
}

pub fn overview(dataset: &Dataset, category: CategoryFilter) -> Outcome<OverviewView> {
    let selection = Selection::new(CantonFilter::All, category);
    let view = match filter(dataset.records(), &selection).require_data() {
        Outcome::Ready(view) => view,
        Outcome::NoData(no_data) => return Outcome::NoData(no_data),
    };

    let rows = aggregate_by(view.records(), GroupKey::Canton);
    let top = Measure::ALL
        .into_iter()
        .filter_map(|measure| {
            top_by(&rows, measure).map(|row| TopCanton {
                measure,
                canton: row.key.clone(),
                value: measure.of_row(row),
            })
        })
        .collect();
    let rankings = Measure::ALL
        .into_iter()
        .map(|measure| Ranking {
            measure,
            rows: ranked_by(&rows, measure),
        })
        .collect();

    Outcome::Ready(OverviewView {
        category,
        display_name: category.display_name(),
        per_canton: complete_over(&rows, &dataset.cantons()),
        top,
        rankings,
    })
}
