use serde::Serialize;

use crate::input::Dataset;
use crate::model::{CategoryFilter, Measure, Outcome, Selection};
use crate::pipeline::stage1_filter::{FilteredView, filter};
use crate::pipeline::stage4_outliers::{Fences, trim};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub measure: Measure,
    pub trimmed: bool,
    /// Fences of the untrimmed values, reported whether or not trimming is on.
    pub fences: Option<Fences>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionPanel {
    pub category: CategoryFilter,
    pub production: Outcome<Distribution>,
    pub electrical_capacity: Outcome<Distribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionsView {
    pub selection: Selection,
    pub trim_outliers: bool,
    pub primary: DistributionPanel,
    /// Same canton, each other category option present in the dataset.
    pub comparisons: Vec<DistributionPanel>,
}

fn distribution(view: &FilteredView<'_>, measure: Measure, trim_outliers: bool) -> Distribution {
    let values = view.iter().map(|r| measure.value_of(r)).collect::<Vec<_>>();
    Distribution {
        measure,
        trimmed: trim_outliers,
        fences: Fences::from_values(&values),
        values: trim(&values, trim_outliers),
    }
}

fn panel(view: FilteredView<'_>, trim_outliers: bool) -> DistributionPanel {
    let category = view.selection().category;
    match view.require_data() {
        Outcome::Ready(view) => DistributionPanel {
            category,
            production: Outcome::Ready(distribution(&view, Measure::Production, trim_outliers)),
            electrical_capacity: Outcome::Ready(distribution(
                &view,
                Measure::ElectricalCapacity,
                trim_outliers,
            )),
        },
        Outcome::NoData(no_data) => DistributionPanel {
            category,
            production: Outcome::NoData(no_data.clone()),
            electrical_capacity: Outcome::NoData(no_data),
        },
    }
}

pub fn distributions(
    dataset: &Dataset,
    selection: &Selection,
    trim_outliers: bool,
) -> DistributionsView {
    let primary = panel(filter(dataset.records(), selection), trim_outliers);

    let canton_wide = filter(dataset.records(), &selection.canton_only());
    let comparisons = dataset
        .category_filters()
        .into_iter()
        .filter(|option| *option != selection.category)
        .map(|option| panel(canton_wide.refine(option), trim_outliers))
        .collect();

    DistributionsView {
        selection: selection.clone(),
        trim_outliers,
        primary,
        comparisons,
    }
}
