//! Dashboard panels assembled from the pipeline stages. Each builder takes
//! the shared dataset by reference and returns freshly computed values.

pub mod distributions;
pub mod efficiency;
pub mod growth;
pub mod locations;
pub mod overview;

use serde::Serialize;
use tracing::info;

use crate::input::Dataset;
use crate::model::{Outcome, Selection};

pub use distributions::{DistributionsView, distributions};
pub use efficiency::{EfficiencyView, efficiency};
pub use growth::{GrowthView, growth};
pub use locations::{LocationsView, MapPlacement, locations};
pub use overview::{OverviewView, overview};

/// Everything that varies per interaction. Anything cached from a view must
/// be keyed by the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewRequest {
    pub selection: Selection,
    pub trim_outliers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub tool: &'static str,
    pub version: &'static str,
    pub n_records: usize,
    pub n_cantons: usize,
    pub n_boundaries: usize,
    pub request: ViewRequest,
    pub overview: Outcome<OverviewView>,
    pub locations: LocationsView,
    pub distributions: DistributionsView,
    pub efficiency: EfficiencyView,
    pub growth: Outcome<GrowthView>,
}

pub fn build_dashboard(dataset: &Dataset, request: &ViewRequest) -> DashboardReport {
    let selection = &request.selection;
    info!(
        canton = selection.canton.label(),
        category = selection.category.label(),
        trim_outliers = request.trim_outliers,
        "building dashboard views"
    );

    DashboardReport {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        n_records: dataset.len(),
        n_cantons: dataset.cantons().len(),
        n_boundaries: dataset.boundaries().len(),
        request: request.clone(),
        overview: overview(dataset, selection.category),
        locations: locations(dataset, selection),
        distributions: distributions(dataset, selection, request.trim_outliers),
        efficiency: efficiency(dataset, selection, request.trim_outliers),
        growth: growth(dataset, selection),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/views/tests.rs"]
mod tests;
