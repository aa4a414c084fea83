use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::geo::{MapView, locate};
use crate::input::Dataset;
use crate::model::{
    AggregateRow, CantonFilter, EnergyCategory, GroupKey, Installation, NoData, Outcome,
    Selection, Totals,
};
use crate::pipeline::stage1_filter::{FilteredView, filter};
use crate::pipeline::stage2_aggregate::{aggregate_by, totals};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPoint {
    pub canton_name: String,
    pub category: EnergyCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub electrical_capacity: f64,
    pub production: f64,
    pub commissioning_date: Option<NaiveDate>,
    pub municipality: String,
    pub company: String,
    pub address: String,
    pub technology: String,
}

impl LocationPoint {
    /// `None` for records without both coordinates.
    pub fn placed(record: &Installation) -> Option<Self> {
        let (latitude, longitude) = record.position()?;
        Some(Self {
            canton_name: record.canton_name.clone(),
            category: record.energy_source_level_2,
            latitude,
            longitude,
            electrical_capacity: record.electrical_capacity,
            production: record.production,
            commissioning_date: record.commissioning_date,
            municipality: record.municipality.clone(),
            company: record.company.clone(),
            address: record.address.clone(),
            technology: record.technology.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MapPlacement {
    Ready { view: MapView },
    NoData { detail: NoData },
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationsView {
    pub selection: Selection,
    pub map: MapPlacement,
    pub points: Outcome<Vec<LocationPoint>>,
    /// Selected records left off the map for lack of coordinates. They
    /// still count in `totals` and `category_breakdown`.
    pub unplaced_count: usize,
    pub totals: Outcome<Totals>,
    /// Count and sums per category over the canton alone (pie and bar
    /// inputs), independent of the category selection.
    pub category_breakdown: Outcome<Vec<AggregateRow>>,
}

fn map_placement(dataset: &Dataset, selection: &Selection, points: &FilteredView<'_>) -> MapPlacement {
    match &selection.canton {
        CantonFilter::All => MapPlacement::Ready {
            view: MapView::national(),
        },
        CantonFilter::Only(_) if points.is_empty() => MapPlacement::NoData {
            detail: NoData::for_selection(selection),
        },
        CantonFilter::Only(canton) => match locate(dataset.boundaries(), canton) {
            Ok(view) => MapPlacement::Ready { view },
            Err(err) => {
                warn!(canton = %canton, error = %err, "cannot place canton map");
                MapPlacement::Unavailable {
                    reason: err.to_string(),
                }
            }
        },
    }
}

pub fn locations(dataset: &Dataset, selection: &Selection) -> LocationsView {
    let points = filter(dataset.records(), selection);
    let canton_wide = filter(dataset.records(), &selection.canton_only());

    let map = map_placement(dataset, selection, &points);
    let summary = points.clone().require_data().map(|v| totals(v.records()));
    let category_breakdown = canton_wide
        .require_data()
        .map(|v| aggregate_by(v.records(), GroupKey::Category));
    let unplaced_count = points.iter().filter(|r| r.position().is_none()).count();
    let points = points
        .require_data()
        .map(|v| v.iter().filter_map(LocationPoint::placed).collect());

    LocationsView {
        selection: selection.clone(),
        map,
        points,
        unplaced_count,
        totals: summary,
        category_breakdown,
    }
}
