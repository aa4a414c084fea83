use serde::Serialize;

use crate::model::installation::Installation;

/// Quantity that can be summed or accumulated over installations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Count,
    ElectricalCapacity,
    Production,
}

impl Measure {
    pub const ALL: [Measure; 3] = [
        Measure::Count,
        Measure::ElectricalCapacity,
        Measure::Production,
    ];

    /// Contribution of a single record; `Count` contributes 1.
    pub fn value_of(self, record: &Installation) -> f64 {
        match self {
            Measure::Count => 1.0,
            Measure::ElectricalCapacity => record.electrical_capacity,
            Measure::Production => record.production,
        }
    }

    pub fn of_row(self, row: &AggregateRow) -> f64 {
        match self {
            Measure::Count => row.count as f64,
            Measure::ElectricalCapacity => row.total_capacity,
            Measure::Production => row.total_production,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Measure::Count => "Total Number of Sources",
            Measure::ElectricalCapacity => "Total Electrical Capacity (MW)",
            Measure::Production => "Total Production (MWh)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Canton,
    Category,
}

impl GroupKey {
    pub fn key_of(self, record: &Installation) -> &str {
        match self {
            GroupKey::Canton => &record.canton_name,
            GroupKey::Category => record.energy_source_level_2.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub key: String,
    pub count: usize,
    pub total_capacity: f64,
    pub total_production: f64,
}

impl AggregateRow {
    pub fn zero(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            count: 0,
            total_capacity: 0.0,
            total_production: 0.0,
        }
    }

    pub(crate) fn accumulate(&mut self, record: &Installation) {
        self.count += 1;
        self.total_capacity += record.electrical_capacity;
        self.total_production += record.production;
    }
}

/// Ungrouped count and sums over a selection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub count: usize,
    pub total_capacity: f64,
    pub total_production: f64,
}
