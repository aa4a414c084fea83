use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Renewable energy classification (`energy_source_level_2`).
///
/// Variants are declared in name order so the derived `Ord` matches the
/// alphabetical ordering used for grouping and selector lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EnergyCategory {
    Bioenergy,
    Hydro,
    Solar,
    Wind,
}

impl EnergyCategory {
    pub const ALL: [EnergyCategory; 4] = [
        EnergyCategory::Bioenergy,
        EnergyCategory::Hydro,
        EnergyCategory::Solar,
        EnergyCategory::Wind,
    ];

    /// Order in which per-category growth curves are drawn.
    pub const GROWTH_ORDER: [EnergyCategory; 4] = [
        EnergyCategory::Solar,
        EnergyCategory::Hydro,
        EnergyCategory::Bioenergy,
        EnergyCategory::Wind,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyCategory::Bioenergy => "Bioenergy",
            EnergyCategory::Hydro => "Hydro",
            EnergyCategory::Solar => "Solar",
            EnergyCategory::Wind => "Wind",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Bioenergy" => Some(EnergyCategory::Bioenergy),
            "Hydro" => Some(EnergyCategory::Hydro),
            "Solar" => Some(EnergyCategory::Solar),
            "Wind" => Some(EnergyCategory::Wind),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            EnergyCategory::Bioenergy => "Bio",
            EnergyCategory::Hydro => "Hydropower",
            EnergyCategory::Solar => "Solar Power",
            EnergyCategory::Wind => "Wind Power",
        }
    }
}

impl fmt::Display for EnergyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Friendly label for a raw category selector value. Unknown keys are
/// returned unchanged.
pub fn category_display_name(key: &str) -> &str {
    if key == crate::model::selection::ALL_OPTION {
        return "Total Renewable";
    }
    match EnergyCategory::parse(key) {
        Some(category) => category.display_name(),
        None => key,
    }
}

/// Friendly label for a raw canton selector value. Unknown keys are returned
/// unchanged.
pub fn canton_display_name(key: &str) -> &str {
    if key == crate::model::selection::ALL_OPTION {
        "Switzerland"
    } else {
        key
    }
}

/// One renewable energy source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Installation {
    pub canton_name: String,
    pub energy_source_level_2: EnergyCategory,
    /// MW
    pub electrical_capacity: f64,
    /// MWh per year
    pub production: f64,
    pub commissioning_date: Option<NaiveDate>,
    /// Approximate; absent coordinates only keep the record off the map.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub municipality: String,
    pub company: String,
    pub address: String,
    pub technology: String,
}

impl Installation {
    pub fn category(&self) -> EnergyCategory {
        self.energy_source_level_2
    }

    /// `(lat, lon)` when both coordinates are known.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
