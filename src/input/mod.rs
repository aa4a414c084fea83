use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub mod boundaries;
pub mod installations;
pub mod reader;

pub use boundaries::{BoundarySet, CantonBoundary, load_boundaries, parse_boundaries};
pub use installations::{load_installations, parse_installations};

use crate::model::{ALL_OPTION, CategoryFilter, Installation};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
}

/// Immutable base table plus canton geometry, loaded once per process and
/// shared by reference with every view computation.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Installation>,
    boundaries: BoundarySet,
}

impl Dataset {
    pub fn new(records: Vec<Installation>, boundaries: BoundarySet) -> Self {
        Self {
            records,
            boundaries,
        }
    }

    pub fn load(installations_path: &Path, boundaries_path: &Path) -> Result<Self, InputError> {
        let records = load_installations(installations_path)?;
        if records.is_empty() {
            return Err(InputError::MissingInput(format!(
                "no usable installations in {}",
                installations_path.display()
            )));
        }
        let boundaries = load_boundaries(boundaries_path)?;
        let dataset = Self::new(records, boundaries);
        info!(
            records = dataset.records.len(),
            cantons = dataset.cantons().len(),
            boundaries = dataset.boundaries.len(),
            "dataset ready"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[Installation] {
        &self.records
    }

    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct canton names present in the base table, ascending.
    pub fn cantons(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.canton_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Canton selector entries: "All" followed by the sorted canton names.
    pub fn canton_options(&self) -> Vec<String> {
        std::iter::once(ALL_OPTION.to_string())
            .chain(self.cantons())
            .collect()
    }

    /// `All` followed by each category present in the base table, in name
    /// order.
    pub fn category_filters(&self) -> Vec<CategoryFilter> {
        let present = self
            .records
            .iter()
            .map(|r| r.energy_source_level_2)
            .collect::<BTreeSet<_>>();
        std::iter::once(CategoryFilter::All)
            .chain(present.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Category selector entries: "All" followed by the categories present.
    pub fn category_options(&self) -> Vec<String> {
        self.category_filters()
            .into_iter()
            .map(|c| c.label().to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
