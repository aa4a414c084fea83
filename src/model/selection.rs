use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::model::installation::{EnergyCategory, canton_display_name, category_display_name};

/// Selector value meaning "no restriction on this dimension".
pub const ALL_OPTION: &str = "All";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown energy category: {0} (use All|Bioenergy|Hydro|Solar|Wind)")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CantonFilter {
    All,
    Only(String),
}

impl CantonFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_OPTION {
            CantonFilter::All
        } else {
            CantonFilter::Only(raw.to_string())
        }
    }

    pub fn matches(&self, canton: &str) -> bool {
        match self {
            CantonFilter::All => true,
            CantonFilter::Only(name) => name == canton,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CantonFilter::All => ALL_OPTION,
            CantonFilter::Only(name) => name,
        }
    }

    pub fn display_name(&self) -> &str {
        canton_display_name(self.label())
    }
}

impl Serialize for CantonFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Only(EnergyCategory),
}

impl CategoryFilter {
    /// Selector options in the order the dashboard lists them.
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(EnergyCategory::Bioenergy),
        CategoryFilter::Only(EnergyCategory::Hydro),
        CategoryFilter::Only(EnergyCategory::Solar),
        CategoryFilter::Only(EnergyCategory::Wind),
    ];

    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_OPTION {
            return Ok(CategoryFilter::All);
        }
        EnergyCategory::parse(raw)
            .map(CategoryFilter::Only)
            .ok_or_else(|| SelectionError::UnknownCategory(raw.to_string()))
    }

    pub fn matches(self, category: EnergyCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_OPTION,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn display_name(self) -> &'static str {
        category_display_name(self.label())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Canton and category predicates, ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub canton: CantonFilter,
    pub category: CategoryFilter,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            canton: CantonFilter::All,
            category: CategoryFilter::All,
        }
    }

    pub fn new(canton: CantonFilter, category: CategoryFilter) -> Self {
        Self { canton, category }
    }

    /// `None` stands for an omitted selector and behaves like "All".
    pub fn parse(canton: Option<&str>, category: Option<&str>) -> Result<Self, SelectionError> {
        Ok(Self {
            canton: canton.map(CantonFilter::parse).unwrap_or(CantonFilter::All),
            category: match category {
                Some(raw) => CategoryFilter::parse(raw)?,
                None => CategoryFilter::All,
            },
        })
    }

    /// Same canton, any category.
    pub fn canton_only(&self) -> Self {
        Self {
            canton: self.canton.clone(),
            category: CategoryFilter::All,
        }
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            canton: self.canton.clone(),
            category,
        }
    }
}

/// Explicit "nothing matched" result for a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoData {
    pub canton: String,
    pub category: String,
    pub message: String,
}

impl NoData {
    pub fn for_selection(selection: &Selection) -> Self {
        let canton = selection.canton.label().to_string();
        let category = selection.category.label().to_string();
        let message = format!(
            "There are no energy sources available for {category} energy in the canton of {canton}."
        );
        Self {
            canton,
            category,
            message,
        }
    }
}

/// A computation over a selection either has data or is explicitly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ready(T),
    NoData(NoData),
}

impl<T> Outcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Outcome::Ready(value) => Some(value),
            Outcome::NoData(_) => None,
        }
    }

    pub fn no_data(&self) -> Option<&NoData> {
        match self {
            Outcome::Ready(_) => None,
            Outcome::NoData(no_data) => Some(no_data),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ready(value) => Outcome::Ready(f(value)),
            Outcome::NoData(no_data) => Outcome::NoData(no_data),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/selection.rs"]
mod tests;
