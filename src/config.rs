use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::{DataArgs, RunArgs};
use crate::model::{Selection, SelectionError};
use crate::views::ViewRequest;

pub const DEFAULT_INSTALLATIONS: &str = "data/swiss_clean_energy.csv";
pub const DEFAULT_BOUNDARIES: &str = "data/georef-switzerland-kanton.geojson";
pub const DEFAULT_OUT_DIR: &str = "out";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Optional defaults read from a JSON file; command-line flags take
/// precedence over every field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub installations: Option<PathBuf>,
    pub boundaries: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub canton: Option<String>,
    pub category: Option<String>,
    pub trim_outliers: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub installations: PathBuf,
    pub boundaries: PathBuf,
}

impl DataPaths {
    pub fn resolve(args: &DataArgs, file: &FileConfig) -> Self {
        Self {
            installations: args
                .installations
                .clone()
                .or_else(|| file.installations.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALLATIONS)),
            boundaries: args
                .boundaries
                .clone()
                .or_else(|| file.boundaries.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BOUNDARIES)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub data: DataPaths,
    pub out_dir: PathBuf,
    pub request: ViewRequest,
}

impl RunConfig {
    pub fn resolve(args: &RunArgs, file: &FileConfig) -> Result<Self, ConfigError> {
        let canton = args.canton.as_deref().or(file.canton.as_deref());
        let category = args.category.as_deref().or(file.category.as_deref());
        let selection = Selection::parse(canton, category)?;
        Ok(Self {
            data: DataPaths::resolve(&args.data, file),
            out_dir: args
                .out
                .clone()
                .or_else(|| file.out_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            request: ViewRequest {
                selection,
                trim_outliers: args
                    .trim_choice()
                    .or(file.trim_outliers)
                    .unwrap_or(false),
            },
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
