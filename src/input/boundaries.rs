use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::input::InputError;
use crate::input::reader::open_maybe_gz;

/// Polygon outline of a canton. Every ring of every polygon is kept as a
/// list of `[lon, lat]` positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CantonBoundary {
    pub name: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

impl CantonBoundary {
    pub fn new(name: impl Into<String>, rings: Vec<Vec<[f64; 2]>>) -> Self {
        Self {
            name: name.into(),
            rings,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.rings.iter().flat_map(|ring| ring.iter().copied())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    boundaries: Vec<CantonBoundary>,
}

impl BoundarySet {
    pub fn new(boundaries: Vec<CantonBoundary>) -> Self {
        Self { boundaries }
    }

    /// First boundary whose name matches exactly.
    pub fn find(&self, canton: &str) -> Option<&CantonBoundary> {
        self.boundaries.iter().find(|b| b.name == canton)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CantonBoundary> {
        self.boundaries.iter()
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

fn feature_name(properties: &Map<String, Value>) -> Option<String> {
    for key in ["kan_name", "name"] {
        let name = match properties.get(key) {
            Some(Value::String(s)) => Some(s.as_str()),
            Some(Value::Array(items)) => items.first().and_then(Value::as_str),
            _ => None,
        };
        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            return Some(name.to_string());
        }
    }
    None
}

fn ring_positions(ring: Vec<Position>) -> Vec<[f64; 2]> {
    ring.into_iter()
        .filter(|p| p.len() >= 2)
        .map(|p| [p[0], p[1]])
        .collect()
}

fn geometry_rings(geometry: Geometry) -> Option<Vec<Vec<[f64; 2]>>> {
    match geometry {
        Geometry::Polygon { coordinates } => {
            Some(coordinates.into_iter().map(ring_positions).collect())
        }
        Geometry::MultiPolygon { coordinates } => Some(
            coordinates
                .into_iter()
                .flatten()
                .map(ring_positions)
                .collect(),
        ),
        Geometry::Unsupported => None,
    }
}

pub fn load_boundaries(path: &Path) -> Result<BoundarySet, InputError> {
    info!(path = %path.display(), "reading canton boundaries");
    let reader = open_maybe_gz(path)?;
    parse_boundaries(reader)
}

pub fn parse_boundaries<R: Read>(reader: R) -> Result<BoundarySet, InputError> {
    let collection: FeatureCollection = serde_json::from_reader(reader)?;

    let mut boundaries = Vec::with_capacity(collection.features.len());
    for (idx, feature) in collection.features.into_iter().enumerate() {
        let Some(name) = feature.properties.as_ref().and_then(feature_name) else {
            warn!(feature = idx, "boundary feature has no canton name; skipping");
            continue;
        };
        let Some(rings) = feature.geometry.and_then(geometry_rings) else {
            warn!(feature = idx, canton = %name, "boundary feature has no polygon geometry; skipping");
            continue;
        };
        if boundaries.iter().any(|b: &CantonBoundary| b.name == name) {
            warn!(canton = %name, "duplicate canton boundary; keeping first");
            continue;
        }
        boundaries.push(CantonBoundary::new(name, rings));
    }

    info!(boundaries = boundaries.len(), "canton boundaries loaded");
    Ok(BoundarySet::new(boundaries))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/boundaries.rs"]
mod tests;
