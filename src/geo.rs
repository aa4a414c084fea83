use serde::Serialize;
use thiserror::Error;

use crate::input::{BoundarySet, CantonBoundary};

/// Empirically tuned map zoom: `ZOOM_BASE + ZOOM_SCALE * log10(1 / span)`.
pub const ZOOM_BASE: f64 = 7.8;
pub const ZOOM_SCALE: f64 = 3.2;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("no boundary found for canton {0}")]
    UnknownCanton(String),
    #[error("boundary of canton {0} has no coordinates")]
    EmptyGeometry(String),
    #[error("boundary of canton {0} has a zero-extent bounding box")]
    DegenerateGeometry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Box around `[lon, lat]` positions; non-finite positions are ignored.
    pub fn of_positions(positions: impl IntoIterator<Item = [f64; 2]>) -> Option<Self> {
        let mut bbox: Option<BoundingBox> = None;
        for [lon, lat] in positions {
            if !lon.is_finite() || !lat.is_finite() {
                continue;
            }
            bbox = Some(match bbox {
                None => BoundingBox {
                    lat_min: lat,
                    lat_max: lat,
                    lon_min: lon,
                    lon_max: lon,
                },
                Some(b) => BoundingBox {
                    lat_min: b.lat_min.min(lat),
                    lat_max: b.lat_max.max(lat),
                    lon_min: b.lon_min.min(lon),
                    lon_max: b.lon_max.max(lon),
                },
            });
        }
        bbox
    }

    /// `(lat, lon)` midpoint.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }

    pub fn span(&self) -> f64 {
        (self.lat_max - self.lat_min)
            .abs()
            .max((self.lon_max - self.lon_min).abs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub lat_center: f64,
    pub lon_center: f64,
    pub zoom: f64,
}

impl MapView {
    /// Whole-country view used when no canton is selected.
    pub fn national() -> Self {
        Self {
            lat_center: 46.8,
            lon_center: 8.3,
            zoom: 6.4,
        }
    }
}

/// `None` when the span is zero or not finite.
pub fn zoom_for_span(span: f64) -> Option<f64> {
    if span > 0.0 && span.is_finite() {
        Some(ZOOM_BASE + ZOOM_SCALE * (1.0 / span).log10())
    } else {
        None
    }
}

pub fn center_and_zoom(boundary: &CantonBoundary) -> Result<MapView, GeoError> {
    let bbox = BoundingBox::of_positions(boundary.positions())
        .ok_or_else(|| GeoError::EmptyGeometry(boundary.name.clone()))?;
    let zoom = zoom_for_span(bbox.span())
        .ok_or_else(|| GeoError::DegenerateGeometry(boundary.name.clone()))?;
    let (lat_center, lon_center) = bbox.center();
    Ok(MapView {
        lat_center,
        lon_center,
        zoom,
    })
}

pub fn locate(boundaries: &BoundarySet, canton: &str) -> Result<MapView, GeoError> {
    let boundary = boundaries
        .find(canton)
        .ok_or_else(|| GeoError::UnknownCanton(canton.to_string()))?;
    center_and_zoom(boundary)
}

#[cfg(test)]
#[path = "../tests/src_inline/geo.rs"]
mod tests;
