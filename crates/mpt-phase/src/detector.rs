//! Detector aperture geometry and hit accounting.

use mpt_core::Point2;
use serde::{Deserialize, Serialize};

use crate::config::MeasurementParams;
use crate::simulate::SimulationResult;

/// Closed set of supported aperture shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetectorGeometry {
    /// Axis-aligned rectangular aperture.
    Square {
        /// Half-width of the aperture in metres.
        half_width: f64,
        /// Half-height of the aperture in metres.
        half_height: f64,
        /// Vertical offset of the aperture center in metres.
        center_offset: f64,
    },
    /// Circular aperture.
    Circle {
        /// Aperture radius in metres.
        radius: f64,
        /// Vertical offset of the aperture center in metres.
        center_offset: f64,
    },
}

impl DetectorGeometry {
    /// Builds the aperture from measurement parameters.
    ///
    /// An unrecognized geometry kind is recovered locally by falling back to
    /// the square aperture; only unknown parameter keys are an error, and
    /// those are rejected earlier at the parse boundary.
    pub fn from_measurement(params: &MeasurementParams) -> Self {
        match params.geometry.as_str() {
            "circle" => DetectorGeometry::Circle {
                radius: params.diameter / 2.0,
                center_offset: params.center_offset,
            },
            _ => DetectorGeometry::Square {
                half_width: params.width / 2.0,
                half_height: params.height / 2.0,
                center_offset: params.center_offset,
            },
        }
    }

    /// Membership predicate for a transported point.
    pub fn contains(&self, point: Point2) -> bool {
        match *self {
            DetectorGeometry::Square {
                half_width,
                half_height,
                center_offset,
            } => point.x.abs() <= half_width && (point.y - center_offset).abs() <= half_height,
            DetectorGeometry::Circle {
                radius,
                center_offset,
            } => {
                let dy = point.y - center_offset;
                point.x * point.x + dy * dy <= radius * radius
            }
        }
    }
}

/// Aggregate hit statistics for one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitCounts {
    /// Møller tracks landing inside the aperture.
    pub moller_hits: usize,
    /// Mott tracks landing inside the aperture.
    pub mott_hits: usize,
    /// Møller hits as a percentage of all Møller tracks; 0 when there are
    /// no tracks.
    pub moller_percent: f64,
    /// Mott hits as a percentage of all Mott tracks; 0 when there are no
    /// tracks.
    pub mott_percent: f64,
}

/// Counts the points inside the aperture in one pass.
pub fn count_hits(points: &[Point2], geometry: &DetectorGeometry) -> usize {
    points.iter().filter(|point| geometry.contains(**point)).count()
}

/// Evaluates a simulation result under the given measurement parameters.
pub fn evaluate(result: &SimulationResult, params: &MeasurementParams) -> HitCounts {
    let geometry = DetectorGeometry::from_measurement(params);
    let moller_hits = count_hits(&result.moller_points, &geometry);
    let mott_hits = count_hits(&result.mott_points, &geometry);
    HitCounts {
        moller_hits,
        mott_hits,
        moller_percent: percentage(moller_hits, result.moller_points.len()),
        mott_percent: percentage(mott_hits, result.mott_points.len()),
    }
}

fn percentage(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * hits as f64 / total as f64
    }
}
