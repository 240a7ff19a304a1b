//! Floor shape parameters
//!
//! A floor is either an axis-aligned rectangle or a regular polygon whose
//! wall midpoints sit on a circle of the given radius.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_RADIUS, ARENA_SIDES};
use crate::error::{ArenaError, Result};

/// Shape of the playable floor the perimeter walls enclose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Axis-aligned rectangle centered on the origin
    Rectangle {
        /// Extent along X
        width: f32,
        /// Extent along Z
        depth: f32,
    },
    /// Regular polygon centered on the origin
    RegularPolygon {
        /// Number of sides (and walls)
        side_count: u32,
        /// Distance from the center to each wall's midpoint
        radius: f32,
        /// Extra length added to every wall to hide corner seams
        #[serde(default)]
        padding_length: f32,
    },
}

impl Default for ShapeSpec {
    fn default() -> Self {
        Self::octagon(ARENA_RADIUS)
    }
}

impl ShapeSpec {
    pub fn rectangle(width: f32, depth: f32) -> Self {
        ShapeSpec::Rectangle { width, depth }
    }

    pub fn regular_polygon(side_count: u32, radius: f32, padding_length: f32) -> Self {
        ShapeSpec::RegularPolygon {
            side_count,
            radius,
            padding_length,
        }
    }

    /// Eight-sided arena with seams closed exactly
    pub fn octagon(radius: f32) -> Self {
        Self::regular_polygon(ARENA_SIDES, radius, closing_padding(ARENA_SIDES, radius))
    }

    /// Number of walls this shape produces
    pub fn wall_count(&self) -> usize {
        match *self {
            ShapeSpec::Rectangle { .. } => 4,
            ShapeSpec::RegularPolygon { side_count, .. } => side_count as usize,
        }
    }

    /// Check the layout preconditions
    pub fn validate(&self) -> Result<()> {
        match *self {
            ShapeSpec::Rectangle { width, depth } => {
                ensure_positive("width", width)?;
                ensure_positive("depth", depth)?;
            }
            ShapeSpec::RegularPolygon {
                side_count,
                radius,
                padding_length,
            } => {
                if side_count < 3 {
                    return Err(ArenaError::invalid_shape(format!(
                        "side_count must be at least 3, got {side_count}"
                    )));
                }
                ensure_positive("radius", radius)?;
                if !padding_length.is_finite() || padding_length < 0.0 {
                    return Err(ArenaError::invalid_shape(format!(
                        "padding_length must be a finite value >= 0, got {padding_length}"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn ensure_positive(name: &str, value: f32) -> Result<()> {
    // Written so NaN fails too
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArenaError::invalid_shape(format!(
            "{name} must be a finite value > 0, got {value}"
        )))
    }
}

/// Chord length `2·r·sin(π/n)` of a regular polygon
#[inline]
pub fn chord_length(side_count: u32, radius: f32) -> f32 {
    2.0 * radius * (PI / side_count as f32).sin()
}

/// Padding that stretches each chord to the full edge of a polygon whose
/// apothem is `radius`, so consecutive walls meet exactly at the corners.
#[inline]
pub fn closing_padding(side_count: u32, radius: f32) -> f32 {
    let half_angle = PI / side_count as f32;
    2.0 * radius * (half_angle.tan() - half_angle.sin())
}
