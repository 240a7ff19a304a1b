//! Perimeter wall layout
//!
//! Walls are generated in perimeter order so that each one shares a corner
//! with the next and the last closes the loop back to the first.

use std::f32::consts::{FRAC_PI_2, PI};
use std::f64::consts::{PI as PI_F64, TAU as TAU_F64};

use super::placement::{ArenaLayout, WallPlacement};
use super::shape::{ShapeSpec, chord_length};
use crate::error::Result;
use crate::ground_point;

/// Compute the perimeter walls for a floor shape
pub fn compute_layout(shape: &ShapeSpec) -> Result<ArenaLayout> {
    shape.validate()?;

    let placements = match *shape {
        ShapeSpec::Rectangle { width, depth } => rectangle_walls(width, depth),
        ShapeSpec::RegularPolygon {
            side_count,
            radius,
            padding_length,
        } => polygon_walls(side_count, radius, padding_length),
    };

    log::debug!(
        "Computed arena layout: {} walls for {:?}",
        placements.len(),
        shape
    );
    Ok(ArenaLayout::new(placements))
}

/// +Z, +X, -Z, -X sides in that order
fn rectangle_walls(width: f32, depth: f32) -> Vec<WallPlacement> {
    let half_w = width / 2.0;
    let half_d = depth / 2.0;
    vec![
        WallPlacement::new(0.0, half_d, PI, width),
        WallPlacement::new(half_w, 0.0, -FRAC_PI_2, depth),
        WallPlacement::new(0.0, -half_d, 0.0, width),
        WallPlacement::new(-half_w, 0.0, FRAC_PI_2, depth),
    ]
}

/// Angles are stepped in f64 so very high side counts keep every wall on
/// its own angle.
fn polygon_walls(side_count: u32, radius: f32, padding_length: f32) -> Vec<WallPlacement> {
    let angle_step = TAU_F64 / side_count as f64;
    // All sides are congruent
    let side_length = chord_length(side_count, radius) + padding_length;

    (0..side_count)
        .map(|i| {
            let angle = i as f64 * angle_step;
            let center = ground_point(radius, angle);
            WallPlacement::new(center.x, center.y, (angle + PI_F64) as f32, side_length)
        })
        .collect()
}
