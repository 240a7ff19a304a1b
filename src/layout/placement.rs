//! Wall placements and the finished layout
//!
//! Ground-plane points are `Vec2`s holding world `(x, z)`.
//! A wall's long axis points along `(cos yaw, -sin yaw)`, which is where
//! a Y-up left-handed engine sends local +X after a yaw rotation.

use glam::Vec2;
use serde::Serialize;

/// One boundary wall segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallPlacement {
    /// World X of the wall's midpoint
    pub center_x: f32,
    /// World Z of the wall's midpoint
    pub center_z: f32,
    /// Rotation about +Y (radians)
    pub yaw: f32,
    /// Span along the wall's long axis
    pub length: f32,
}

impl WallPlacement {
    pub const fn new(center_x: f32, center_z: f32, yaw: f32, length: f32) -> Self {
        Self {
            center_x,
            center_z,
            yaw,
            length,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_z)
    }

    /// Unit vector along the wall's long axis
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.yaw.cos(), -self.yaw.sin())
    }

    /// Unit normal facing the arena center
    #[inline]
    pub fn inward_normal(&self) -> Vec2 {
        self.direction().perp()
    }

    /// Both ends of the segment, trailing end first
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let half = self.direction() * (self.length * 0.5);
        let c = self.center();
        (c - half, c + half)
    }
}

/// Ordered perimeter walls, one per side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArenaLayout {
    placements: Vec<WallPlacement>,
}

impl ArenaLayout {
    pub(crate) fn new(placements: Vec<WallPlacement>) -> Self {
        Self { placements }
    }

    pub fn placements(&self) -> &[WallPlacement] {
        &self.placements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WallPlacement> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total wall length
    pub fn perimeter(&self) -> f32 {
        self.placements.iter().map(|p| p.length).sum()
    }

    /// Distance between the nearest endpoints of each wall and the next,
    /// wrapping from the last wall back to the first
    pub fn seam_gaps(&self) -> Vec<f32> {
        let n = self.placements.len();
        (0..n)
            .map(|i| {
                let (a0, a1) = self.placements[i].endpoints();
                let (b0, b1) = self.placements[(i + 1) % n].endpoints();
                [
                    a0.distance(b0),
                    a0.distance(b1),
                    a1.distance(b0),
                    a1.distance(b1),
                ]
                .into_iter()
                .fold(f32::MAX, f32::min)
            })
            .collect()
    }

    /// Widest seam in the loop (0 for an empty layout)
    pub fn max_seam_gap(&self) -> f32 {
        self.seam_gaps().into_iter().fold(0.0, f32::max)
    }
}

impl<'a> IntoIterator for &'a ArenaLayout {
    type Item = &'a WallPlacement;
    type IntoIter = std::slice::Iter<'a, WallPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_direction_follows_yaw() {
        let w = WallPlacement::new(0.0, 0.0, 0.0, 10.0);
        assert!((w.direction() - Vec2::X).length() < 1e-6);

        let w = WallPlacement::new(0.0, 0.0, FRAC_PI_2, 10.0);
        assert!((w.direction() - Vec2::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_endpoints_span_length() {
        let w = WallPlacement::new(5.0, -3.0, 0.3, 12.0);
        let (a, b) = w.endpoints();
        assert!((a.distance(b) - 12.0).abs() < 1e-4);
        assert!(((a + b) * 0.5 - w.center()).length() < 1e-4);
    }

    #[test]
    fn test_inward_normal_points_at_origin() {
        // Wall on the +Z side facing back toward the center
        let w = WallPlacement::new(0.0, 50.0, PI, 10.0);
        assert!((w.inward_normal() - Vec2::new(0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_seam_gaps_of_closed_square() {
        let layout = ArenaLayout::new(vec![
            WallPlacement::new(0.0, 1.0, PI, 2.0),
            WallPlacement::new(1.0, 0.0, -FRAC_PI_2, 2.0),
            WallPlacement::new(0.0, -1.0, 0.0, 2.0),
            WallPlacement::new(-1.0, 0.0, FRAC_PI_2, 2.0),
        ]);
        assert_eq!(layout.seam_gaps().len(), 4);
        assert!(layout.max_seam_gap() < 1e-5);
        assert!((layout.perimeter() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_layout() {
        let layout = ArenaLayout::new(Vec::new());
        assert!(layout.is_empty());
        assert_eq!(layout.max_seam_gap(), 0.0);
    }
}
