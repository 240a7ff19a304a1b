//! Octa Arena - perimeter layout and scene description for a walled 3D arena
//!
//! Core modules:
//! - `layout`: Pure wall-layout geometry (rectangle and regular polygon floors)
//! - `config`: Data-driven arena settings with JSON loading
//! - `scene`: Engine-agnostic scene description and the backend trait engines implement
//! - `mesh`: Box geometry for wall placements

pub mod config;
pub mod error;
pub mod layout;
pub mod mesh;
pub mod scene;

pub use config::ArenaConfig;
pub use error::{ArenaError, Result};
pub use layout::{ArenaLayout, ShapeSpec, WallPlacement, compute_layout};
pub use scene::{CommandRecorder, SceneBackend, SceneDescription, build_scene};

use glam::Vec2;

/// Arena configuration constants
pub mod consts {
    /// Wall count of the default arena
    pub const ARENA_SIDES: u32 = 8;
    /// Center-to-wall-midpoint distance of the default arena
    pub const ARENA_RADIUS: f32 = 50.0;

    /// Ground slab defaults (top face at y = 0)
    pub const GROUND_WIDTH: f32 = 150.0;
    pub const GROUND_DEPTH: f32 = 200.0;
    pub const GROUND_THICKNESS: f32 = 1.0;

    /// Wall defaults
    pub const WALL_HEIGHT: f32 = 5.0;
    pub const WALL_THICKNESS: f32 = 1.0;

    /// Player sphere defaults
    pub const PLAYER_DIAMETER: f32 = 2.0;
    pub const PLAYER_SPAWN_OFFSET: f32 = 10.0;

    /// Standard gravity (m/s², pointing down)
    pub const GRAVITY: f32 = 9.81;

    /// Skybox cube edge length
    pub const SKYBOX_SIZE: f32 = 1000.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Ground-plane point at distance `r` and angle `theta`, measured from +Z
/// toward +X. The returned vector holds world `(x, z)`.
///
/// The angle is taken in f64 so closely spaced angles stay distinct.
#[inline]
pub fn ground_point(r: f32, theta: f64) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    let r = r as f64;
    Vec2::new((r * sin) as f32, (r * cos) as f32)
}
