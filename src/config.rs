//! Arena configuration
//!
//! Every tunable of the arena scene in one serde struct. `Default` is the
//! stock octagon arena; a JSON file can override any subset of fields.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ArenaError, Result};
use crate::layout::ShapeSpec;

/// Rigid-body parameters handed to the physics engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// 0 means static (infinite mass)
    pub mass: f32,
    pub restitution: f32,
    pub friction: f32,
}

impl PhysicsConfig {
    pub const fn fixed(restitution: f32, friction: f32) -> Self {
        Self {
            mass: 0.0,
            restitution,
            friction,
        }
    }

    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    fn validate(&self, field: &'static str) -> Result<()> {
        if !(self.mass.is_finite() && self.mass >= 0.0) {
            return Err(ArenaError::invalid_config(field, "mass must be >= 0"));
        }
        if !(self.restitution.is_finite() && self.restitution >= 0.0) {
            return Err(ArenaError::invalid_config(field, "restitution must be >= 0"));
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(ArenaError::invalid_config(field, "friction must be >= 0"));
        }
        Ok(())
    }
}

/// Floor slab under the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub width: f32,
    pub depth: f32,
    pub thickness: f32,
    /// Diffuse RGB, shared with the walls
    pub color: [f32; 3],
    pub physics: PhysicsConfig,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: GROUND_WIDTH,
            depth: GROUND_DEPTH,
            thickness: GROUND_THICKNESS,
            color: [0.5, 0.5, 0.5],
            physics: PhysicsConfig::fixed(0.5, 0.5),
        }
    }
}

/// Perimeter wall dimensions (length comes from the layout)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub height: f32,
    pub thickness: f32,
    pub physics: PhysicsConfig,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            height: WALL_HEIGHT,
            thickness: WALL_THICKNESS,
            physics: PhysicsConfig::fixed(0.5, 0.8),
        }
    }
}

/// A player sphere
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub diameter: f32,
    pub position: Vec3,
    pub color: [f32; 3],
    pub physics: PhysicsConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new("player", 0.0, [1.0, 1.0, 1.0])
    }
}

impl PlayerConfig {
    fn new(name: &str, x: f32, color: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            diameter: PLAYER_DIAMETER,
            position: Vec3::new(x, PLAYER_DIAMETER / 2.0, 0.0),
            color,
            physics: PhysicsConfig {
                mass: 1.0,
                restitution: 0.9,
                friction: 0.5,
            },
        }
    }
}

/// Hemispheric ambient light
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub direction: Vec3,
    pub intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: Vec3::new(1.0, 1.0, 0.0),
            intensity: 0.9,
        }
    }
}

/// Orbit camera around a target point (angles in radians)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Longitudinal rotation
    pub alpha: f32,
    /// Latitudinal rotation
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
    /// Keeps the camera above the ground plane
    pub upper_beta_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            alpha: 45f32.to_radians(),
            beta: 60f32.to_radians(),
            radius: 200.0,
            target: Vec3::ZERO,
            upper_beta_limit: PI / 2.2,
        }
    }
}

/// Cube-mapped sky
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyboxConfig {
    pub size: f32,
    /// Cube texture path prefix, resolved by the engine
    pub texture: String,
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        Self {
            size: SKYBOX_SIZE,
            texture: "textures/skybox/skybox".to_string(),
        }
    }
}

/// Complete arena settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Wall footprint
    pub shape: ShapeSpec,
    pub ground: GroundConfig,
    pub walls: WallConfig,
    pub players: Vec<PlayerConfig>,
    pub light: LightConfig,
    pub camera: CameraConfig,
    pub skybox: SkyboxConfig,
    pub gravity: Vec3,
    /// RGBA
    pub clear_color: [f32; 4],
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            shape: ShapeSpec::default(),
            ground: GroundConfig::default(),
            walls: WallConfig::default(),
            players: vec![
                PlayerConfig::new("player1", -PLAYER_SPAWN_OFFSET, [0.0, 0.0, 1.0]),
                PlayerConfig::new("player2", PLAYER_SPAWN_OFFSET, [1.0, 0.0, 0.0]),
            ],
            light: LightConfig::default(),
            camera: CameraConfig::default(),
            skybox: SkyboxConfig::default(),
            gravity: Vec3::new(0.0, -GRAVITY, 0.0),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl ArenaConfig {
    /// Create a config with a different floor shape and stock everything else
    pub fn with_shape(shape: ShapeSpec) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded arena config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every dimension before anything is handed to an engine
    pub fn validate(&self) -> Result<()> {
        self.shape.validate()?;

        ensure_positive("ground.width", self.ground.width)?;
        ensure_positive("ground.depth", self.ground.depth)?;
        ensure_positive("ground.thickness", self.ground.thickness)?;
        self.ground.physics.validate("ground.physics")?;

        ensure_positive("walls.height", self.walls.height)?;
        ensure_positive("walls.thickness", self.walls.thickness)?;
        self.walls.physics.validate("walls.physics")?;

        for player in &self.players {
            ensure_positive("players.diameter", player.diameter)?;
            if !player.position.is_finite() {
                return Err(ArenaError::invalid_config("players.position", "must be finite"));
            }
            player.physics.validate("players.physics")?;
        }

        if !(self.light.intensity.is_finite() && self.light.intensity >= 0.0) {
            return Err(ArenaError::invalid_config("light.intensity", "must be >= 0"));
        }
        let len_sq = self.light.direction.length_squared();
        if !(len_sq.is_finite() && len_sq > 0.0) {
            return Err(ArenaError::invalid_config(
                "light.direction",
                "must be finite and non-zero",
            ));
        }

        ensure_positive("camera.radius", self.camera.radius)?;
        ensure_finite("camera.alpha", self.camera.alpha)?;
        ensure_finite("camera.beta", self.camera.beta)?;
        ensure_finite("camera.upper_beta_limit", self.camera.upper_beta_limit)?;
        if !self.camera.target.is_finite() {
            return Err(ArenaError::invalid_config("camera.target", "must be finite"));
        }

        ensure_positive("skybox.size", self.skybox.size)?;
        if !self.gravity.is_finite() {
            return Err(ArenaError::invalid_config("gravity", "must be finite"));
        }
        if !self.clear_color.iter().all(|c| c.is_finite()) {
            return Err(ArenaError::invalid_config("clear_color", "must be finite"));
        }

        Ok(())
    }
}

fn ensure_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArenaError::invalid_config(field, format!("must be > 0, got {value}")))
    }
}

fn ensure_finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ArenaError::invalid_config(field, format!("must be finite, got {value}")))
    }
}
