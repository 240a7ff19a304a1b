//! Engine-agnostic arena scene
//!
//! Plain data describing every object the arena needs. Nothing here talks
//! to an engine; see [`super::backend`] for that.

use glam::Vec3;
use serde::Serialize;

use crate::config::{ArenaConfig, PhysicsConfig};
use crate::error::Result;
use crate::layout::{ArenaLayout, WallPlacement, compute_layout};

/// Surface appearance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub name: String,
    /// Diffuse RGB
    pub diffuse: [f32; 3],
}

impl Material {
    pub fn new(name: impl Into<String>, diffuse: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            diffuse,
        }
    }
}

/// Collider primitive matching the visual shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColliderShape {
    Box,
    Sphere,
}

/// Rigid body attached to a visual object
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicsBody {
    pub shape: ColliderShape,
    /// 0 means static
    pub mass: f32,
    pub restitution: f32,
    pub friction: f32,
}

impl PhysicsBody {
    pub fn new(shape: ColliderShape, physics: &PhysicsConfig) -> Self {
        Self {
            shape,
            mass: physics.mass,
            restitution: physics.restitution,
            friction: physics.friction,
        }
    }
}

/// Axis-aligned box rotated about +Y
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxObject {
    pub name: String,
    /// (width, height, depth) before rotation
    pub size: Vec3,
    pub position: Vec3,
    pub yaw: f32,
    pub material: Material,
    pub body: PhysicsBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereObject {
    pub name: String,
    pub diameter: f32,
    pub position: Vec3,
    pub material: Material,
    pub body: PhysicsBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HemisphericLight {
    pub name: String,
    pub direction: Vec3,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitCamera {
    pub name: String,
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
    pub upper_beta_limit: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skybox {
    pub size: f32,
    pub texture: String,
}

/// Everything needed to build the arena in an engine
#[derive(Debug, Clone, Serialize)]
pub struct SceneDescription {
    pub gravity: Vec3,
    pub clear_color: [f32; 4],
    pub ground: BoxObject,
    pub layout: ArenaLayout,
    pub walls: Vec<BoxObject>,
    pub players: Vec<SphereObject>,
    pub light: HemisphericLight,
    pub camera: OrbitCamera,
    pub skybox: Skybox,
}

impl SceneDescription {
    /// Validate a config and derive the scene from it
    pub fn from_config(config: &ArenaConfig) -> Result<Self> {
        config.validate()?;
        let layout = compute_layout(&config.shape)?;

        let ground_material = Material::new("groundMaterial", config.ground.color);
        let ground = BoxObject {
            name: "ground".to_string(),
            size: Vec3::new(
                config.ground.width,
                config.ground.thickness,
                config.ground.depth,
            ),
            // Top face at y = 0
            position: Vec3::new(0.0, -config.ground.thickness / 2.0, 0.0),
            yaw: 0.0,
            material: ground_material.clone(),
            body: PhysicsBody::new(ColliderShape::Box, &config.ground.physics),
        };

        let walls = layout
            .iter()
            .enumerate()
            .map(|(i, placement)| wall_object(i, placement, config, &ground_material))
            .collect();

        let players = config
            .players
            .iter()
            .map(|p| SphereObject {
                name: p.name.clone(),
                diameter: p.diameter,
                position: p.position,
                material: Material::new(format!("{}Material", p.name), p.color),
                body: PhysicsBody::new(ColliderShape::Sphere, &p.physics),
            })
            .collect();

        let scene = Self {
            gravity: config.gravity,
            clear_color: config.clear_color,
            ground,
            layout,
            walls,
            players,
            light: HemisphericLight {
                name: "light".to_string(),
                direction: config.light.direction,
                intensity: config.light.intensity,
            },
            camera: OrbitCamera {
                name: "ArcRotateCamera".to_string(),
                alpha: config.camera.alpha,
                beta: config.camera.beta,
                radius: config.camera.radius,
                target: config.camera.target,
                upper_beta_limit: config.camera.upper_beta_limit,
            },
            skybox: Skybox {
                size: config.skybox.size,
                texture: config.skybox.texture.clone(),
            },
        };

        log::info!(
            "Arena scene described: {} walls, {} players",
            scene.walls.len(),
            scene.players.len()
        );
        Ok(scene)
    }
}

fn wall_object(
    index: usize,
    placement: &WallPlacement,
    config: &ArenaConfig,
    material: &Material,
) -> BoxObject {
    let height = config.walls.height;
    BoxObject {
        name: format!("wall{index}"),
        size: Vec3::new(placement.length, height, config.walls.thickness),
        position: Vec3::new(placement.center_x, height / 2.0, placement.center_z),
        yaw: placement.yaw,
        material: material.clone(),
        body: PhysicsBody::new(ColliderShape::Box, &config.walls.physics),
    }
}
