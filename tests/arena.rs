//! End-to-end arena setup through the public API

use std::f32::consts::PI;

use glam::Vec3;
use octa_arena::scene::{
    HemisphericLight, Material, OrbitCamera, PhysicsBody, SceneCommand, SceneError, Skybox,
};
use octa_arena::{
    ArenaConfig, ArenaError, CommandRecorder, SceneBackend, SceneDescription, ShapeSpec,
    build_scene, compute_layout,
};

/// Backend that refuses to create more than `limit` objects
struct CappedBackend {
    created: usize,
    limit: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("object limit reached")]
struct LimitReached;

impl SceneBackend for CappedBackend {
    type Handle = usize;
    type Error = LimitReached;

    fn set_environment(&mut self, _: Vec3, _: [f32; 4]) -> Result<(), LimitReached> {
        Ok(())
    }

    fn create_box(&mut self, _: &str, _: Vec3) -> Result<usize, LimitReached> {
        self.create()
    }

    fn create_sphere(&mut self, _: &str, _: f32) -> Result<usize, LimitReached> {
        self.create()
    }

    fn set_transform(&mut self, _: &usize, _: Vec3, _: f32) -> Result<(), LimitReached> {
        Ok(())
    }

    fn set_material(&mut self, _: &usize, _: &Material) -> Result<(), LimitReached> {
        Ok(())
    }

    fn attach_body(&mut self, _: &usize, _: &PhysicsBody) -> Result<(), LimitReached> {
        Ok(())
    }

    fn add_light(&mut self, _: &HemisphericLight) -> Result<(), LimitReached> {
        Ok(())
    }

    fn add_camera(&mut self, _: &OrbitCamera) -> Result<(), LimitReached> {
        Ok(())
    }

    fn set_skybox(&mut self, _: &Skybox) -> Result<(), LimitReached> {
        Ok(())
    }
}

impl CappedBackend {
    fn create(&mut self) -> Result<usize, LimitReached> {
        if self.created == self.limit {
            return Err(LimitReached);
        }
        self.created += 1;
        Ok(self.created - 1)
    }
}

#[test]
fn rectangle_arena_from_json() {
    let json = r#"{"shape": {"kind": "rectangle", "width": 150, "depth": 200}}"#;
    let config = ArenaConfig::from_json(json).unwrap();
    let mut recorder = CommandRecorder::new();
    let scene = build_scene(&config, &mut recorder).unwrap();

    assert_eq!(scene.walls.len(), 4);
    let lengths: Vec<f32> = scene.walls.iter().map(|w| w.size.x).collect();
    assert_eq!(lengths, vec![150.0, 200.0, 150.0, 200.0]);
    assert!(scene.layout.max_seam_gap() < 1e-3);
}

#[test]
fn walls_are_placed_and_rotated_like_the_layout() {
    let config = ArenaConfig::default();
    let layout = compute_layout(&config.shape).unwrap();

    let mut recorder = CommandRecorder::new();
    build_scene(&config, &mut recorder).unwrap();

    let transforms: Vec<(Vec3, f32)> = recorder
        .commands()
        .iter()
        .filter_map(|c| match c {
            SceneCommand::SetTransform { position, yaw, .. } => Some((*position, *yaw)),
            _ => None,
        })
        .collect();

    // ground, two players, then walls
    let walls = &transforms[3..];
    assert_eq!(walls.len(), layout.len());
    for ((position, yaw), placement) in walls.iter().zip(layout.iter()) {
        assert_eq!(position.x, placement.center_x);
        assert_eq!(position.z, placement.center_z);
        assert_eq!(*yaw, placement.yaw);
    }

    assert!((walls[0].0.z - 50.0).abs() < 1e-3);
    assert!((walls[0].1 - PI).abs() < 1e-5);
}

#[test]
fn invalid_shape_builds_nothing() {
    let config = ArenaConfig::with_shape(ShapeSpec::regular_polygon(2, 50.0, 0.0));
    let mut recorder = CommandRecorder::new();
    let err = build_scene(&config, &mut recorder).unwrap_err();

    assert!(matches!(
        err,
        SceneError::Arena(ArenaError::InvalidShapeConfiguration(_))
    ));
    assert!(recorder.commands().is_empty());
}

#[test]
fn backend_failure_is_reported() {
    let scene = SceneDescription::from_config(&ArenaConfig::default()).unwrap();
    let mut backend = CappedBackend {
        created: 0,
        limit: 4,
    };
    let err = scene.instantiate(&mut backend).unwrap_err();
    assert!(matches!(err, SceneError::Backend(LimitReached)));
    assert_eq!(backend.created, 4);
}

#[test]
fn scene_is_reproducible() {
    let config = ArenaConfig::default();

    let mut first = CommandRecorder::new();
    build_scene(&config, &mut first).unwrap();
    let mut second = CommandRecorder::new();
    build_scene(&config, &mut second).unwrap();

    assert_eq!(first.into_commands(), second.into_commands());
}
