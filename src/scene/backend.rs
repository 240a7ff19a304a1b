//! Engine boundary
//!
//! A rendering/physics engine implements [`SceneBackend`]; the arena is
//! built by calling it in a fixed order. The engine owns its render loop.

use glam::Vec3;
use thiserror::Error;

use super::description::{
    BoxObject, HemisphericLight, Material, OrbitCamera, PhysicsBody, SceneDescription, Skybox,
    SphereObject,
};
use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// Capabilities the arena needs from a 3D/physics engine
pub trait SceneBackend {
    /// Engine-side reference to a created object
    type Handle;
    type Error: std::error::Error + 'static;

    fn set_environment(&mut self, gravity: Vec3, clear_color: [f32; 4]) -> Result<(), Self::Error>;

    /// Create a box mesh of `size` = (width, height, depth)
    fn create_box(&mut self, name: &str, size: Vec3) -> Result<Self::Handle, Self::Error>;

    fn create_sphere(&mut self, name: &str, diameter: f32) -> Result<Self::Handle, Self::Error>;

    /// Place an object and rotate it about +Y
    fn set_transform(
        &mut self,
        handle: &Self::Handle,
        position: Vec3,
        yaw: f32,
    ) -> Result<(), Self::Error>;

    fn set_material(
        &mut self,
        handle: &Self::Handle,
        material: &Material,
    ) -> Result<(), Self::Error>;

    /// Attach a rigid-body collider; mass 0 means static
    fn attach_body(
        &mut self,
        handle: &Self::Handle,
        body: &PhysicsBody,
    ) -> Result<(), Self::Error>;

    fn add_light(&mut self, light: &HemisphericLight) -> Result<(), Self::Error>;

    fn add_camera(&mut self, camera: &OrbitCamera) -> Result<(), Self::Error>;

    fn set_skybox(&mut self, skybox: &Skybox) -> Result<(), Self::Error>;
}

/// Failure while building a scene in an engine
#[derive(Error, Debug)]
pub enum SceneError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error("scene backend failed: {0}")]
    Backend(#[source] E),
}

impl SceneDescription {
    /// Create every object of the scene through `backend`
    pub fn instantiate<B: SceneBackend>(
        &self,
        backend: &mut B,
    ) -> Result<(), SceneError<B::Error>> {
        backend
            .set_environment(self.gravity, self.clear_color)
            .map_err(SceneError::Backend)?;

        spawn_box(backend, &self.ground).map_err(SceneError::Backend)?;
        backend.add_light(&self.light).map_err(SceneError::Backend)?;
        backend
            .add_camera(&self.camera)
            .map_err(SceneError::Backend)?;

        for player in &self.players {
            spawn_sphere(backend, player).map_err(SceneError::Backend)?;
        }

        backend
            .set_skybox(&self.skybox)
            .map_err(SceneError::Backend)?;

        for wall in &self.walls {
            spawn_box(backend, wall).map_err(SceneError::Backend)?;
        }

        log::debug!("Arena scene instantiated ({} walls)", self.walls.len());
        Ok(())
    }
}

/// Describe the arena for `config` and build it through `backend`
pub fn build_scene<B: SceneBackend>(
    config: &ArenaConfig,
    backend: &mut B,
) -> Result<SceneDescription, SceneError<B::Error>> {
    let scene = SceneDescription::from_config(config)?;
    scene.instantiate(backend)?;
    Ok(scene)
}

fn spawn_box<B: SceneBackend>(backend: &mut B, object: &BoxObject) -> Result<B::Handle, B::Error> {
    let handle = backend.create_box(&object.name, object.size)?;
    backend.set_transform(&handle, object.position, object.yaw)?;
    backend.set_material(&handle, &object.material)?;
    backend.attach_body(&handle, &object.body)?;
    Ok(handle)
}

fn spawn_sphere<B: SceneBackend>(
    backend: &mut B,
    object: &SphereObject,
) -> Result<B::Handle, B::Error> {
    let handle = backend.create_sphere(&object.name, object.diameter)?;
    backend.set_transform(&handle, object.position, 0.0)?;
    backend.set_material(&handle, &object.material)?;
    backend.attach_body(&handle, &object.body)?;
    Ok(handle)
}
