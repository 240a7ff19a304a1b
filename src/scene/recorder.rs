//! Recording backend
//!
//! Stores every backend call as a [`SceneCommand`]. Used by the CLI to dump
//! a scene as JSON and by tests to check what an engine would be asked to do.

use glam::Vec3;
use serde::Serialize;
use thiserror::Error;

use super::backend::SceneBackend;
use super::description::{HemisphericLight, Material, OrbitCamera, PhysicsBody, Skybox};

/// Opaque object id handed out by [`CommandRecorder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SceneCommand {
    SetEnvironment {
        gravity: Vec3,
        clear_color: [f32; 4],
    },
    CreateBox {
        id: ObjectId,
        name: String,
        size: Vec3,
    },
    CreateSphere {
        id: ObjectId,
        name: String,
        diameter: f32,
    },
    SetTransform {
        id: ObjectId,
        position: Vec3,
        yaw: f32,
    },
    SetMaterial {
        id: ObjectId,
        material: Material,
    },
    AttachBody {
        id: ObjectId,
        body: PhysicsBody,
    },
    AddLight {
        light: HemisphericLight,
    },
    AddCamera {
        camera: OrbitCamera,
    },
    SetSkybox {
        skybox: Skybox,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecorderError {
    #[error("unknown object id {0}")]
    UnknownObject(u32),
}

/// In-memory [`SceneBackend`]
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<SceneCommand>,
    next_id: u32,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<SceneCommand> {
        self.commands
    }

    /// Number of objects created so far
    pub fn object_count(&self) -> u32 {
        self.next_id
    }

    fn allocate(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check(&self, id: &ObjectId) -> Result<ObjectId, RecorderError> {
        if id.0 < self.next_id {
            Ok(*id)
        } else {
            Err(RecorderError::UnknownObject(id.0))
        }
    }
}

impl SceneBackend for CommandRecorder {
    type Handle = ObjectId;
    type Error = RecorderError;

    fn set_environment(&mut self, gravity: Vec3, clear_color: [f32; 4]) -> Result<(), Self::Error> {
        self.commands.push(SceneCommand::SetEnvironment {
            gravity,
            clear_color,
        });
        Ok(())
    }

    fn create_box(&mut self, name: &str, size: Vec3) -> Result<ObjectId, Self::Error> {
        let id = self.allocate();
        self.commands.push(SceneCommand::CreateBox {
            id,
            name: name.to_string(),
            size,
        });
        Ok(id)
    }

    fn create_sphere(&mut self, name: &str, diameter: f32) -> Result<ObjectId, Self::Error> {
        let id = self.allocate();
        self.commands.push(SceneCommand::CreateSphere {
            id,
            name: name.to_string(),
            diameter,
        });
        Ok(id)
    }

    fn set_transform(
        &mut self,
        handle: &ObjectId,
        position: Vec3,
        yaw: f32,
    ) -> Result<(), Self::Error> {
        let id = self.check(handle)?;
        self.commands.push(SceneCommand::SetTransform { id, position, yaw });
        Ok(())
    }

    fn set_material(&mut self, handle: &ObjectId, material: &Material) -> Result<(), Self::Error> {
        let id = self.check(handle)?;
        self.commands.push(SceneCommand::SetMaterial {
            id,
            material: material.clone(),
        });
        Ok(())
    }

    fn attach_body(&mut self, handle: &ObjectId, body: &PhysicsBody) -> Result<(), Self::Error> {
        let id = self.check(handle)?;
        self.commands.push(SceneCommand::AttachBody { id, body: *body });
        Ok(())
    }

    fn add_light(&mut self, light: &HemisphericLight) -> Result<(), Self::Error> {
        self.commands.push(SceneCommand::AddLight {
            light: light.clone(),
        });
        Ok(())
    }

    fn add_camera(&mut self, camera: &OrbitCamera) -> Result<(), Self::Error> {
        self.commands.push(SceneCommand::AddCamera {
            camera: camera.clone(),
        });
        Ok(())
    }

    fn set_skybox(&mut self, skybox: &Skybox) -> Result<(), Self::Error> {
        self.commands.push(SceneCommand::SetSkybox {
            skybox: skybox.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use crate::scene::build_scene;

    #[test]
    fn test_recorded_default_scene() {
        let mut recorder = CommandRecorder::new();
        let scene = build_scene(&ArenaConfig::default(), &mut recorder).unwrap();
        let commands = recorder.commands();

        assert!(matches!(commands[0], SceneCommand::SetEnvironment { .. }));

        let boxes: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                SceneCommand::CreateBox { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        // ground + one per wall
        assert_eq!(boxes.len(), 1 + scene.walls.len());
        assert_eq!(boxes[0], "ground");
        assert_eq!(boxes[1], "wall0");

        let spheres = commands
            .iter()
            .filter(|c| matches!(c, SceneCommand::CreateSphere { .. }))
            .count();
        assert_eq!(spheres, 2);

        let bodies = commands
            .iter()
            .filter(|c| matches!(c, SceneCommand::AttachBody { .. }))
            .count();
        assert_eq!(bodies as u32, recorder.object_count());

        assert_eq!(
            commands
                .iter()
                .filter(|c| matches!(c, SceneCommand::SetSkybox { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_unknown_handle_is_rejected() {
        let mut recorder = CommandRecorder::new();
        let err = recorder
            .set_transform(&ObjectId(3), Vec3::ZERO, 0.0)
            .unwrap_err();
        assert_eq!(err, RecorderError::UnknownObject(3));
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_commands_serialize_with_op_tag() {
        let mut recorder = CommandRecorder::new();
        recorder.create_sphere("player1", 2.0).unwrap();
        let json = serde_json::to_string(recorder.commands()).unwrap();
        assert!(json.contains(r#""op":"create_sphere""#));
        assert!(json.contains(r#""id":0"#));
    }
}
