//! Arena scene assembly
//!
//! The arena is first described as plain data, then handed to whatever
//! engine implements [`SceneBackend`]. The engine context is an explicit
//! value owned by the caller; the layout code never sees it.

pub mod backend;
pub mod description;
pub mod recorder;

pub use backend::{SceneBackend, SceneError, build_scene};
pub use description::{
    BoxObject, ColliderShape, HemisphericLight, Material, OrbitCamera, PhysicsBody,
    SceneDescription, Skybox, SphereObject,
};
pub use recorder::{CommandRecorder, ObjectId, RecorderError, SceneCommand};
