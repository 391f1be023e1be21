//! Camera module: first-person camera, frustum builder and controller.
//!
//! Cameras are owned and driven by the caller. The frustum is a snapshot
//! derived from the camera state and can be handed to any culling step.

mod camera;
mod controller;
mod frustum;

pub use camera::{Camera, DEFAULT_PITCH, DEFAULT_YAW};
pub use controller::{CameraControllerFirstPerson, CameraMovement, PITCH_LIMIT};
pub use frustum::{
    CameraBasis, Frustum, Plane, Projection,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
