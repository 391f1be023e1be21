/// First-person controller: keyboard translation and mouse look.
///
/// The controller holds only tuning values; the camera it drives is
/// passed in on every call.

use super::camera::Camera;

/// Pitch limit in degrees, keeps the view from flipping over the poles
pub const PITCH_LIMIT: f32 = 89.0;

/// Movement direction, relative to the camera basis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraControllerFirstPerson {
    /// World units per second
    pub movement_speed: f32,
    /// Degrees per pixel of mouse movement
    pub mouse_sensitivity: f32,
}

impl CameraControllerFirstPerson {
    pub fn new(movement_speed: f32, mouse_sensitivity: f32) -> Self {
        Self { movement_speed, mouse_sensitivity }
    }

    /// Move along front/right for `delta_time` seconds.
    pub fn process_keyboard(&self, camera: &mut Camera, movement: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match movement {
            CameraMovement::Forward => camera.front() * velocity,
            CameraMovement::Backward => -camera.front() * velocity,
            CameraMovement::Left => -camera.right() * velocity,
            CameraMovement::Right => camera.right() * velocity,
        };
        camera.set_position(camera.position() + offset);
    }

    /// Turn by a mouse offset in pixels. Positive `y_offset` looks up.
    ///
    /// With `constrain_pitch`, the resulting pitch is clamped to
    /// [-89°, 89°] whatever the offset.
    pub fn process_mouse_movement(&self, camera: &mut Camera, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        let yaw = camera.yaw() + x_offset * self.mouse_sensitivity;
        let mut pitch = camera.pitch() + y_offset * self.mouse_sensitivity;
        if constrain_pitch {
            pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        camera.set_orientation(yaw, pitch);
    }
}

impl Default for CameraControllerFirstPerson {
    fn default() -> Self {
        Self::new(2.5, 0.1)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
