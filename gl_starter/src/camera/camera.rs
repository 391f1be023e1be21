/// Camera - first-person perspective camera.
///
/// Orientation is stored as yaw/pitch Euler angles (degrees). The
/// front/right/up basis and the frustum are derived from them and kept
/// current by every mutator, so readers never see a stale basis.

use glam::{Mat4, Vec3};

use super::frustum::{CameraBasis, Frustum, Projection};

/// Yaw of a camera looking down -Z
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;

/// First-person camera with a cached basis and frustum
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    /// Degrees
    yaw: f32,
    /// Degrees
    pitch: f32,
    projection: Projection,
    frustum: Frustum,
}

/// Width / height, or 1.0 for a degenerate (minimized) viewport
fn aspect_of(width: f32, height: f32) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

impl Camera {
    /// Camera at `position` looking down -Z, with the default projection
    /// for a viewport of the given size.
    pub fn new(position: Vec3, viewport_width: f32, viewport_height: f32) -> Self {
        let projection = Projection::new(aspect_of(viewport_width, viewport_height));
        let basis = CameraBasis {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        let mut camera = Self {
            position,
            front: basis.front,
            right: basis.right,
            up: basis.up,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            projection,
            frustum: Frustum::from_basis(&basis, &projection),
        };
        camera.update_camera_vectors();
        camera
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Position and orientation as one value.
    pub fn basis(&self) -> CameraBasis {
        CameraBasis {
            position: self.position,
            front: self.front,
            right: self.right,
            up: self.up,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Frustum of the current position, orientation and projection.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// View-to-clip matrix, OpenGL depth range [-1, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.projection.fov_y_degrees.to_radians(),
            self.projection.aspect_ratio,
            self.projection.near,
            self.projection.far,
        )
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.rebuild_frustum();
    }

    /// Set yaw in degrees.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update_camera_vectors();
    }

    /// Set pitch in degrees. No clamping happens here; see
    /// `CameraControllerFirstPerson` for the ±89° limit.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
        self.update_camera_vectors();
    }

    /// Set yaw and pitch (degrees) with a single basis update.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_camera_vectors();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.projection.aspect_ratio = aspect_ratio;
        self.rebuild_frustum();
    }

    /// Follow a framebuffer resize. A zero-sized viewport (minimized
    /// window) keeps the current aspect ratio.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            crate::starter_trace!("glstarter::camera", "Ignoring {}x{} viewport", width, height);
            return;
        }
        self.set_aspect_ratio(width / height);
    }

    /// Recompute front/right/up from yaw and pitch, then the frustum.
    pub fn update_camera_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();

        self.rebuild_frustum();
    }

    fn rebuild_frustum(&mut self) {
        self.frustum = Frustum::from_basis(&self.basis(), &self.projection);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
