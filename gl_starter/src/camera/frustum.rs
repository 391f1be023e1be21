/// Frustum - six clipping planes derived from a camera basis.
///
/// Each plane stores a unit normal pointing into the visible volume and
/// `distance = dot(normal, point_on_plane)`. A point P is inside the
/// frustum when `dot(normal, P) - distance >= 0` for all six planes.
///
/// The frustum is a plain snapshot: it is rebuilt from the camera state
/// and never edited in place, so any culling routine can consume it
/// (or a serialized copy of it) without touching the camera.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Frustum plane indices in `Frustum::planes()`
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Oriented plane: unit normal + signed distance from the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Plane through `point` with the direction of `normal`.
    ///
    /// `normal` does not need to be unit length; it is normalized here.
    /// A zero normal yields a zero plane that contains every point.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    /// Signed distance of `point` to the plane, positive on the normal side.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Position and orthonormal orientation of a viewer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraBasis {
    pub position: Vec3,
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Perspective parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view, in degrees
    pub fov_y_degrees: f32,
    /// Width / height
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 1000.0;

    /// Default perspective (45°, 0.1 .. 1000) for the given aspect ratio.
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            fov_y_degrees: Self::DEFAULT_FOV_Y_DEGREES,
            aspect_ratio,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Six frustum planes for culling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub near: Plane,
    pub far: Plane,
    pub left: Plane,
    pub right: Plane,
    pub top: Plane,
    pub bottom: Plane,
}

impl Frustum {
    /// Build the frustum of a viewer.
    ///
    /// The side planes all pass through the viewer position and are
    /// spanned by the far-plane extents:
    /// - `half_v = far * tan(fov_y / 2)`, `half_h = half_v * aspect`
    /// - `right`:  `cross(front * far - right * half_h, up)`
    /// - `left`:   `cross(up, front * far + right * half_h)`
    /// - `top`:    `cross(right, front * far - up * half_v)`
    /// - `bottom`: `cross(front * far + up * half_v, right)`
    ///
    /// Near and far sit at `near` and `far` along `front`, facing each other.
    pub fn from_basis(basis: &CameraBasis, projection: &Projection) -> Self {
        let CameraBasis { position, front, right, up } = *basis;

        let half_v_side = projection.far * (projection.fov_y_degrees.to_radians() * 0.5).tan();
        let half_h_side = half_v_side * projection.aspect_ratio;
        let front_mult_far = front * projection.far;

        Self {
            near: Plane::new(position + front * projection.near, front),
            far: Plane::new(position + front_mult_far, -front),
            right: Plane::new(position, (front_mult_far - right * half_h_side).cross(up)),
            left: Plane::new(position, up.cross(front_mult_far + right * half_h_side)),
            top: Plane::new(position, right.cross(front_mult_far - up * half_v_side)),
            bottom: Plane::new(position, (front_mult_far + up * half_v_side).cross(right)),
        }
    }

    /// Planes in `PLANE_*` index order.
    pub fn planes(&self) -> [Plane; 6] {
        let mut planes = [self.near; 6];
        planes[PLANE_LEFT] = self.left;
        planes[PLANE_RIGHT] = self.right;
        planes[PLANE_BOTTOM] = self.bottom;
        planes[PLANE_TOP] = self.top;
        planes[PLANE_NEAR] = self.near;
        planes[PLANE_FAR] = self.far;
        planes
    }

    /// True if `point` is on the inner side of all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes().iter().all(|plane| plane.signed_distance(point) >= 0.0)
    }

    /// True if a sphere is at least partially inside.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes().iter().all(|plane| plane.signed_distance(center) >= -radius)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
