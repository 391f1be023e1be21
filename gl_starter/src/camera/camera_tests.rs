use glam::{Mat4, Vec3, Vec4};
use super::*;

const EPSILON: f32 = 1e-5;

fn assert_vec_eq(actual: Vec3, expected: Vec3) {
    assert!((actual - expected).length() < EPSILON, "{:?} != {:?}", actual, expected);
}

fn assert_orthonormal(camera: &Camera) {
    for v in [camera.front(), camera.right(), camera.up()] {
        assert!((v.length() - 1.0).abs() < EPSILON, "{:?} is not unit length", v);
    }
    assert!(camera.front().dot(camera.right()).abs() < EPSILON);
    assert!(camera.front().dot(camera.up()).abs() < EPSILON);
    assert!(camera.right().dot(camera.up()).abs() < EPSILON);
}

fn default_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 3.0), 900.0, 600.0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_camera_looks_down_negative_z() {
    let camera = default_camera();

    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(camera.yaw(), DEFAULT_YAW);
    assert_eq!(camera.pitch(), DEFAULT_PITCH);
    assert_vec_eq(camera.front(), Vec3::NEG_Z);
    assert_vec_eq(camera.right(), Vec3::X);
    assert_vec_eq(camera.up(), Vec3::Y);
}

#[test]
fn test_new_camera_default_projection() {
    let camera = default_camera();
    let projection = camera.projection();

    assert_eq!(projection.fov_y_degrees, 45.0);
    assert_eq!(projection.near, 0.1);
    assert_eq!(projection.far, 1000.0);
    assert!((projection.aspect_ratio - 1.5).abs() < EPSILON);
}

#[test]
fn test_degenerate_viewport_falls_back_to_square_aspect() {
    let camera = Camera::new(Vec3::ZERO, 640.0, 0.0);
    assert_eq!(camera.projection().aspect_ratio, 1.0);
    assert!(camera.projection_matrix().is_finite());
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_matrix_matches_look_at() {
    let camera = default_camera();
    let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 2.0), camera.up());
    assert!(camera.view_matrix().abs_diff_eq(expected, EPSILON));
}

#[test]
fn test_projection_uses_gl_depth_range() {
    let camera = default_camera();
    let projection = camera.projection_matrix();

    let near = projection * Vec4::new(0.0, 0.0, -0.1, 1.0);
    let far = projection * Vec4::new(0.0, 0.0, -1000.0, 1.0);
    assert!((near.z / near.w + 1.0).abs() < 1e-3);
    assert!((far.z / far.w - 1.0).abs() < 1e-3);
}

#[test]
fn test_view_projection_is_projection_times_view() {
    let camera = default_camera();
    let expected = camera.projection_matrix() * camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(), expected);
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn test_set_yaw_turns_right() {
    let mut camera = default_camera();
    camera.set_yaw(0.0);
    assert_vec_eq(camera.front(), Vec3::X);
    assert_vec_eq(camera.right(), Vec3::Z);
    assert_orthonormal(&camera);
}

#[test]
fn test_set_pitch_looks_up() {
    let mut camera = default_camera();
    camera.set_pitch(45.0);
    let s = 45.0_f32.to_radians().sin();
    assert_vec_eq(camera.front(), Vec3::new(0.0, s, -s));
    assert_orthonormal(&camera);
}

#[test]
fn test_basis_orthonormal_for_any_orientation() {
    let mut camera = default_camera();
    for yaw in [-180.0, -90.0, -33.0, 0.0, 72.5, 270.0] {
        for pitch in [-89.0, -45.0, 0.0, 10.0, 89.0] {
            camera.set_orientation(yaw, pitch);
            assert_orthonormal(&camera);
        }
    }
}

#[test]
fn test_set_pitch_does_not_clamp() {
    let mut camera = default_camera();
    camera.set_pitch(120.0);
    assert_eq!(camera.pitch(), 120.0);
}

// ============================================================================
// Frustum stays current
// ============================================================================

#[test]
fn test_frustum_matches_current_state_after_every_mutation() {
    let mut camera = default_camera();
    let fresh = |camera: &Camera| Frustum::from_basis(&camera.basis(), camera.projection());

    assert_eq!(*camera.frustum(), fresh(&camera));

    camera.set_position(Vec3::new(5.0, 1.0, -2.0));
    assert_eq!(*camera.frustum(), fresh(&camera));

    camera.set_yaw(10.0);
    assert_eq!(*camera.frustum(), fresh(&camera));

    camera.set_pitch(-20.0);
    assert_eq!(*camera.frustum(), fresh(&camera));

    camera.set_aspect_ratio(2.0);
    assert_eq!(*camera.frustum(), fresh(&camera));

    camera.set_viewport_size(1920.0, 1080.0);
    assert_eq!(*camera.frustum(), fresh(&camera));
}

#[test]
fn test_frustum_follows_position() {
    let mut camera = default_camera();
    let target = Vec3::new(0.0, 0.0, -10.0);
    assert!(camera.frustum().contains_point(target));

    camera.set_position(Vec3::new(0.0, 0.0, -20.0));
    assert!(!camera.frustum().contains_point(target));
}

#[test]
fn test_viewport_resize_updates_aspect() {
    let mut camera = default_camera();
    camera.set_viewport_size(1920.0, 1080.0);
    assert!((camera.projection().aspect_ratio - 16.0 / 9.0).abs() < EPSILON);
}

#[test]
fn test_zero_viewport_keeps_aspect() {
    let mut camera = default_camera();
    camera.set_viewport_size(0.0, 0.0);
    assert!((camera.projection().aspect_ratio - 1.5).abs() < EPSILON);
}
