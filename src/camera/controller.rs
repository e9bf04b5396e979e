use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::ControlsOptions;

/// Keeps the polar angle strictly inside (0, π) so the up vector never
/// becomes parallel to the view direction.
const POLAR_EPSILON: f32 = 1e-6;

/// Orbit-style camera controller.
///
/// The camera orbits [`target`](Self::target). Callers that write `target`
/// or the camera eye directly must call [`update`](Self::update) for the
/// change to reach the camera's orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    /// Smallest allowed angle from the +Y axis, radians.
    pub min_polar: f32,
    /// Largest allowed angle from the +Y axis, radians.
    pub max_polar: f32,
    /// Closest allowed eye-to-target distance.
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance.
    pub max_distance: f32,
    /// Radians per pixel of drag.
    pub rotate_speed: f32,
    /// World units per pixel of drag, scaled by distance.
    pub pan_speed: f32,
    /// Fractional distance change per scroll unit.
    pub zoom_speed: f32,
    /// When false, user gestures are ignored. `update` still applies.
    pub enabled: bool,
}

impl OrbitControls {
    /// Controls configured from `options`.
    #[must_use]
    pub fn from_options(options: &ControlsOptions) -> Self {
        Self {
            target: Vec3::from_array(options.target),
            min_polar: options.min_polar_angle,
            max_polar: options.max_polar_angle,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            enabled: true,
        }
    }

    /// Re-express the camera around `target`, apply the polar and distance
    /// limits, and point the camera at `target`.
    pub fn update(&self, camera: &mut Camera) {
        let offset = camera.eye - self.target;
        let (radius, theta, phi) = to_spherical(offset);
        // max/min rather than clamp: misordered limits must not panic
        let limited_phi = phi
            .max(self.min_polar)
            .min(self.max_polar)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let limited_radius = radius.max(self.min_distance).min(self.max_distance);

        // Poses already inside the limits keep their exact eye position
        if limited_phi != phi || limited_radius != radius {
            camera.eye = self.target + from_spherical(limited_radius, theta, limited_phi);
        }
        camera.target = self.target;
        camera.up = Vec3::Y;
    }

    /// Orbit by a drag of `delta` pixels.
    pub fn rotate(&self, camera: &mut Camera, delta: Vec2) {
        if !self.enabled {
            return;
        }
        let (radius, theta, phi) = to_spherical(camera.eye - self.target);
        let theta = theta - delta.x * self.rotate_speed;
        let phi = phi - delta.y * self.rotate_speed;
        camera.eye = self.target + from_spherical(radius, theta, phi);
        self.update(camera);
    }

    /// Translate target and eye together by a drag of `delta` pixels.
    pub fn pan(&mut self, camera: &mut Camera, delta: Vec2) {
        if !self.enabled {
            return;
        }
        let forward = camera.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let scale = self.pan_speed * (camera.eye - self.target).length();

        let translation = right * (-delta.x * scale) + up * (delta.y * scale);
        self.target += translation;
        camera.eye += translation;
        self.update(camera);
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&self, camera: &mut Camera, delta: f32) {
        if !self.enabled {
            return;
        }
        let offset = camera.eye - self.target;
        camera.eye = self.target + offset * (1.0 - delta * self.zoom_speed).max(0.01);
        self.update(camera);
    }
}

/// (radius, azimuth around +Y from +Z, polar angle from +Y).
fn to_spherical(offset: Vec3) -> (f32, f32, f32) {
    let radius = offset.length();
    if radius == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let theta = offset.x.atan2(offset.z);
    let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
    (radius, theta, phi)
}

fn from_spherical(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let sin_phi = phi.sin();
    Vec3::new(
        radius * sin_phi * theta.sin(),
        radius * phi.cos(),
        radius * sin_phi * theta.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    fn setup() -> (OrbitControls, Camera) {
        let controls = OrbitControls::from_options(&ControlsOptions::default());
        let camera = Camera::from_options(&CameraOptions::default(), controls.target, 1.0);
        (controls, camera)
    }

    #[test]
    fn update_is_stable_for_valid_pose() {
        let (controls, mut camera) = setup();
        let before = camera.eye;
        controls.update(&mut camera);
        assert!((camera.eye - before).length() < 1e-5);
        assert_eq!(camera.target, controls.target);
    }

    #[test]
    fn update_follows_moved_target() {
        let (mut controls, mut camera) = setup();
        controls.target = Vec3::new(1.0, -1.0, 0.5);
        assert_eq!(camera.target, Vec3::ZERO);
        controls.update(&mut camera);
        assert_eq!(camera.target, Vec3::new(1.0, -1.0, 0.5));
    }

    #[test]
    fn polar_angle_is_clamped() {
        let (controls, mut camera) = setup();
        // Straight below the target: beyond max polar angle
        camera.eye = Vec3::new(0.0, -5.0, 0.01);
        controls.update(&mut camera);
        let (_, _, phi) = to_spherical(camera.eye - controls.target);
        assert!(phi <= controls.max_polar + 1e-4);
        assert!((camera.eye.length() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn update_with_misordered_limits_does_not_panic() {
        let (mut controls, mut camera) = setup();
        controls.min_polar = 2.0;
        controls.max_polar = 0.5;
        controls.min_distance = 5.0;
        controls.max_distance = 1.0;

        controls.update(&mut camera);
        let (radius, _, phi) = to_spherical(camera.eye - controls.target);
        assert!(camera.eye.is_finite());
        assert!((radius - 1.0).abs() < 1e-4);
        assert!((phi - 0.5).abs() < 1e-4);

        controls.rotate(&mut camera, Vec2::new(25.0, -12.0));
        controls.zoom(&mut camera, 3.0);
        assert!(camera.eye.is_finite());
        assert!(((camera.eye - controls.target).length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_in_reduces_distance() {
        let (controls, mut camera) = setup();
        let before = camera.eye.length();
        controls.zoom(&mut camera, 1.0);
        assert!(camera.eye.length() < before);
    }

    #[test]
    fn rotate_keeps_distance() {
        let (controls, mut camera) = setup();
        let before = camera.eye.length();
        controls.rotate(&mut camera, Vec2::new(40.0, 5.0));
        assert!((camera.eye.length() - before).abs() < 1e-4);
        assert_ne!(camera.eye, Vec3::splat(3.0));
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let (mut controls, mut camera) = setup();
        let offset_before = camera.eye - controls.target;
        controls.pan(&mut camera, Vec2::new(10.0, 0.0));
        assert_ne!(controls.target, Vec3::ZERO);
        assert!((camera.eye - controls.target - offset_before).length() < 1e-4);
    }

    #[test]
    fn disabled_controls_ignore_gestures() {
        let (mut controls, mut camera) = setup();
        controls.enabled = false;
        controls.zoom(&mut camera, 1.0);
        controls.rotate(&mut camera, Vec2::new(10.0, 10.0));
        assert_eq!(camera.eye, Vec3::splat(3.0));
    }
}
