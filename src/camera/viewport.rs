use glam::{Vec2, Vec3};

use crate::animation::{Animatable, RigChannel};
use crate::camera::controller::OrbitControls;
use crate::camera::core::Camera;
use crate::picking::Ray;

/// The camera, its (possibly not yet attached) orbit controls, and the
/// surface size in physical pixels.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// The rendering camera.
    pub camera: Camera,
    /// Orbit controls; `None` until attached.
    pub controls: Option<OrbitControls>,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Viewport of `width` x `height` pixels.
    #[must_use]
    pub fn new(
        mut camera: Camera,
        controls: Option<OrbitControls>,
        width: u32,
        height: u32,
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        camera.aspect = width as f32 / height as f32;
        if let Some(controls) = &controls {
            controls.update(&mut camera);
        }
        Self {
            camera,
            controls,
            width,
            height,
        }
    }

    /// Surface size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Track a surface resize. Zero dimensions are clamped to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.camera.aspect = self.width as f32 / self.height as f32;
    }

    /// Convert a pixel position (origin top-left, y down) to normalized
    /// device coordinates.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            2.0 * x / self.width as f32 - 1.0,
            1.0 - 2.0 * y / self.height as f32,
        )
    }

    /// Pixel position of a world-space point, or `None` when it lies behind
    /// the camera.
    #[must_use]
    pub fn to_screen(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.camera.build_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
        ))
    }

    /// World-space ray under a pixel.
    #[must_use]
    pub fn ray_at(&self, x: f32, y: f32) -> Ray {
        self.camera.ray_through(self.to_ndc(x, y))
    }

    /// Current look-at point: the controls target when attached, else the
    /// camera's own target.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.controls
            .as_ref()
            .map_or(self.camera.target, |controls| controls.target)
    }
}

impl Animatable<RigChannel> for Viewport {
    fn get(&self, key: RigChannel) -> Vec3 {
        match key {
            RigChannel::CameraPosition => self.camera.eye,
            RigChannel::LookAt => self.look_at(),
        }
    }

    fn set(&mut self, key: RigChannel, value: Vec3) {
        match key {
            RigChannel::CameraPosition => self.camera.eye = value,
            RigChannel::LookAt => {
                if let Some(controls) = &mut self.controls {
                    controls.target = value;
                }
            }
        }
    }

    fn on_update(&mut self, key: RigChannel) {
        if key == RigChannel::LookAt {
            if let Some(controls) = &self.controls {
                controls.update(&mut self.camera);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CameraOptions, ControlsOptions};

    fn viewport(with_controls: bool) -> Viewport {
        let camera = Camera::from_options(&CameraOptions::default(), Vec3::ZERO, 1.0);
        let controls = with_controls
            .then(|| OrbitControls::from_options(&ControlsOptions::default()));
        Viewport::new(camera, controls, 800, 600)
    }

    #[test]
    fn ndc_corners() {
        let vp = viewport(true);
        assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(400.0, 300.0), Vec2::ZERO);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let vp = viewport(true);
        let center = vp.to_screen(Vec3::ZERO).unwrap();
        assert!((center - Vec2::new(400.0, 300.0)).length() < 1e-2);
    }

    #[test]
    fn look_at_writes_need_update_to_reorient() {
        let mut vp = viewport(true);
        vp.set(RigChannel::LookAt, Vec3::X);
        assert_eq!(vp.camera.target, Vec3::ZERO);
        vp.on_update(RigChannel::LookAt);
        assert_eq!(vp.camera.target, Vec3::X);
    }

    #[test]
    fn look_at_without_controls_is_ignored() {
        let mut vp = viewport(false);
        vp.set(RigChannel::LookAt, Vec3::X);
        vp.on_update(RigChannel::LookAt);
        assert_eq!(vp.get(RigChannel::LookAt), Vec3::ZERO);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut vp = viewport(true);
        vp.resize(1000, 0);
        assert_eq!(vp.size(), (1000, 1));
        assert_eq!(vp.camera.aspect, 1000.0);
    }
}
