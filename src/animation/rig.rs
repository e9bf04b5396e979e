//! Camera rig: turns focus targets into camera and look-at tweens.
//!
//! The rig is told about new targets explicitly through
//! [`CameraRig::retarget`]; it never polls for changes. Each call starts a
//! fresh pair of tweens from the viewport's live values, replacing whatever
//! was in flight.

use crate::animation::tween::{TweenScheduler, TweenSpec};
use crate::camera::Viewport;
use crate::focus::FocusTarget;
use crate::options::FocusOptions;
use crate::util::easing::EasingFunction;

/// Viewport fields the rig animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RigChannel {
    /// The camera eye position.
    CameraPosition,
    /// The orbit controls' look-at target.
    LookAt,
}

/// Whether a focus move is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigPhase {
    /// No tween running.
    Idle,
    /// Camera and/or look-at tween running.
    Animating,
}

/// Drives the viewport toward focus targets.
pub struct CameraRig {
    scheduler: TweenScheduler<RigChannel>,
    spec: TweenSpec,
}

impl CameraRig {
    /// Rig using the duration and easing from `options`.
    #[must_use]
    pub fn new(options: &FocusOptions) -> Self {
        Self::with_spec(TweenSpec::from_secs(options.duration_secs, options.easing))
    }

    /// Rig with an explicit tween spec.
    #[must_use]
    pub fn with_spec(spec: TweenSpec) -> Self {
        Self {
            scheduler: TweenScheduler::new(),
            spec,
        }
    }

    /// Current tween spec.
    #[must_use]
    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    /// Change duration and easing for subsequent retargets.
    pub fn set_spec(&mut self, spec: TweenSpec) {
        self.spec = spec;
    }

    /// Change only the easing for subsequent retargets.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.spec.easing = easing;
    }

    /// Start moving toward `target`.
    ///
    /// No-op (returns `false`) when `target` is `None`, when the viewport's
    /// controls are not attached, or when the target has a non-finite
    /// component. Otherwise starts a camera-position tween and a look-at
    /// tween that re-runs the controls' update on every step.
    pub fn retarget(&mut self, target: Option<FocusTarget>, viewport: &Viewport) -> bool {
        let Some(target) = target else {
            return false;
        };
        if viewport.controls.is_none() {
            log::debug!("retarget ignored: orbit controls not attached");
            return false;
        }
        if !target.is_finite() {
            log::warn!("retarget ignored: non-finite focus target {target:?}");
            return false;
        }

        log::info!(
            "focusing camera {} -> {}, look-at {} -> {}",
            viewport.camera.eye,
            target.camera,
            viewport.look_at(),
            target.look_at,
        );
        let _ = self.scheduler.to(
            viewport,
            RigChannel::CameraPosition,
            target.camera,
            self.spec,
            false,
        );
        let _ = self
            .scheduler
            .to(viewport, RigChannel::LookAt, target.look_at, self.spec, true);
        true
    }

    /// Advance by `dt` seconds. Returns `true` while still animating.
    pub fn advance(&mut self, dt: f32, viewport: &mut Viewport) -> bool {
        self.scheduler.tick(dt, viewport)
    }

    /// Stop any focus move where it is.
    pub fn halt(&mut self) {
        self.scheduler.clear();
    }

    /// Idle or animating.
    #[must_use]
    pub fn phase(&self) -> RigPhase {
        if self.scheduler.is_animating() {
            RigPhase::Animating
        } else {
            RigPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{Camera, OrbitControls};
    use crate::options::{CameraOptions, ControlsOptions};

    const FRAME: f32 = 1.0 / 60.0;

    fn viewport() -> Viewport {
        let camera = Camera::from_options(&CameraOptions::default(), Vec3::ZERO, 1.0);
        let controls = OrbitControls::from_options(&ControlsOptions::default());
        Viewport::new(camera, Some(controls), 800, 600)
    }

    fn motorcycle_target() -> FocusTarget {
        FocusTarget::new(-3.32653, 4.0, 3.3205, 0.1023, -1.80999, -0.45)
    }

    fn run_to_rest(rig: &mut CameraRig, vp: &mut Viewport) -> usize {
        let mut frames = 0;
        while rig.advance(FRAME, vp) {
            frames += 1;
            assert!(frames < 10_000, "rig never settled");
        }
        frames + 1
    }

    #[test]
    fn single_focus_converges_in_duration() {
        let mut vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        let target = motorcycle_target();

        assert_eq!(vp.camera.eye, Vec3::new(3.0, 3.0, 3.0));
        assert!(rig.retarget(Some(target), &vp));
        assert_eq!(rig.phase(), RigPhase::Animating);

        let frames = run_to_rest(&mut rig, &mut vp);
        // 1.5 s at 60 fps
        assert!((89..=91).contains(&frames), "took {frames} frames");
        assert_eq!(rig.phase(), RigPhase::Idle);
        assert!((vp.camera.eye - target.camera).length() < 1e-4);
        assert!((vp.look_at() - target.look_at).length() < 1e-6);
        assert_eq!(vp.camera.target, target.look_at);
    }

    #[test]
    fn gaze_follows_during_flight() {
        let mut vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        let _ = rig.retarget(Some(motorcycle_target()), &vp);
        for _ in 0..45 {
            let _ = rig.advance(FRAME, &mut vp);
        }
        // Camera orientation tracks the moving controls target mid-flight
        assert_eq!(vp.camera.target, vp.look_at());
        assert_ne!(vp.camera.target, Vec3::ZERO);
    }

    #[test]
    fn null_target_is_noop() {
        let vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        assert!(!rig.retarget(None, &vp));
        assert_eq!(rig.phase(), RigPhase::Idle);
    }

    #[test]
    fn missing_controls_is_noop() {
        let mut vp = viewport();
        vp.controls = None;
        let mut rig = CameraRig::new(&FocusOptions::default());
        assert!(!rig.retarget(Some(motorcycle_target()), &vp));
        assert!(!rig.advance(FRAME, &mut vp));
        assert_eq!(vp.camera.eye, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        let bad = FocusTarget::new(f32::NAN, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(!rig.retarget(Some(bad), &vp));
    }

    #[test]
    fn second_click_mid_flight_settles_on_second_target() {
        let mut vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        let first = motorcycle_target();
        let second = FocusTarget::new(2.0, 2.5, -3.0, 0.0, 0.5, 0.0);

        let _ = rig.retarget(Some(first), &vp);
        for _ in 0..30 {
            let _ = rig.advance(FRAME, &mut vp);
        }
        let mid = vp.camera.eye;

        assert!(rig.retarget(Some(second), &vp));
        let _ = rig.advance(0.0, &mut vp);
        // Restarts from the live position: no snap back to (3,3,3)
        assert!((vp.camera.eye - mid).length() < 1e-3);

        let _ = run_to_rest(&mut rig, &mut vp);
        assert!((vp.camera.eye - second.camera).length() < 1e-4);
        assert!((vp.look_at() - second.look_at).length() < 1e-6);
    }

    #[test]
    fn repeated_identical_target_restarts() {
        let mut vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        let target = motorcycle_target();
        let _ = rig.retarget(Some(target), &vp);
        let _ = run_to_rest(&mut rig, &mut vp);

        assert!(rig.retarget(Some(target), &vp));
        assert_eq!(rig.phase(), RigPhase::Animating);
        let _ = run_to_rest(&mut rig, &mut vp);
        assert!((vp.camera.eye - target.camera).length() < 1e-4);
    }

    #[test]
    fn easing_change_keeps_duration() {
        let mut vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        assert_eq!(rig.spec().easing, EasingFunction::CubicInOut);
        rig.set_easing(EasingFunction::Linear);
        assert_eq!(rig.spec().easing, EasingFunction::Linear);
        assert_eq!(rig.spec().duration.as_secs_f32(), 1.5);

        let start = vp.camera.eye;
        let target = motorcycle_target();
        let _ = rig.retarget(Some(target), &vp);
        let _ = rig.advance(0.75, &mut vp);
        assert!((vp.camera.eye - start.lerp(target.camera, 0.5)).length() < 1e-4);
    }

    #[test]
    fn halt_freezes_in_place() {
        let mut vp = viewport();
        let mut rig = CameraRig::new(&FocusOptions::default());
        let _ = rig.retarget(Some(motorcycle_target()), &vp);
        let _ = rig.advance(0.5, &mut vp);
        let frozen = vp.camera.eye;
        rig.halt();
        assert!(!rig.advance(0.5, &mut vp));
        assert_eq!(vp.camera.eye, frozen);
    }
}
