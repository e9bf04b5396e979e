//! Top-level composition: scene, viewport, camera rig and input.
//!
//! [`Showroom`] owns the current focus target. Clicks are the only path that
//! writes it besides explicit [`Showroom::set_focus`] calls, and every write
//! is pushed straight into the rig.

pub mod command;

use glam::Vec3;

pub use command::ShowroomCommand;

use crate::animation::{CameraRig, RigPhase, TweenSpec};
use crate::camera::{Camera, OrbitControls, Viewport};
use crate::error::VantageError;
use crate::focus::FocusTarget;
use crate::input::{InputEvent, InputProcessor};
use crate::options::{FocusOptions, Options};
use crate::picking::ClickOutcome;
use crate::scene::{compose, AssetLoader, Scene};

/// Interactive click-to-focus showroom.
pub struct Showroom {
    options: Options,
    scene: Scene,
    viewport: Viewport,
    rig: CameraRig,
    input: InputProcessor,
    focus: Option<FocusTarget>,
    home: FocusTarget,
    cycle_index: usize,
}

impl Showroom {
    /// Compose the scene from `options` and set up the camera for a
    /// `width` x `height` surface. Models start pending; call
    /// [`resolve_assets`](Self::resolve_assets) before picking.
    pub fn new(options: Options, width: u32, height: u32) -> Result<Self, VantageError> {
        let scene = compose(&options)?;
        let controls = OrbitControls::from_options(&options.controls);
        let camera = Camera::from_options(&options.camera, controls.target, 1.0);
        let viewport = Viewport::new(camera, Some(controls), width, height);
        let home = FocusTarget::from_points(viewport.camera.eye, viewport.look_at());
        let rig = CameraRig::new(&options.focus);
        let input = InputProcessor::with_key_bindings(options.keybindings.clone());

        log::info!(
            "showroom ready: {} scene nodes, camera at {}",
            scene.len(),
            viewport.camera.eye
        );
        Ok(Self {
            options,
            scene,
            viewport,
            rig,
            input,
            focus: None,
            home,
            cycle_index: 0,
        })
    }

    /// Resolve pending model assets. Returns the number that failed.
    pub fn resolve_assets(&mut self, loader: &dyn AssetLoader) -> usize {
        self.scene.resolve_assets(loader)
    }

    /// Run one command.
    pub fn execute(&mut self, command: ShowroomCommand) {
        match command {
            ShowroomCommand::Click { x, y } => {
                let _ = self.click_at(x, y);
            }
            ShowroomCommand::RotateCamera { delta } => {
                let Viewport {
                    camera, controls, ..
                } = &mut self.viewport;
                if let Some(controls) = controls {
                    controls.rotate(camera, delta);
                }
            }
            ShowroomCommand::PanCamera { delta } => {
                let Viewport {
                    camera, controls, ..
                } = &mut self.viewport;
                if let Some(controls) = controls {
                    controls.pan(camera, delta);
                }
            }
            ShowroomCommand::Zoom { delta } => {
                let Viewport {
                    camera, controls, ..
                } = &mut self.viewport;
                if let Some(controls) = controls {
                    controls.zoom(camera, delta);
                }
            }
            ShowroomCommand::ResetView => {
                let _ = self.set_focus(Some(self.home));
            }
            ShowroomCommand::CycleFocus => self.cycle_focus(),
            ShowroomCommand::ClearFocus => {
                self.focus = None;
            }
        }
    }

    /// Feed a raw input event. Returns `true` if it produced a command.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Feed a key press (e.g. `"KeyR"`). Returns `true` if it was bound.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Pick at a pixel and deliver the click, nearest object first. A
    /// published focus target starts a camera move.
    pub fn click_at(&mut self, x: f32, y: f32) -> ClickOutcome {
        let ray = self.viewport.ray_at(x, y);
        let hits = self.scene.raycast(&ray);
        let outcome = self.scene.dispatch_click(&hits);
        if let Some(target) = outcome.focus {
            let _ = self.set_focus(Some(target));
        }
        outcome
    }

    /// Store `target` as the current focus and hand it to the rig. Returns
    /// whether a camera move started.
    pub fn set_focus(&mut self, target: Option<FocusTarget>) -> bool {
        self.focus = target;
        self.rig.retarget(target, &self.viewport)
    }

    fn cycle_focus(&mut self) {
        let targets: Vec<FocusTarget> = self
            .scene
            .iter()
            .filter_map(|(_, node)| node.click.and_then(|click| click.focus))
            .collect();
        if targets.is_empty() {
            return;
        }
        let target = targets[self.cycle_index % targets.len()];
        self.cycle_index = (self.cycle_index + 1) % targets.len();
        let _ = self.set_focus(Some(target));
    }

    /// Advance animations by `dt` seconds. Returns `true` while the camera
    /// is still moving.
    pub fn update(&mut self, dt: f32) -> bool {
        self.rig.advance(dt, &mut self.viewport)
    }

    /// Track a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }

    /// Change focus-move timing for subsequent moves.
    pub fn set_focus_options(&mut self, focus: FocusOptions) {
        self.rig
            .set_spec(TweenSpec::from_secs(focus.duration_secs, focus.easing));
        self.options.focus = focus;
    }

    /// Detach the orbit controls. Focus moves become no-ops until
    /// [`attach_controls`](Self::attach_controls).
    pub fn detach_controls(&mut self) -> Option<OrbitControls> {
        self.rig.halt();
        self.viewport.controls.take()
    }

    /// Attach orbit controls and orient the camera with them. A focus target
    /// stored while the controls were missing starts its move now.
    pub fn attach_controls(&mut self, controls: OrbitControls) {
        controls.update(&mut self.viewport.camera);
        self.viewport.controls = Some(controls);
        let _ = self.rig.retarget(self.focus, &self.viewport);
    }

    /// Current focus target.
    #[must_use]
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Rig state.
    #[must_use]
    pub fn rig_phase(&self) -> RigPhase {
        self.rig.phase()
    }

    /// Camera eye position.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.viewport.camera.eye
    }

    /// Orbit controls target.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.viewport.look_at()
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene, for direct field writes.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
