//! Browser bindings.
//!
//! [`WebShowroom`] wraps a [`Showroom`] for JavaScript hosts. The host owns
//! the canvas and the render loop: it forwards DOM pointer, wheel and key
//! events, calls [`WebShowroom::frame`] once per animation frame, and reads
//! the camera pose back to position its own renderer.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::input::{InputEvent, MouseButton};
use crate::options::Options;
use crate::scene::assets::DeclaredBoundsLoader;
use crate::showroom::Showroom;
use crate::util::frame_timing::FrameClock;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// A showroom driven from JavaScript.
#[wasm_bindgen]
pub struct WebShowroom {
    inner: Showroom,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebShowroom {
    /// Build a showroom with default options for a `width` x `height`
    /// canvas. Models are marked ready from their declared bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<WebShowroom, JsError> {
        Self::build(Options::default(), width, height)
    }

    /// Build a showroom from a TOML options document.
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(toml: &str, width: u32, height: u32) -> Result<WebShowroom, JsError> {
        let options = Options::from_toml(toml).map_err(|e| JsError::new(&e.to_string()))?;
        Self::build(options, width, height)
    }

    fn build(options: Options, width: u32, height: u32) -> Result<WebShowroom, JsError> {
        let mut inner =
            Showroom::new(options, width, height).map_err(|e| JsError::new(&e.to_string()))?;
        let failed = inner.resolve_assets(&DeclaredBoundsLoader);
        if failed > 0 {
            log::warn!("{failed} model(s) failed to load");
        }
        Ok(Self {
            inner,
            clock: FrameClock::new(),
        })
    }

    /// Forward a `pointermove`/`mousemove` event.
    #[wasm_bindgen(js_name = mouseMove)]
    pub fn mouse_move(&mut self, event: &web_sys::MouseEvent) {
        let _ = self.inner.handle_input(InputEvent::ModifiersChanged {
            shift: event.shift_key(),
        });
        let _ = self.inner.handle_input(InputEvent::CursorMoved {
            x: event.offset_x() as f32,
            y: event.offset_y() as f32,
        });
    }

    /// Forward a `mousedown` event.
    #[wasm_bindgen(js_name = mouseDown)]
    pub fn mouse_down(&mut self, event: &web_sys::MouseEvent) {
        self.mouse_button(event, true);
    }

    /// Forward a `mouseup` event. Returns `true` if it became a click or
    /// gesture command.
    #[wasm_bindgen(js_name = mouseUp)]
    pub fn mouse_up(&mut self, event: &web_sys::MouseEvent) -> bool {
        self.mouse_button(event, false)
    }

    fn mouse_button(&mut self, event: &web_sys::MouseEvent, pressed: bool) -> bool {
        let _ = self.inner.handle_input(InputEvent::CursorMoved {
            x: event.offset_x() as f32,
            y: event.offset_y() as f32,
        });
        self.inner.handle_input(InputEvent::MouseButton {
            button: MouseButton::from_dom(event.button()),
            pressed,
        })
    }

    /// Forward a `wheel` event. Scrolling up zooms in.
    pub fn wheel(&mut self, event: &web_sys::WheelEvent) {
        let dy = event.delta_y() as f32;
        if dy != 0.0 {
            let _ = self
                .inner
                .handle_input(InputEvent::Scroll { delta: -dy.signum() });
        }
    }

    /// Forward a `keydown` event. Returns `true` if the key was bound.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, event: &web_sys::KeyboardEvent) -> bool {
        let _ = self.inner.handle_input(InputEvent::ModifiersChanged {
            shift: event.shift_key(),
        });
        self.inner.handle_key(&event.code())
    }

    /// Advance animations by wall-clock time since the last frame. Returns
    /// `true` while the camera is moving.
    pub fn frame(&mut self) -> bool {
        let dt = self.clock.tick();
        self.inner.update(dt)
    }

    /// Advance animations by an explicit `dt` in seconds.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.inner.update(dt)
    }

    /// Track a canvas resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.inner.resize(width, height);
    }

    /// Click at a canvas pixel. Returns `true` if anything handled it.
    #[wasm_bindgen(js_name = clickAt)]
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        !self.inner.click_at(x, y).handled_by.is_empty()
    }

    /// Camera eye as `[x, y, z]`.
    #[wasm_bindgen(js_name = cameraPosition)]
    pub fn camera_position(&self) -> Float32Array {
        Float32Array::from(&self.inner.camera_position().to_array()[..])
    }

    /// Orbit target as `[x, y, z]`.
    #[wasm_bindgen(js_name = lookAt)]
    pub fn look_at(&self) -> Float32Array {
        Float32Array::from(&self.inner.look_at().to_array()[..])
    }

    /// Column-major view-projection matrix.
    #[wasm_bindgen(js_name = viewProjection)]
    pub fn view_projection(&self) -> Float32Array {
        let matrix = self.inner.viewport().camera.build_matrix();
        Float32Array::from(&matrix.to_cols_array()[..])
    }

    /// Frames per second measured by the frame clock.
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}
