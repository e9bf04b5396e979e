/// Squared pixel movement above which a press becomes a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Result of processing a mouse-up event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// The press turned into a drag; no click.
    NoAction,
    /// Press and release without significant movement.
    Click {
        /// Release position, physical pixels.
        x: f32,
        /// Release position, physical pixels.
        y: f32,
    },
}

/// Tracks mouse position and click-versus-drag state.
pub struct InputState {
    pub mouse_pos: (f32, f32),
    press_pos: Option<(f32, f32)>,
    is_dragging: bool,
}

impl InputState {
    /// Create a new input state with no active press.
    pub fn new() -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            press_pos: None,
            is_dragging: false,
        }
    }

    /// Record the press position.
    pub fn handle_mouse_down(&mut self) {
        self.press_pos = Some(self.mouse_pos);
        self.is_dragging = false;
    }

    /// Whether a press is active.
    pub fn is_pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Update cursor position. Returns the delta from the previous
    /// position and marks a drag once the cursor leaves the press point.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = (x - self.mouse_pos.0, y - self.mouse_pos.1);
        self.mouse_pos = (x, y);

        if let Some((px, py)) = self.press_pos {
            let (dx, dy) = (x - px, y - py);
            if dx * dx + dy * dy > DRAG_THRESHOLD_SQ {
                self.is_dragging = true;
            }
        }
        delta
    }

    /// Process a mouse-up event and return what kind of click happened.
    pub fn process_mouse_up(&mut self) -> ClickResult {
        let was_pressed = self.press_pos.take().is_some();
        let was_dragging = std::mem::take(&mut self.is_dragging);

        if !was_pressed || was_dragging {
            return ClickResult::NoAction;
        }
        let (x, y) = self.mouse_pos;
        ClickResult::Click { x, y }
    }
}
