use serde::{Deserialize, Serialize};

/// Showroom actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_view = "KeyR"
/// cycle_focus = "Tab"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Animate back to the initial camera pose.
    ResetView,
    /// Focus the next clickable model.
    CycleFocus,
    /// Drop the current focus target without moving.
    ClearFocus,
}
