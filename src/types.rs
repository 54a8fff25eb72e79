//! Core types for the keybinding system: key codes and press phases

/// Opaque platform-assigned key code.
///
/// The engine never interprets key codes beyond equality; the constants in
/// [`keys`] exist only so the default bindings and the volume-key gate have
/// names to point at.
pub type KeyCode = i32;

/// Named key codes used by the default bindings and the volume-key gate.
///
/// Values follow the Android `KeyEvent` assignments that persisted binding
/// data was recorded against.
pub mod keys {
    use super::KeyCode;

    pub const DPAD_UP: KeyCode = 19;
    pub const DPAD_DOWN: KeyCode = 20;
    pub const DPAD_LEFT: KeyCode = 21;
    pub const DPAD_RIGHT: KeyCode = 22;
    pub const VOLUME_UP: KeyCode = 24;
    pub const VOLUME_DOWN: KeyCode = 25;
    pub const A: KeyCode = 29;
    pub const D: KeyCode = 32;
    pub const S: KeyCode = 47;
    pub const W: KeyCode = 51;
    pub const MENU: KeyCode = 82;

    /// Debug name for a key code, if it is one the defaults know about.
    pub fn name(code: KeyCode) -> Option<&'static str> {
        match code {
            DPAD_UP => Some("dpad-up"),
            DPAD_DOWN => Some("dpad-down"),
            DPAD_LEFT => Some("dpad-left"),
            DPAD_RIGHT => Some("dpad-right"),
            VOLUME_UP => Some("volume-up"),
            VOLUME_DOWN => Some("volume-down"),
            A => Some("a"),
            D => Some("d"),
            S => Some("s"),
            W => Some("w"),
            MENU => Some("menu"),
            _ => None,
        }
    }
}

/// The three moments a key binding can react to.
///
/// Phase classification (hold thresholds, repeat timing) is owned by the
/// event source; the dispatch engine only consumes an already-classified
/// phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// A brief press-and-release.
    Short,
    /// The key is held past the hold threshold.
    Hold,
    /// A long-held key was released.
    Release,
}
