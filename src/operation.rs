//! The operation catalog: every navigation behavior a key can be bound to
//!
//! Operations are a closed enum rather than a string-keyed table so that an
//! operation choice can be serialized as data (its wire name) while lookup
//! failures stay visible at compile time inside the crate. Persisted data
//! from older versions may still reference a name that no longer exists;
//! [`invoke_by_name`] degrades that to a logged no-op instead of failing
//! the key event.

use std::fmt;

use crate::binding::UNBOUND;

/// All navigation operations a key binding can invoke.
///
/// Directional operations take an intensity parameter (a fraction of the
/// viewport, or a scroll velocity); `StopContinuousScroll` and `ToggleMenu`
/// accept and discard theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Step the viewport backward by a fraction of its height
    MoveBackward,
    /// Step the viewport forward by a fraction of its height
    MoveForward,
    /// Animated scroll backward
    SmoothScrollBackward,
    /// Animated scroll forward
    SmoothScrollForward,
    /// Begin continuous scrolling at a signed velocity
    StartContinuousScroll,
    /// Terminate whatever continuous motion is running
    StopContinuousScroll,
    /// Show or hide the reader menu
    ToggleMenu,
}

impl Operation {
    /// Every operation, in wire-name order.
    pub const ALL: [Operation; 7] = [
        Operation::MoveBackward,
        Operation::MoveForward,
        Operation::SmoothScrollBackward,
        Operation::SmoothScrollForward,
        Operation::StartContinuousScroll,
        Operation::StopContinuousScroll,
        Operation::ToggleMenu,
    ];

    /// The wire spelling used by the binding codec.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::MoveBackward => "moveBackward",
            Operation::MoveForward => "moveForward",
            Operation::SmoothScrollBackward => "smoothScrollBackward",
            Operation::SmoothScrollForward => "smoothScrollForward",
            Operation::StartContinuousScroll => "startContinuousScroll",
            Operation::StopContinuousScroll => "stopContinuousScroll",
            Operation::ToggleMenu => "toggleMenu",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the catalog,
    /// including the [`UNBOUND`] sentinel.
    pub fn from_name(name: &str) -> Option<Operation> {
        match name {
            "moveBackward" => Some(Operation::MoveBackward),
            "moveForward" => Some(Operation::MoveForward),
            "smoothScrollBackward" => Some(Operation::SmoothScrollBackward),
            "smoothScrollForward" => Some(Operation::SmoothScrollForward),
            "startContinuousScroll" => Some(Operation::StartContinuousScroll),
            "stopContinuousScroll" => Some(Operation::StopContinuousScroll),
            "toggleMenu" => Some(Operation::ToggleMenu),
            _ => None,
        }
    }

    /// The directionally opposite operation, used for volume-key inversion.
    ///
    /// Non-directional operations map to themselves.
    pub const fn inverted(self) -> Operation {
        match self {
            Operation::MoveBackward => Operation::MoveForward,
            Operation::MoveForward => Operation::MoveBackward,
            Operation::SmoothScrollBackward => Operation::SmoothScrollForward,
            Operation::SmoothScrollForward => Operation::SmoothScrollBackward,
            other => other,
        }
    }

    /// Whether the operation actually uses its parameter.
    pub const fn takes_param(self) -> bool {
        !matches!(
            self,
            Operation::StopContinuousScroll | Operation::ToggleMenu
        )
    }

    /// Invoke this operation on the supplied targets.
    pub fn apply(self, param: f32, ops: &mut dyn ReaderOps) {
        match self {
            Operation::MoveBackward => ops.move_backward(param),
            Operation::MoveForward => ops.move_forward(param),
            Operation::SmoothScrollBackward => ops.smooth_scroll_backward(param),
            Operation::SmoothScrollForward => ops.smooth_scroll_forward(param),
            Operation::StartContinuousScroll => ops.start_continuous_scroll(param),
            Operation::StopContinuousScroll => ops.stop_continuous_scroll(),
            Operation::ToggleMenu => ops.toggle_menu(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operation names offered to the user when editing a binding.
///
/// `startContinuousScroll`/`stopContinuousScroll` are deliberately absent:
/// continuous motion is started by hold phases and terminated by release
/// phases that the defaults wire up, not something a short click should do.
pub fn bindable_names() -> &'static [&'static str] {
    &[
        UNBOUND,
        "moveBackward",
        "moveForward",
        "toggleMenu",
        "smoothScrollBackward",
        "smoothScrollForward",
    ]
}

/// Invocation targets for the operation catalog.
///
/// The reader UI owns the actual scroll physics and menu state; the engine
/// only ever talks to it through this trait.
pub trait ReaderOps {
    /// Step backward by `amount` of the viewport height.
    fn move_backward(&mut self, amount: f32);
    /// Step forward by `amount` of the viewport height.
    fn move_forward(&mut self, amount: f32);
    /// Animated scroll backward by `amount`.
    fn smooth_scroll_backward(&mut self, amount: f32);
    /// Animated scroll forward by `amount`.
    fn smooth_scroll_forward(&mut self, amount: f32);
    /// Begin continuous scrolling at signed `velocity`.
    fn start_continuous_scroll(&mut self, velocity: f32);
    /// Terminate continuous scrolling.
    fn stop_continuous_scroll(&mut self);
    /// Show or hide the reader menu.
    fn toggle_menu(&mut self);
}

/// Resolve an operation name and invoke it, applying inversion first.
///
/// The [`UNBOUND`] sentinel and names outside the catalog resolve to
/// nothing: the former silently (it is the documented way to disable a
/// phase), the latter with a warning, since it usually means the persisted
/// data predates an operation rename.
pub fn invoke_by_name(name: &str, param: f32, inverted: bool, ops: &mut dyn ReaderOps) {
    if name == UNBOUND {
        return;
    }
    let Some(op) = Operation::from_name(name) else {
        tracing::warn!(name, "ignoring unknown operation name");
        return;
    };
    let op = if inverted { op.inverted() } else { op };
    op.apply(param, ops);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tally {
        backward: u32,
        forward: u32,
        toggles: u32,
        last_param: f32,
    }

    impl ReaderOps for Tally {
        fn move_backward(&mut self, amount: f32) {
            self.backward += 1;
            self.last_param = amount;
        }
        fn move_forward(&mut self, amount: f32) {
            self.forward += 1;
            self.last_param = amount;
        }
        fn smooth_scroll_backward(&mut self, _amount: f32) {}
        fn smooth_scroll_forward(&mut self, _amount: f32) {}
        fn start_continuous_scroll(&mut self, _velocity: f32) {}
        fn stop_continuous_scroll(&mut self) {}
        fn toggle_menu(&mut self) {
            self.toggles += 1;
        }
    }

    #[test]
    fn test_name_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("N/A"), None);
        assert_eq!(Operation::from_name("movebackward"), None);
    }

    #[test]
    fn test_inversion_pairs() {
        assert_eq!(Operation::MoveBackward.inverted(), Operation::MoveForward);
        assert_eq!(Operation::MoveForward.inverted(), Operation::MoveBackward);
        assert_eq!(
            Operation::SmoothScrollBackward.inverted(),
            Operation::SmoothScrollForward
        );
        assert_eq!(Operation::ToggleMenu.inverted(), Operation::ToggleMenu);
        assert_eq!(
            Operation::StartContinuousScroll.inverted(),
            Operation::StartContinuousScroll
        );
    }

    #[test]
    fn test_inverted_backward_is_forward() {
        let mut tally = Tally::default();
        invoke_by_name("moveBackward", 0.5, true, &mut tally);
        assert_eq!(tally.forward, 1);
        assert_eq!(tally.backward, 0);
        assert_eq!(tally.last_param, 0.5);
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let mut tally = Tally::default();
        invoke_by_name("warpSpeed", 1.0, false, &mut tally);
        invoke_by_name("N/A", 1.0, false, &mut tally);
        assert_eq!(tally.backward + tally.forward + tally.toggles, 0);
    }

    #[test]
    fn test_parameterless_invocation() {
        let mut tally = Tally::default();
        invoke_by_name("toggleMenu", 42.0, false, &mut tally);
        assert_eq!(tally.toggles, 1);
        assert!(!Operation::ToggleMenu.takes_param());
        assert!(Operation::StartContinuousScroll.takes_param());
    }

    #[test]
    fn test_bindable_names_resolve() {
        for name in bindable_names() {
            if *name == UNBOUND {
                continue;
            }
            assert!(Operation::from_name(name).is_some(), "{name} should resolve");
        }
    }
}
