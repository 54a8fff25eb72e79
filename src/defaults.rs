//! Default bindings and the load-or-default fallback policy
//!
//! The seed map mirrors what the reader ships with on a fresh install:
//! movement keys bound to paired step/smooth-scroll operations, volume-down
//! as a forward pager, and the menu key toggling the menu.

use crate::binding::{Binding, PhaseAction};
use crate::codec::BindingMap;
use crate::operation::Operation;
use crate::store::BindingPort;
use crate::types::keys;

/// Default short-click step, as a fraction of the viewport.
const DEFAULT_CLICK_AMOUNT: f32 = 0.75;
/// Default smooth-scroll amount while held.
const DEFAULT_SCROLL_AMOUNT: f32 = 1.0;

fn backward_pair() -> Binding {
    Binding::new(
        PhaseAction::new(Operation::MoveBackward.name(), DEFAULT_CLICK_AMOUNT),
        PhaseAction::new(Operation::SmoothScrollBackward.name(), DEFAULT_SCROLL_AMOUNT),
        PhaseAction::new(Operation::StopContinuousScroll.name(), 0.0),
    )
}

fn forward_pair() -> Binding {
    Binding::new(
        PhaseAction::new(Operation::MoveForward.name(), DEFAULT_CLICK_AMOUNT),
        PhaseAction::new(Operation::SmoothScrollForward.name(), DEFAULT_SCROLL_AMOUNT),
        PhaseAction::new(Operation::StopContinuousScroll.name(), 0.0),
    )
}

/// An empty mapping, for building a binding set from scratch.
pub fn empty_bindings() -> BindingMap {
    BindingMap::new()
}

/// The hardcoded seed mapping used when nothing has been persisted yet.
pub fn default_bindings() -> BindingMap {
    let mut map = BindingMap::new();

    for key in [keys::W, keys::A, keys::DPAD_UP, keys::DPAD_LEFT] {
        map.insert(key, backward_pair());
    }
    for key in [keys::S, keys::D, keys::DPAD_DOWN, keys::DPAD_RIGHT] {
        map.insert(key, forward_pair());
    }

    map.insert(
        keys::VOLUME_DOWN,
        Binding::short_only(Operation::MoveForward.name(), DEFAULT_CLICK_AMOUNT),
    );
    map.insert(
        keys::MENU,
        Binding::short_only(Operation::ToggleMenu.name(), 0.0),
    );

    map
}

/// Load the persisted mapping, falling back to [`default_bindings`] when
/// the port fails or the persisted text cannot be parsed.
///
/// This is the caller-side policy for an unusable mapping: a map-level
/// codec failure or a missing/unreadable backing store both land here, and
/// both mean "start from the seed map".
pub fn load_or_default(port: &dyn BindingPort) -> BindingMap {
    match port.load() {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(error = %e, "could not load persisted keybindings, using defaults");
            default_bindings()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPort;

    #[test]
    fn test_seed_map_contents() {
        let map = default_bindings();
        assert_eq!(map.len(), 10);

        let w = &map[&keys::W];
        assert_eq!(w.short.op, "moveBackward");
        assert_eq!(w.short.param, 0.75);
        assert_eq!(w.hold.op, "smoothScrollBackward");
        assert_eq!(w.release.op, "stopContinuousScroll");

        let s = &map[&keys::S];
        assert_eq!(s.short.op, "moveForward");

        let volume = &map[&keys::VOLUME_DOWN];
        assert_eq!(volume.short.op, "moveForward");
        assert!(volume.hold.is_unbound());

        assert_eq!(map[&keys::MENU].short.op, "toggleMenu");
    }

    #[test]
    fn test_seed_map_round_trips() {
        let map = default_bindings();
        let parsed = crate::codec::parse_map(&crate::codec::serialize_map(&map)).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_load_or_default_passes_through() {
        let port = MemoryPort::with_map(empty_bindings());
        assert!(load_or_default(&port).is_empty());
    }
}
