//! Dispatch engine: raw key event + press phase → operation invocation
//!
//! The dispatcher holds an immutable snapshot of the binding map and is
//! synchronous end to end: one key event is resolved and invoked to
//! completion before the next arrives. A snapshot may be stale relative to
//! a concurrently completing edit; the next dispatcher built from the
//! store picks up the fresh mapping.

use crate::codec::BindingMap;
use crate::operation::{invoke_by_name, ReaderOps};
use crate::types::{keys, KeyCode, PressPhase};

/// Externally sourced flags sampled per event.
///
/// The reader UI owns all three; the engine only reads them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchContext {
    /// Whether the volume-keys-as-input feature is enabled.
    pub volume_keys_enabled: bool,
    /// User preference: invert direction for volume keys.
    pub volume_keys_inverted: bool,
    /// Whether the reader menu is currently on screen.
    pub menu_visible: bool,
}

/// Resolves key events against a binding-map snapshot.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    bindings: BindingMap,
}

impl Dispatcher {
    /// A dispatcher over a snapshot of the binding map.
    pub fn new(bindings: BindingMap) -> Self {
        Self { bindings }
    }

    /// The snapshot this dispatcher resolves against.
    pub fn bindings(&self) -> &BindingMap {
        &self.bindings
    }

    /// Handle one classified key event.
    ///
    /// Returns whether the event was consumed. An unbound key code is still
    /// consumed (invoking nothing) so the platform does not apply a
    /// conflicting default action. Volume keys are the one exception: when
    /// the volume-key feature is off or the menu is visible they are
    /// rejected outright so the platform keeps its own volume behavior.
    pub fn handle_key(
        &self,
        key: KeyCode,
        phase: PressPhase,
        ctx: DispatchContext,
        ops: &mut dyn ReaderOps,
    ) -> bool {
        let Some(binding) = self.bindings.get(&key) else {
            tracing::trace!(key, "no binding for key, consuming");
            return true;
        };

        let mut inverted = false;
        if matches!(key, keys::VOLUME_UP | keys::VOLUME_DOWN) {
            if !ctx.volume_keys_enabled || ctx.menu_visible {
                tracing::trace!(key, "volume key rejected");
                return false;
            }
            inverted = ctx.volume_keys_inverted;
        }

        let action = binding.action(phase);
        tracing::debug!(key, ?phase, op = %action.op, param = action.param, inverted, "dispatching");
        invoke_by_name(&action.op, action.param, inverted, ops);
        true
    }
}
