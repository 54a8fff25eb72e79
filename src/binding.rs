//! The binding record: one key's three-phase action, and its wire codec
//!
//! A record serializes to six comma-joined fields in fixed order:
//!
//! ```text
//! shortOp,shortParam,holdOp,holdParam,releaseOp,releaseParam
//! ```
//!
//! Parsing is total: a corrupt or truncated record always yields a usable
//! record with per-field defaults, never an error. The map-level codec in
//! [`crate::codec`] is stricter.

use crate::operation::Operation;
use crate::types::PressPhase;

/// Sentinel operation name for a phase with nothing bound to it.
///
/// An unbound phase resolves to nothing at dispatch time; it is the
/// documented way to disable one phase of a key without deleting the whole
/// binding.
pub const UNBOUND: &str = "N/A";

/// Operation name plus intensity parameter for a single press phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseAction {
    /// Wire name of the bound operation, or [`UNBOUND`].
    pub op: String,
    /// Intensity parameter; discarded by parameterless operations.
    pub param: f32,
}

impl PhaseAction {
    /// Bind an operation with a parameter.
    pub fn new(op: impl Into<String>, param: f32) -> Self {
        Self {
            op: op.into(),
            param,
        }
    }

    /// An action bound to nothing.
    pub fn unbound() -> Self {
        Self::new(UNBOUND, 0.0)
    }

    /// Whether this phase is disabled.
    pub fn is_unbound(&self) -> bool {
        self.op == UNBOUND
    }
}

impl Default for PhaseAction {
    fn default() -> Self {
        Self::unbound()
    }
}

/// The action descriptor bound to one key code.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Fired once on a brief press-and-release.
    pub short: PhaseAction,
    /// Fired while the key is held past the hold threshold.
    pub hold: PhaseAction,
    /// Fired once when a long-held key is released.
    pub release: PhaseAction,
}

impl Binding {
    /// Create a fully specified binding.
    pub fn new(short: PhaseAction, hold: PhaseAction, release: PhaseAction) -> Self {
        Self {
            short,
            hold,
            release,
        }
    }

    /// A binding that only reacts to short clicks.
    ///
    /// Hold is left unbound; release keeps its stop-motion default so a
    /// long press can never leave continuous scrolling running.
    pub fn short_only(op: impl Into<String>, param: f32) -> Self {
        Self {
            short: PhaseAction::new(op, param),
            ..Self::default()
        }
    }

    /// The action for a press phase.
    pub fn action(&self, phase: PressPhase) -> &PhaseAction {
        match phase {
            PressPhase::Short => &self.short,
            PressPhase::Hold => &self.hold,
            PressPhase::Release => &self.release,
        }
    }

    /// Serialize to the six-field wire form. Never fails.
    pub fn serialize(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.short.op,
            self.short.param,
            self.hold.op,
            self.hold.param,
            self.release.op,
            self.release.param
        )
    }

    /// Parse the six-field wire form, substituting per-field defaults for
    /// anything missing or malformed. Never fails.
    ///
    /// An op-name position is kept only when it names a catalog operation
    /// or is [`UNBOUND`]; stray text falls back to that field's default, so
    /// `parse("")` and `parse("garbage")` both yield `Binding::default()`.
    pub fn parse(serialized: &str) -> Binding {
        let defaults = Binding::default();
        let parts: Vec<&str> = serialized.split(',').collect();

        let op = |idx: usize, default: &str| -> String {
            match parts.get(idx).map(|s| s.trim()) {
                Some(s) if s == UNBOUND || Operation::from_name(s).is_some() => s.to_string(),
                Some(s) if !s.is_empty() => {
                    tracing::debug!(field = idx, text = s, "unrecognized operation name, using default");
                    default.to_string()
                }
                _ => default.to_string(),
            }
        };
        let param = |idx: usize| -> f32 {
            parts
                .get(idx)
                .and_then(|s| s.trim().parse::<f32>().ok())
                .unwrap_or(0.0)
        };

        Binding {
            short: PhaseAction::new(op(0, &defaults.short.op), param(1)),
            hold: PhaseAction::new(op(2, &defaults.hold.op), param(3)),
            release: PhaseAction::new(op(4, &defaults.release.op), param(5)),
        }
    }
}

impl Default for Binding {
    /// Short and hold unbound; release falls back to stopping continuous
    /// motion so a partially specified record can never strand a scroll.
    fn default() -> Self {
        Self {
            short: PhaseAction::unbound(),
            hold: PhaseAction::unbound(),
            release: PhaseAction::new(Operation::StopContinuousScroll.name(), 0.0),
        }
    }
}
