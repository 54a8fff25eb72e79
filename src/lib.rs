//! riffle - key-binding model and dispatch engine for reader navigation
//!
//! This crate provides a data-driven keybinding system that:
//! - Describes one key's behavior across three press phases (short click,
//!   hold, long-press release), each with its own operation and intensity
//! - Round-trips bindings through a compact flat-text format for persistence
//! - Resolves classified key events into navigation operations, with
//!   direction inversion for volume-style keys
//!
//! # Architecture
//!
//! ```text
//! (KeyCode, PressPhase) → Dispatcher → Binding → Operation → ReaderOps
//!                              ↑
//!         BindingStore ←→ BindingPort (flat-text codec)
//! ```
//!
//! The reader UI injects its scroll/menu behavior as a [`ReaderOps`]
//! implementation and its storage as a [`BindingPort`]; the engine owns
//! only the mapping data and the resolution rules.

pub mod binding;
pub mod codec;
pub mod config_paths;
pub mod defaults;
pub mod dispatch;
pub mod operation;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use binding::{Binding, PhaseAction, UNBOUND};
pub use codec::{parse_map, serialize_map, BindingMap, CodecError};
pub use defaults::{default_bindings, empty_bindings, load_or_default};
pub use dispatch::{DispatchContext, Dispatcher};
pub use operation::{bindable_names, invoke_by_name, Operation, ReaderOps};
pub use store::{BindingPort, BindingStore, FilePort, MemoryPort, PortError, StoreError};
pub use types::{keys, KeyCode, PressPhase};
