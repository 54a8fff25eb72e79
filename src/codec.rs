//! Map-level wire codec: semicolon-joined `keyCode:record` entries
//!
//! Unlike the per-record codec, this layer is strict: an entry missing its
//! `:` separator or carrying a non-integer key code fails the whole parse.
//! A mapping that cannot be parsed is unusable as a whole; callers fall
//! back to the seed map (see [`crate::defaults::load_or_default`]).

use std::collections::BTreeMap;

use thiserror::Error;

use crate::binding::Binding;
use crate::types::KeyCode;

/// The full key → binding mapping.
///
/// A `BTreeMap` keeps serialization deterministic (entries sorted by key
/// code), which makes the map round-trip byte-stable.
pub type BindingMap = BTreeMap<KeyCode, Binding>;

/// A map entry that could not be decoded.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Entry had no `keyCode:record` separator.
    #[error("binding entry `{0}` is missing the `:` separator")]
    MissingSeparator(String),
    /// Entry key code was not an integer.
    #[error("binding entry `{entry}` has an invalid key code: {source}")]
    BadKeyCode {
        entry: String,
        source: std::num::ParseIntError,
    },
}

/// Serialize a full mapping. The empty map serializes to the empty string.
pub fn serialize_map(map: &BindingMap) -> String {
    map.iter()
        .map(|(code, binding)| format!("{}:{}", code, binding.serialize()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse a full mapping.
///
/// Individual records inside each entry are still parsed best-effort (see
/// [`Binding::parse`]); only the entry framing itself is strict.
pub fn parse_map(serialized: &str) -> Result<BindingMap, CodecError> {
    let mut map = BindingMap::new();
    if serialized.is_empty() {
        return Ok(map);
    }
    for entry in serialized.split(';') {
        let (code, record) = entry
            .split_once(':')
            .ok_or_else(|| CodecError::MissingSeparator(entry.to_string()))?;
        let code: KeyCode = code.trim().parse().map_err(|source| CodecError::BadKeyCode {
            entry: entry.to_string(),
            source,
        })?;
        // Last write wins on duplicate key codes.
        map.insert(code, Binding::parse(record));
    }
    Ok(map)
}
