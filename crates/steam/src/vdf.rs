//! Text KeyValues (VDF) access for `libraryfolders.vdf` and `*.acf` files.
//!
//! Parsing is done by `keyvalues-parser`; this module adds file reading,
//! error mapping and the case-insensitive lookups the client itself uses.

use std::fs;
use std::path::Path;

pub use keyvalues_parser::{Obj, Value, Vdf};

use crate::SteamError;

/// Reads a VDF file as UTF-8 text.
pub fn read(path: &Path) -> Result<String, SteamError> {
    fs::read_to_string(path)
        .map_err(|e| SteamError::Io(format!("failed to read {}: {e}", path.display())))
}

/// Parses text VDF into its single top-level pair.
pub fn parse(text: &str) -> Result<Vdf<'_>, SteamError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Vdf::parse(text).map_err(|e| SteamError::Vdf(e.to_string()))
}

/// Returns the top-level object if its key is `key` (ASCII case-insensitive).
pub fn root_obj<'a, 't>(vdf: &'a Vdf<'t>, key: &str) -> Option<&'a Obj<'t>> {
    if !vdf.key.eq_ignore_ascii_case(key) {
        return None;
    }
    as_obj(&vdf.value)
}

/// Looks up a key, exact match first, then ASCII case-insensitive. A key
/// repeated at the same level resolves to its last value.
pub fn lookup<'a, 't>(obj: &'a Obj<'t>, key: &str) -> Option<&'a Value<'t>> {
    obj.iter()
        .find(|(k, _)| &***k == key)
        .or_else(|| obj.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)))
        .and_then(|(_, values)| values.last())
}

/// Looks up a scalar string value.
pub fn lookup_str<'a>(obj: &'a Obj<'_>, key: &str) -> Option<&'a str> {
    lookup(obj, key).and_then(as_str)
}

/// Looks up a nested object.
pub fn lookup_obj<'a, 't>(obj: &'a Obj<'t>, key: &str) -> Option<&'a Obj<'t>> {
    lookup(obj, key).and_then(as_obj)
}

pub fn as_str<'a>(value: &'a Value<'_>) -> Option<&'a str> {
    match value {
        Value::Str(s) => Some(&**s),
        Value::Obj(_) => None,
    }
}

pub fn as_obj<'a, 't>(value: &'a Value<'t>) -> Option<&'a Obj<'t>> {
    match value {
        Value::Obj(obj) => Some(obj),
        Value::Str(_) => None,
    }
}
