//! JSON file persistence shared by all store types
//!
//! One JSON object per store per file: entry name → serialized value.
//! Reads parse the whole document before the caller applies anything, so a
//! malformed file never leaves a half-updated store. Writes truncate the
//! target and emit 2-space-indented output with keys in sorted order.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PrefError;

/// Result of a load, distinguishing whether the backing file existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File present and parsed; this many entries were applied.
    Loaded(usize),
    /// File absent or unopenable; the store was left untouched.
    Missing,
}

/// Read the JSON object at `path` into a map.
///
/// Returns `Ok(None)` when the file is missing or cannot be opened; absent
/// and unreadable files alike read as an empty document.
pub(crate) fn read_entries<T>(path: &Path) -> Result<Option<BTreeMap<String, T>>, PrefError>
where
    T: DeserializeOwned,
{
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Ok(None),
    };

    let entries = serde_json::from_str(&text).map_err(|source| PrefError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(entries))
}

/// Write `entries` to `path` as a pretty-printed JSON object.
///
/// The parent directory must already exist; it is not created here.
pub(crate) fn write_entries<T>(path: &Path, entries: &BTreeMap<String, T>) -> Result<(), PrefError>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(entries).map_err(|source| PrefError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, source),
    })?;
    fs::write(path, json).map_err(|source| PrefError::Io {
        path: path.to_path_buf(),
        source,
    })
}
