//! Key-binding record
//!
//! The input layer hands the store a platform key code plus one auxiliary
//! integer slot (an alternate code, `-1` when empty). On disk a binding is
//! always a fixed 2-element array `[code, aux]`, in that order.

use serde::{Deserialize, Serialize};

/// Sentinel for an empty binding slot.
pub const UNBOUND: i32 = -1;

/// A single key binding: platform key code plus auxiliary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct KeyBinding {
    /// Platform key code, as produced by the windowing library.
    pub code: i32,
    /// Auxiliary slot; [`UNBOUND`] when unused.
    pub aux: i32,
}

impl KeyBinding {
    pub fn new(code: i32, aux: i32) -> Self {
        Self { code, aux }
    }

    /// Binding for a single key, auxiliary slot empty.
    pub fn key(code: i32) -> Self {
        Self {
            code,
            aux: UNBOUND,
        }
    }

    /// Whether either slot holds a real code.
    pub fn is_bound(&self) -> bool {
        self.code != UNBOUND || self.aux != UNBOUND
    }
}

impl From<[i32; 2]> for KeyBinding {
    fn from([code, aux]: [i32; 2]) -> Self {
        Self { code, aux }
    }
}

impl From<KeyBinding> for [i32; 2] {
    fn from(binding: KeyBinding) -> Self {
        [binding.code, binding.aux]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_two_element_array() {
        let json = serde_json::to_string(&KeyBinding::key(57)).unwrap();
        assert_eq!(json, "[57,-1]");
    }

    #[test]
    fn test_parses_from_array() {
        let binding: KeyBinding = serde_json::from_str("[3, -1]").unwrap();
        assert_eq!(binding, KeyBinding::key(3));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert!(serde_json::from_str::<KeyBinding>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<KeyBinding>("[1]").is_err());
    }

    #[test]
    fn test_is_bound() {
        assert!(KeyBinding::key(57).is_bound());
        assert!(KeyBinding::new(UNBOUND, 4).is_bound());
        assert!(!KeyBinding::new(UNBOUND, UNBOUND).is_bound());
    }
}
