//! Composition-root registry for the game's data stores
//!
//! One store per persisted value type: generic configuration strings and
//! user key bindings. The host builds a single registry at startup and
//! passes it by reference to whatever needs it; there is no global instance.

use std::path::Path;

use crate::error::PrefError;
use crate::keybinding::KeyBinding;
use crate::store::Store;

/// File name for the string-settings store inside a data directory.
pub const CONFIG_FILE: &str = "config.json";
/// File name for the key-binding store inside a data directory.
pub const KEYS_FILE: &str = "keys.json";

/// Owns the per-type stores for one game instance.
#[derive(Default)]
pub struct PrefRegistry {
    settings: Store<String>,
    bindings: Store<KeyBinding>,
}

impl PrefRegistry {
    /// Registry with both stores empty and no reconcilers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generic game configuration (string values).
    pub fn settings(&self) -> &Store<String> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Store<String> {
        &mut self.settings
    }

    /// User key bindings.
    pub fn bindings(&self) -> &Store<KeyBinding> {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut Store<KeyBinding> {
        &mut self.bindings
    }

    /// Reconcile both stores against their declared defaults.
    pub fn reconcile_all(&mut self, overwrite: bool) -> Result<(), PrefError> {
        self.settings.reconcile(overwrite)?;
        self.bindings.reconcile(overwrite)
    }

    /// Load both stores from their conventional files under `dir`.
    ///
    /// Missing files read as empty documents, so a fresh data directory
    /// loads cleanly.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), PrefError> {
        let dir = dir.as_ref();
        self.settings.load(dir.join(CONFIG_FILE))?;
        self.bindings.load(dir.join(KEYS_FILE))?;
        Ok(())
    }

    /// Save both stores to their conventional files under `dir`.
    pub fn save_dir(&self, dir: impl AsRef<Path>) -> Result<(), PrefError> {
        let dir = dir.as_ref();
        self.settings.save(dir.join(CONFIG_FILE))?;
        self.bindings.save(dir.join(KEYS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_defaults() -> PrefRegistry {
        let mut registry = PrefRegistry::new();
        registry.settings_mut().set_reconciler(|store, force| {
            store.declare_default("lang", "en".to_string(), force);
            store.declare_default("volume", "0.8".to_string(), force);
        });
        registry.bindings_mut().set_reconciler(|store, force| {
            store.declare_default("jump", KeyBinding::key(57), force);
            store.declare_default("left", KeyBinding::key(0), force);
            store.declare_default("right", KeyBinding::key(3), force);
        });
        registry
    }

    #[test]
    fn test_reconcile_all_populates_both_stores() {
        let mut registry = registry_with_defaults();
        registry.reconcile_all(false).unwrap();
        assert_eq!(registry.settings().len(), 2);
        assert_eq!(registry.bindings().len(), 3);
    }

    #[test]
    fn test_reconcile_all_without_reconcilers_errors() {
        let mut registry = PrefRegistry::new();
        assert!(matches!(
            registry.reconcile_all(false),
            Err(PrefError::NoReconciler)
        ));
    }

    #[test]
    fn test_dir_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut registry = registry_with_defaults();
        registry.reconcile_all(false).unwrap();
        registry.save_dir(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());
        assert!(dir.path().join(KEYS_FILE).exists());

        let mut fresh = PrefRegistry::new();
        fresh.load_dir(dir.path()).unwrap();
        assert_eq!(fresh.settings().get("lang"), Some(&"en".to_string()));
        assert_eq!(fresh.bindings().get("jump"), Some(&KeyBinding::key(57)));
        assert_eq!(fresh.bindings().len(), 3);
    }

    #[test]
    fn test_load_dir_from_empty_dir_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = PrefRegistry::new();
        registry.load_dir(dir.path()).unwrap();
        assert!(registry.settings().is_empty());
        assert!(registry.bindings().is_empty());
    }

    #[test]
    fn test_persisted_remap_survives_reconcile() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(KEYS_FILE),
            r#"{"jump": [90, -1]}"#,
        )
        .unwrap();

        let mut registry = registry_with_defaults();
        registry.load_dir(dir.path()).unwrap();
        registry.reconcile_all(false).unwrap();

        // The user's remapped jump key wins over the declared default.
        assert_eq!(registry.bindings().get("jump"), Some(&KeyBinding::key(90)));
        assert_eq!(registry.bindings().len(), 3);
    }
}
