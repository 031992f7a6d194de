//! Typed name→value store with default reconciliation
//!
//! A `Store<T>` maps string names to values of a single type and merges
//! freshly declared defaults against previously persisted entries: an
//! existing value wins unless the caller explicitly forces an overwrite.
//! The whole map round-trips through a JSON object file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PrefError;
use crate::persistence::{self, LoadOutcome};

/// Reconciler callback: declares the full set of default entries for a store.
///
/// Invoked by [`Store::reconcile`] with the overwrite flag, and expected to
/// call [`Store::declare_default`] once per known default key.
pub type Reconciler<T> = Box<dyn Fn(&mut Store<T>, bool)>;

/// Name→value map for one value type, with conditional-default merging and
/// JSON file persistence.
pub struct Store<T> {
    entries: BTreeMap<String, T>,
    reconciler: Option<Reconciler<T>>,
}

impl<T> Store<T> {
    /// Empty store with no reconciler.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            reconciler: None,
        }
    }

    /// Empty store with a reconciler registered up front.
    pub fn with_reconciler<F>(reconciler: F) -> Self
    where
        F: Fn(&mut Store<T>, bool) + 'static,
    {
        let mut store = Self::new();
        store.set_reconciler(reconciler);
        store
    }

    /// Register the reconciler callback.
    ///
    /// The first registration wins; once set the reconciler is fixed for the
    /// lifetime of the store and later calls are ignored.
    pub fn set_reconciler<F>(&mut self, reconciler: F)
    where
        F: Fn(&mut Store<T>, bool) + 'static,
    {
        if self.reconciler.is_none() {
            self.reconciler = Some(Box::new(reconciler));
        }
    }

    /// Insert `value` under `name` if `overwrite` is set or `name` is absent.
    ///
    /// This is the merge policy: previously persisted values win unless the
    /// caller forces the overwrite. The existing value is never compared for
    /// equality.
    pub fn declare_default(&mut self, name: impl Into<String>, value: T, overwrite: bool) {
        let name = name.into();
        if overwrite || !self.entries.contains_key(&name) {
            self.entries.insert(name, value);
        }
    }

    /// Invoke the registered reconciler with `overwrite`.
    ///
    /// The reconciler is taken out of the store for the duration of the call
    /// so it can mutate the store directly; a re-entrant `reconcile` from
    /// inside a reconciler therefore reports [`PrefError::NoReconciler`].
    pub fn reconcile(&mut self, overwrite: bool) -> Result<(), PrefError> {
        let reconciler = self.reconciler.take().ok_or(PrefError::NoReconciler)?;
        reconciler(self, overwrite);
        self.reconciler = Some(reconciler);
        Ok(())
    }

    /// Value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Unconditional insert, bypassing the merge policy.
    pub fn set(&mut self, name: impl Into<String>, value: T) {
        self.entries.insert(name.into(), value);
    }

    /// Remove the entry under `name`, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> {
    /// Load entries from the JSON object file at `path`.
    ///
    /// The document is parsed in full before anything is applied, then each
    /// parsed pair inserts or overwrites the in-memory entry under the same
    /// name; entries not named in the file are kept. A missing or unopenable
    /// file reads as an empty document ([`LoadOutcome::Missing`], no error).
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, PrefError> {
        let path = path.as_ref();
        match persistence::read_entries(path)? {
            Some(parsed) => {
                let count = parsed.len();
                for (name, value) in parsed {
                    self.entries.insert(name, value);
                }
                log::info!("Loaded {} entries from {}", count, path.display());
                Ok(LoadOutcome::Loaded(count))
            }
            None => {
                log::info!("No file at {}, treating as empty", path.display());
                Ok(LoadOutcome::Missing)
            }
        }
    }

    /// Write all entries to `path` as a JSON object, truncating any existing
    /// file. Keys are written in sorted order with 2-space indentation.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PrefError> {
        let path = path.as_ref();
        persistence::write_entries(path, &self.entries)?;
        log::info!("Saved {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}
