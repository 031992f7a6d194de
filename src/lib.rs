//! prefstore - JSON-backed settings and key-binding persistence for games
//!
//! Core modules:
//! - `store`: Typed name→value map with default reconciliation
//! - `persistence`: JSON object file read/write
//! - `keybinding`: 2-integer key-binding record
//! - `registry`: Composition-root owner of the per-type stores
//! - `error`: Error taxonomy (parse / I/O / missing reconciler)
//!
//! The host application builds a [`PrefRegistry`] at startup, registers a
//! reconciler per store declaring its default entries, loads any persisted
//! files, then reconciles so missing defaults are filled in without
//! clobbering what the user already saved.

pub mod error;
pub mod keybinding;
pub mod persistence;
pub mod registry;
pub mod store;

pub use error::PrefError;
pub use keybinding::{KeyBinding, UNBOUND};
pub use persistence::LoadOutcome;
pub use registry::{CONFIG_FILE, KEYS_FILE, PrefRegistry};
pub use store::{Reconciler, Store};
