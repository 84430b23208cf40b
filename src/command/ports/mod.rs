//! Port trait definitions for command handling.
//!
//! Ports are the seams to the collaborators this crate does not own: the
//! roll engine, the settings store and the chat transport.

pub mod roll_engine;
pub mod settings;
pub mod transport;

pub use roll_engine::RollEngine;
pub use settings::{SettingsResult, SettingsStore, SettingsStoreError};
pub use transport::{Destination, Transport, TransportError, TransportResult};
