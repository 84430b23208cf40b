//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit tests and local runs without external services.

mod settings;
mod transport;

pub use settings::InMemorySettingsStore;
pub use transport::{RecordingTransport, SentMessage};
