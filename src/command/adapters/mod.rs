//! Adapter implementations of the command ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemorySettingsStore`]: thread-safe in-memory settings
//! - [`memory::RecordingTransport`]: captures replies for assertions
//! - [`console::ConsoleTransport`]: prints replies to standard output
//! - [`seeded_engine::SeededRollEngine`]: reference dice roller

pub mod console;
pub mod memory;
pub mod seeded_engine;
