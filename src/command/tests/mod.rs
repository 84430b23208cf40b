//! Unit tests for the command module.
//!
//! Tests are organised by stage: pool arithmetic, amount extraction, roll
//! planning, routing, rendering and the handler services.

mod memory_store_tests;
mod render_tests;
