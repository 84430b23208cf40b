//! Dicecord: a dice-rolling chat bot for Chronicles of Darkness games.
//!
//! The crate interprets free-form chat messages as roll and settings
//! commands, plans rolls for an external roll engine, and renders replies
//! addressed to the invoking user.
//!
//! # Architecture
//!
//! Dicecord follows hexagonal architecture principles:
//!
//! - **Domain**: Pure command interpretation with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the roll engine, settings and transport
//! - **Adapters**: Concrete implementations of ports (in-memory, console, seeded dice)
//!
//! # Modules
//!
//! - [`command`]: Message routing, roll planning and reply rendering
//! - [`config`]: Bot configuration loading

pub mod command;
pub mod config;
