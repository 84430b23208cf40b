//! Chat command interpretation.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: pure types and extraction logic ([`domain::RollRequest`],
//!   [`domain::PoolExpression`], [`domain::DiceAmountExtractor`])
//! - **Router**: ordered classification of message text ([`router::CommandRouter`])
//! - **Ports**: the roll engine, settings store and transport
//! - **Services**: handlers and the per-message [`services::CommandDispatcher`]
//! - **Render**: deferred binding of the author mention ([`render::ResponseRenderer`])
//! - **Adapters**: in-memory, console and reference implementations of the ports
//!
//! # Example
//!
//! ```
//! use dicecord::command::domain::{RollPlan, RollRequestBuilder, RollVariant};
//!
//! let builder = RollRequestBuilder::for_bot("1234");
//! let plan = builder.plan("<@1234> roll 5 + 2 - 1", RollVariant::Standard, "ana");
//!
//! let RollPlan::Dispatch { request, pool } = plan else {
//!     panic!("expected a dispatchable roll");
//! };
//! assert_eq!(request.dice_amount, 6);
//! assert_eq!(pool.map(|evaluated| evaluated.expression).as_deref(), Some("5+2-1"));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod render;
pub mod router;
pub mod services;

#[cfg(test)]
mod tests;
