//! Domain types for command interpretation.
//!
//! Everything here is pure: no I/O, no shared state. Types are created per
//! incoming message and dropped once it has been handled.

mod again;
mod category;
mod error;
pub mod extract;
mod message;
pub mod pool;
mod report;
mod request;
mod settings;

pub use again::AgainThreshold;
pub use category::{CommandCategory, HelpTopic};
pub use error::{PoolExpressionError, RollRejection};
pub use extract::{AddresseeSplit, BotIdSplit, DiceAmountExtractor, ModifierFlags};
pub use message::{Author, ChannelScope, IncomingMessage, MessageId, MessageLocation, RawCommand};
pub use pool::{EvaluatedPool, MAX_POOL_TERMS, PoolExpression};
pub use report::ErrorReport;
pub use request::{DEFAULT_MAX_DICE, RollPlan, RollRequest, RollRequestBuilder, RollVariant};
pub use settings::{DeleteScope, PrefixTarget, Splat};
