//! Application services for command handling.
//!
//! Services orchestrate domain logic and ports: the dispatcher routes each
//! message, and the roll, settings and help handlers produce replies.

mod dispatcher;
mod help;
mod roll;
mod settings;

pub use dispatcher::{CommandDispatcher, DispatchError, DispatchResult, FAILURE_REPLY};
pub use help::{help_reply, help_text};
pub use roll::{RollService, pool_preface};
pub use settings::{SettingsContext, SettingsService};
