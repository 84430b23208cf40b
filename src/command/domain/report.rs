//! Operator-facing failure reports.

use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

use super::{IncomingMessage, MessageLocation};

/// Everything an operator needs to trace a failed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// When the failure was recorded.
    pub time: DateTime<Utc>,
    /// Message text.
    pub message: String,
    /// Server name, or `private`.
    pub server: String,
    /// Channel name, or `private`.
    pub channel: String,
    /// Author account name.
    pub author: String,
    /// Failure description.
    pub error: String,
}

impl ErrorReport {
    /// Builds a report for a message, stamped with the clock's current time.
    #[must_use]
    pub fn new(message: &IncomingMessage, error: &dyn std::error::Error, clock: &impl Clock) -> Self {
        let (server, channel) = match &message.location {
            MessageLocation::Channel(scope) => (scope.guild.clone(), scope.channel.clone()),
            MessageLocation::Private => ("private".to_owned(), "private".to_owned()),
        };
        Self {
            time: clock.utc(),
            message: message.content.clone(),
            server,
            channel,
            author: message.author.name.clone(),
            error: error.to_string(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time: {}", self.time)?;
        writeln!(f, "Message: {}", self.message)?;
        writeln!(f, "Server: {}", self.server)?;
        writeln!(f, "Channel: {}", self.channel)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Error:")?;
        write!(f, "{}", self.error)
    }
}
