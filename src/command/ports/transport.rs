//! Chat transport port.

use async_trait::async_trait;
use thiserror::Error;

use crate::command::domain::ChannelScope;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Where a reply is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The channel the command came from.
    Channel(ChannelScope),
    /// A direct message to a user.
    Direct {
        /// Recipient user ID.
        user_id: String,
    },
}

/// Port for sending text to the chat platform.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends text to a destination.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when delivery fails. Callers log the
    /// failure and carry on; they never retry.
    async fn send(&self, destination: &Destination, content: &str) -> TransportResult<()>;
}

/// Delivery failures reported by the platform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The bot lacks permission to post there.
    #[error("delivery forbidden")]
    Forbidden,

    /// The text could not be encoded for the platform.
    #[error("message encoding failed: {0}")]
    Encoding(String),

    /// Any other platform or network failure.
    #[error("delivery failed: {0}")]
    Http(String),
}
