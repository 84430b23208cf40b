//! Recording transport for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::command::ports::{Destination, Transport, TransportError, TransportResult};

/// A message captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Where the message was sent.
    pub destination: Destination,
    /// Message text.
    pub content: String,
}

/// Transport that records outbound messages instead of delivering them.
///
/// Can be switched to fail every send with a fixed error.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    failure: Option<TransportError>,
}

impl RecordingTransport {
    /// Creates a transport that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that rejects every message with `failure`.
    #[must_use]
    pub fn failing(failure: TransportError) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(failure),
        }
    }

    /// Returns the messages recorded so far.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, destination: &Destination, content: &str) -> TransportResult<()> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        let mut guard = self
            .sent
            .lock()
            .map_err(|error| TransportError::Http(error.to_string()))?;
        guard.push(SentMessage {
            destination: destination.clone(),
            content: content.to_owned(),
        });
        Ok(())
    }
}
