//! Console transport writing replies to standard output.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::command::ports::{Destination, Transport, TransportError, TransportResult};

/// Transport that prints each reply, labelled with its destination.
#[derive(Debug)]
pub struct ConsoleTransport {
    stdout: Mutex<tokio::io::Stdout>,
}

impl ConsoleTransport {
    /// Creates a console transport on the process's standard output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    async fn send(&self, destination: &Destination, content: &str) -> TransportResult<()> {
        let label = match destination {
            Destination::Channel(scope) => format!("[{scope}]"),
            Destination::Direct { user_id } => format!("[dm {user_id}]"),
        };
        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(format!("{label}\n{content}\n").as_bytes())
            .await
            .map_err(|error| write_error(&error))?;
        stdout.flush().await.map_err(|error| write_error(&error))
    }
}

fn write_error(error: &std::io::Error) -> TransportError {
    match error.kind() {
        std::io::ErrorKind::InvalidData => TransportError::Encoding(error.to_string()),
        _ => TransportError::Http(error.to_string()),
    }
}
