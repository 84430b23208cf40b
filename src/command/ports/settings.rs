//! Settings store port.
//!
//! Per-scope prefix, splat and flavour settings live outside this crate.
//! Handlers read a snapshot once per message and write through this port.

use async_trait::async_trait;
use thiserror::Error;

use crate::command::domain::{ChannelScope, DeleteScope, PrefixTarget, Splat};

/// Result type for settings store operations.
pub type SettingsResult<T> = Result<T, SettingsStoreError>;

/// Port for per-scope bot settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the effective prefix for a channel: its own prefix, else the
    /// server-wide prefix.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when the store cannot be read.
    async fn prefix(&self, scope: &ChannelScope) -> SettingsResult<Option<String>>;

    /// Sets or clears (`None`) the prefix for a channel or its server.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when the store cannot be written.
    async fn set_prefix(
        &self,
        scope: &ChannelScope,
        target: PrefixTarget,
        prefix: Option<String>,
    ) -> SettingsResult<()>;

    /// Returns a user's splat in a channel.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when the store cannot be read.
    async fn splat(&self, scope: &ChannelScope, user_id: &str) -> SettingsResult<Option<Splat>>;

    /// Stores a user's splat in a channel.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when the store cannot be written.
    async fn set_splat(&self, scope: &ChannelScope, user_id: &str, splat: Splat)
    -> SettingsResult<()>;

    /// Returns whether flavour text is enabled in a channel.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when the store cannot be read.
    async fn flavour(&self, scope: &ChannelScope) -> SettingsResult<Option<bool>>;

    /// Enables or disables flavour text in a channel.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when the store cannot be written.
    async fn set_flavour(&self, scope: &ChannelScope, enabled: bool) -> SettingsResult<()>;

    /// Removes stored settings. `user_id` names the author for
    /// [`DeleteScope::User`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when the store cannot be written.
    async fn delete(
        &self,
        scope: &ChannelScope,
        target: DeleteScope,
        user_id: &str,
    ) -> SettingsResult<()>;
}

/// Errors for settings store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsStoreError {
    /// General storage or adapter failure.
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}
