//! In-memory implementation of the `SettingsStore` port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::command::domain::{ChannelScope, DeleteScope, PrefixTarget, Splat};
use crate::command::ports::{SettingsResult, SettingsStore, SettingsStoreError};

/// In-memory implementation of [`SettingsStore`].
///
/// Thread-safe via internal [`RwLock`]. Settings are lost when the store is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    state: Arc<RwLock<SettingsState>>,
}

#[derive(Debug, Default)]
struct SettingsState {
    server_prefixes: HashMap<String, String>,
    channel_prefixes: HashMap<ChannelScope, String>,
    splats: HashMap<(ChannelScope, String), Splat>,
    flavour: HashMap<ChannelScope, bool>,
}

impl SettingsState {
    fn remove_channel(&mut self, scope: &ChannelScope) {
        self.channel_prefixes.remove(scope);
        self.flavour.remove(scope);
        self.splats.retain(|(stored, _), _| stored != scope);
    }

    fn remove_server(&mut self, guild: &str) {
        self.server_prefixes.remove(guild);
        self.channel_prefixes.retain(|stored, _| stored.guild != guild);
        self.flavour.retain(|stored, _| stored.guild != guild);
        self.splats.retain(|(stored, _), _| stored.guild != guild);
    }
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored values across all settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| {
                guard.server_prefixes.len()
                    + guard.channel_prefixes.len()
                    + guard.splats.len()
                    + guard.flavour.len()
            })
            .unwrap_or(0)
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read<T>(&self, view: impl FnOnce(&SettingsState) -> T) -> SettingsResult<T> {
        let guard = self
            .state
            .read()
            .map_err(|error| SettingsStoreError::Unavailable(error.to_string()))?;
        Ok(view(&guard))
    }

    fn write(&self, update: impl FnOnce(&mut SettingsState)) -> SettingsResult<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|error| SettingsStoreError::Unavailable(error.to_string()))?;
        update(&mut guard);
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn prefix(&self, scope: &ChannelScope) -> SettingsResult<Option<String>> {
        self.read(|state| {
            state
                .channel_prefixes
                .get(scope)
                .or_else(|| state.server_prefixes.get(&scope.guild))
                .cloned()
        })
    }

    async fn set_prefix(
        &self,
        scope: &ChannelScope,
        target: PrefixTarget,
        prefix: Option<String>,
    ) -> SettingsResult<()> {
        self.write(|state| match (target, prefix) {
            (PrefixTarget::Channel, Some(value)) => {
                state.channel_prefixes.insert(scope.clone(), value);
            }
            (PrefixTarget::Channel, None) => {
                state.channel_prefixes.remove(scope);
            }
            (PrefixTarget::Server, Some(value)) => {
                state.server_prefixes.insert(scope.guild.clone(), value);
            }
            (PrefixTarget::Server, None) => {
                state.server_prefixes.remove(&scope.guild);
            }
        })
    }

    async fn splat(&self, scope: &ChannelScope, user_id: &str) -> SettingsResult<Option<Splat>> {
        self.read(|state| {
            state
                .splats
                .get(&(scope.clone(), user_id.to_owned()))
                .copied()
        })
    }

    async fn set_splat(
        &self,
        scope: &ChannelScope,
        user_id: &str,
        splat: Splat,
    ) -> SettingsResult<()> {
        self.write(|state| {
            state
                .splats
                .insert((scope.clone(), user_id.to_owned()), splat);
        })
    }

    async fn flavour(&self, scope: &ChannelScope) -> SettingsResult<Option<bool>> {
        self.read(|state| state.flavour.get(scope).copied())
    }

    async fn set_flavour(&self, scope: &ChannelScope, enabled: bool) -> SettingsResult<()> {
        self.write(|state| {
            state.flavour.insert(scope.clone(), enabled);
        })
    }

    async fn delete(
        &self,
        scope: &ChannelScope,
        target: DeleteScope,
        user_id: &str,
    ) -> SettingsResult<()> {
        self.write(|state| match target {
            DeleteScope::User => {
                state.splats.remove(&(scope.clone(), user_id.to_owned()));
            }
            DeleteScope::Channel => state.remove_channel(scope),
            DeleteScope::Server => state.remove_server(&scope.guild),
        })
    }
}
