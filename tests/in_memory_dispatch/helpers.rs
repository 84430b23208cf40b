//! Shared test helpers for dispatch integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use dicecord::command::{
    adapters::memory::{InMemorySettingsStore, RecordingTransport},
    domain::{Author, ChannelScope, DeleteScope, IncomingMessage, PrefixTarget, RollRequest, Splat},
    ports::{RollEngine, SettingsResult, SettingsStore, SettingsStoreError},
    services::CommandDispatcher,
};
use dicecord::config::BotConfig;
use mockable::DefaultClock;
use rstest::fixture;

/// The bot's user ID in every test.
pub const BOT_ID: &str = "1234";

/// Roll engine returning one predictable line per call.
#[derive(Debug, Default)]
pub struct ScriptedEngine;

impl RollEngine for ScriptedEngine {
    fn roll_chance(&self, paradox: bool) -> Vec<String> {
        vec![format!("chance die (paradox: {paradox})")]
    }

    fn roll_set(&self, request: &RollRequest) -> Vec<String> {
        vec![format!(
            "{} rolled {} dice ({})",
            request.sender_nick, request.dice_amount, request.again
        )]
    }

    fn special_roll_set(&self, request: &RollRequest) -> Vec<String> {
        vec![format!(
            "{} rolled {} special dice",
            request.sender_nick, request.dice_amount
        )]
    }

    fn roll_special(&self) -> String {
        "single die".to_owned()
    }
}

/// Settings store whose every operation fails.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn failure<T>() -> SettingsResult<T> {
        Err(SettingsStoreError::Unavailable("store offline".to_owned()))
    }
}

#[async_trait]
impl SettingsStore for UnavailableStore {
    async fn prefix(&self, _scope: &ChannelScope) -> SettingsResult<Option<String>> {
        Self::failure()
    }

    async fn set_prefix(
        &self,
        _scope: &ChannelScope,
        _target: PrefixTarget,
        _prefix: Option<String>,
    ) -> SettingsResult<()> {
        Self::failure()
    }

    async fn splat(&self, _scope: &ChannelScope, _user_id: &str) -> SettingsResult<Option<Splat>> {
        Self::failure()
    }

    async fn set_splat(
        &self,
        _scope: &ChannelScope,
        _user_id: &str,
        _splat: Splat,
    ) -> SettingsResult<()> {
        Self::failure()
    }

    async fn flavour(&self, _scope: &ChannelScope) -> SettingsResult<Option<bool>> {
        Self::failure()
    }

    async fn set_flavour(&self, _scope: &ChannelScope, _enabled: bool) -> SettingsResult<()> {
        Self::failure()
    }

    async fn delete(
        &self,
        _scope: &ChannelScope,
        _target: DeleteScope,
        _user_id: &str,
    ) -> SettingsResult<()> {
        Self::failure()
    }
}

/// Dispatcher wired to in-memory adapters.
pub type TestDispatcher<S = InMemorySettingsStore> =
    CommandDispatcher<ScriptedEngine, S, RecordingTransport, DefaultClock>;

/// A dispatcher together with handles to its adapters.
pub struct Harness<S = InMemorySettingsStore>
where
    S: SettingsStore,
{
    /// The dispatcher under test.
    pub dispatcher: TestDispatcher<S>,
    /// The settings store the dispatcher writes to.
    pub store: Arc<S>,
    /// Transport recording every reply.
    pub transport: Arc<RecordingTransport>,
}

/// Returns the configuration used by every test.
#[must_use]
pub fn config() -> BotConfig {
    BotConfig {
        bot_id: BOT_ID.to_owned(),
        ..BotConfig::default()
    }
}

/// Builds a harness around the given store and transport.
#[must_use]
pub fn harness_with<S: SettingsStore>(store: S, transport: RecordingTransport) -> Harness<S> {
    let store = Arc::new(store);
    let transport = Arc::new(transport);
    Harness {
        dispatcher: CommandDispatcher::new(
            &config(),
            Arc::new(ScriptedEngine),
            Arc::clone(&store),
            Arc::clone(&transport),
            Arc::new(DefaultClock),
        ),
        store,
        transport,
    }
}

/// Provides a dispatcher over a fresh in-memory store.
#[fixture]
pub fn harness() -> Harness {
    harness_with(InMemorySettingsStore::new(), RecordingTransport::new())
}

/// Provides the channel every test posts in.
#[fixture]
pub fn scope() -> ChannelScope {
    ChannelScope::new("Moonhaven", "rolls")
}

/// Returns the default human author.
#[must_use]
pub fn ana() -> Author {
    Author::new("42", "Ana")
}

/// Builds a channel message that mentions the bot.
#[must_use]
pub fn mention(text: &str, scope: &ChannelScope) -> IncomingMessage {
    IncomingMessage::in_channel(format!("<@{BOT_ID}> {text}"), ana(), scope.clone())
        .mentioning_bot()
}
