//! Per-message command dispatch.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, error, warn};

use super::help::help_reply;
use super::roll::RollService;
use super::settings::{SettingsContext, SettingsService};
use crate::command::domain::{
    CommandCategory, ErrorReport, IncomingMessage, MessageLocation, RollRequestBuilder, RollVariant,
};
use crate::command::ports::{
    Destination, RollEngine, SettingsResult, SettingsStore, SettingsStoreError, Transport,
    TransportError,
};
use crate::command::render::{RenderError, Reply, ResponseRenderer};
use crate::command::router::{CommandRouter, Route};
use crate::config::BotConfig;

/// Text sent when a command fails for reasons outside the user's control.
pub const FAILURE_REPLY: &str = "Something went wrong while handling that command.";

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Downstream failures while handling a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The settings store failed.
    #[error(transparent)]
    Settings(#[from] SettingsStoreError),

    /// A reply could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The transport could not deliver a reply.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Routes incoming messages to handlers and delivers their replies.
///
/// Messages are handled one at a time to completion. The only suspension
/// points are the settings store and the transport; failures there are
/// reported and never retried.
pub struct CommandDispatcher<E, S, T, K>
where
    E: RollEngine,
    S: SettingsStore,
    T: Transport,
    K: Clock + Send + Sync,
{
    bot_id: String,
    rolls: RollService<E>,
    settings: SettingsService<S>,
    store: Arc<S>,
    transport: Arc<T>,
    renderer: ResponseRenderer,
    clock: Arc<K>,
}

impl<E, S, T, K> CommandDispatcher<E, S, T, K>
where
    E: RollEngine,
    S: SettingsStore,
    T: Transport,
    K: Clock + Send + Sync,
{
    /// Creates a dispatcher.
    #[must_use]
    pub fn new(
        config: &BotConfig,
        engine: Arc<E>,
        store: Arc<S>,
        transport: Arc<T>,
        clock: Arc<K>,
    ) -> Self {
        let builder = RollRequestBuilder::for_bot(config.bot_id.clone()).with_max_dice(config.max_dice);
        Self {
            bot_id: config.bot_id.clone(),
            rolls: RollService::new(engine, builder),
            settings: SettingsService::new(Arc::clone(&store)),
            store,
            transport,
            renderer: ResponseRenderer::new(),
            clock,
        }
    }

    /// Decides the reply for a message without rendering or sending it.
    ///
    /// Returns `Ok(None)` when the message gets no response: it came from a
    /// bot, was not addressed to this bot, or was not understood.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Settings`] when the settings store fails.
    pub async fn respond(&self, message: &IncomingMessage) -> DispatchResult<Option<Reply>> {
        if message.author.is_bot || message.author.id == self.bot_id {
            return Ok(None);
        }
        let prefix = match message.scope() {
            Some(scope) if !message.mentions_bot => self.store.prefix(scope).await?,
            _ => None,
        };
        let Some(Route { category, command }) = CommandRouter::route(message, prefix.as_deref())
        else {
            return Ok(None);
        };
        debug!(?category, addressed = command.addressed(), "classified command");

        let sender_nick = message.author.sender_nick();
        let reply = match category {
            CommandCategory::StandardRoll => {
                self.rolls
                    .handle(command.text(), RollVariant::Standard, &sender_nick)
            }
            CommandCategory::SpecialRoll => {
                self.rolls
                    .handle(command.text(), RollVariant::Special, &sender_nick)
            }
            CommandCategory::PrivateHelp(topic) => Some(help_reply(topic)),
            CommandCategory::Ignored => None,
            settings => match message.scope() {
                Some(scope) => {
                    let context = SettingsContext {
                        scope,
                        author_id: &message.author.id,
                        content: &message.content,
                    };
                    self.settings_reply(settings, &context).await?
                }
                None => None,
            },
        };
        Ok(reply)
    }

    async fn settings_reply(
        &self,
        category: CommandCategory,
        context: &SettingsContext<'_>,
    ) -> SettingsResult<Option<Reply>> {
        match category {
            CommandCategory::SetSplat => self.settings.set_splat(context).await,
            CommandCategory::CheckSplat => self.settings.check_splat(context).await,
            CommandCategory::SetFlavour => self.settings.set_flavour(context).await,
            CommandCategory::CheckFlavour => self.settings.check_flavour(context).await,
            CommandCategory::Delete => self.settings.delete(context).await,
            CommandCategory::SetPrefix => self.settings.set_prefix(context).await,
            CommandCategory::CheckPrefix => self.settings.check_prefix(context).await,
            CommandCategory::StandardRoll
            | CommandCategory::SpecialRoll
            | CommandCategory::PrivateHelp(_)
            | CommandCategory::Ignored => Ok(None),
        }
    }

    /// Renders a reply for the message's author.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Render`] when the template is malformed.
    pub fn render(&self, message: &IncomingMessage, reply: &Reply) -> DispatchResult<String> {
        Ok(self.renderer.render(reply, &message.author.mention())?)
    }

    /// Handles a message end to end and returns the text handed to the
    /// transport.
    ///
    /// Downstream failures are logged with an operator report. The user
    /// then receives [`FAILURE_REPLY`] instead of silence.
    #[tracing::instrument(
        name = "message",
        skip_all,
        fields(id = %message.id, author = %message.author.name)
    )]
    pub async fn on_message(&self, message: &IncomingMessage) -> Option<String> {
        let outcome = match self.respond(message).await {
            Ok(Some(reply)) => self.render(message, &reply),
            Ok(None) => return None,
            Err(failure) => Err(failure),
        };
        let text = outcome.unwrap_or_else(|failure| {
            self.report(message, &failure);
            FAILURE_REPLY.to_owned()
        });

        if let Err(failure) = self.transport.send(&destination(message), &text).await {
            warn!(error = %failure, "reply delivery failed");
            self.report(message, &DispatchError::from(failure));
        }
        Some(text)
    }

    fn report(&self, message: &IncomingMessage, failure: &DispatchError) {
        let report = ErrorReport::new(message, failure, self.clock.as_ref());
        error!(time = %report.time, "{report}");
    }
}

fn destination(message: &IncomingMessage) -> Destination {
    match &message.location {
        MessageLocation::Channel(scope) => Destination::Channel(scope.clone()),
        MessageLocation::Private => Destination::Direct {
            user_id: message.author.id.clone(),
        },
    }
}
