//! Splat, flavour, prefix and delete handlers.
//!
//! Each handler reads or writes through the [`SettingsStore`] port once and
//! returns a reply template. The author mention is left as a placeholder.

use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::command::domain::{ChannelScope, DeleteScope, PrefixTarget, Splat};
use crate::command::ports::{SettingsResult, SettingsStore};
use crate::command::render::Reply;

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static PREFIX_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)prefix(?: server)? (\S+)").expect("prefix value pattern should compile")
});

const PREFIX_RESET: &str = "reset";

/// The message a settings command came from.
#[derive(Debug, Clone, Copy)]
pub struct SettingsContext<'a> {
    /// Channel the command was posted in.
    pub scope: &'a ChannelScope,
    /// Author user ID.
    pub author_id: &'a str,
    /// Message text with its original case.
    pub content: &'a str,
}

impl SettingsContext<'_> {
    fn lowered(&self) -> String {
        self.content.to_lowercase()
    }

    fn reply(&self, template: &str) -> Reply {
        Reply::template(template)
            .with_value("guild", self.scope.guild.as_str())
            .with_value("channel", self.scope.channel.as_str())
    }
}

/// Handlers for stored per-scope settings.
#[derive(Debug)]
pub struct SettingsService<S>
where
    S: SettingsStore,
{
    store: Arc<S>,
}

impl<S> SettingsService<S>
where
    S: SettingsStore,
{
    /// Creates a settings service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Sets the author's splat, or reports it when the text says `check`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn set_splat(&self, context: &SettingsContext<'_>) -> SettingsResult<Option<Reply>> {
        let lowered = context.lowered();
        if lowered.contains("check") {
            return self.check_splat(context).await;
        }
        let Some(splat) = Splat::find_in(&lowered) else {
            return Ok(Some(Reply::verbatim(
                "Unsupported splat selected. Only mage supported at this time.",
            )));
        };
        self.store
            .set_splat(context.scope, context.author_id, splat)
            .await?;
        Ok(Some(
            context
                .reply(
                    "Flavour for {{ author }} changed to {{ splat }} in server {{ guild }} - #{{ channel }}",
                )
                .with_value("splat", splat.name()),
        ))
    }

    /// Reports the author's splat.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn check_splat(
        &self,
        context: &SettingsContext<'_>,
    ) -> SettingsResult<Option<Reply>> {
        let splat = self.store.splat(context.scope, context.author_id).await?;
        Ok(Some(splat.map_or_else(
            || {
                context.reply(
                    "Splat for {{ author }} is currently not set in server {{ guild }} - #{{ channel }}",
                )
            },
            |current| {
                context
                    .reply(
                        "Splat for {{ author }} is currently set to {{ splat }} in server {{ guild }} - #{{ channel }}",
                    )
                    .with_value("splat", current.name())
            },
        )))
    }

    /// Turns flavour text `off` or `on`, or reports it on `check`.
    ///
    /// Returns no reply when none of those words appear.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn set_flavour(
        &self,
        context: &SettingsContext<'_>,
    ) -> SettingsResult<Option<Reply>> {
        let lowered = context.lowered();
        let has_word = |word: &str| lowered.split_whitespace().any(|token| token == word);
        let enabled = if has_word("off") {
            false
        } else if has_word("on") {
            true
        } else if has_word("check") {
            return self.check_flavour(context).await;
        } else {
            return Ok(None);
        };
        self.store.set_flavour(context.scope, enabled).await?;
        Ok(Some(flavour_reply(context, enabled)))
    }

    /// Reports whether flavour text is on; unset means off.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn check_flavour(
        &self,
        context: &SettingsContext<'_>,
    ) -> SettingsResult<Option<Reply>> {
        let enabled = self.store.flavour(context.scope).await?.unwrap_or(false);
        Ok(Some(flavour_reply(context, enabled)))
    }

    /// Deletes settings for the `user`, `channel` or `server` named in the
    /// text. Returns no reply when no scope is named.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn delete(&self, context: &SettingsContext<'_>) -> SettingsResult<Option<Reply>> {
        let Some(target) = DeleteScope::from_text(&context.lowered()) else {
            return Ok(None);
        };
        self.store
            .delete(context.scope, target, context.author_id)
            .await?;
        let template = match target {
            DeleteScope::User => "Details for {{ author }} removed from {{ guild }} - #{{ channel }}",
            DeleteScope::Channel => {
                "All details for channel **{{ channel }}** removed from **{{ guild }}** by {{ author }}"
            }
            DeleteScope::Server => {
                "All details for all channels removed from **{{ guild }}** by {{ author }}"
            }
        };
        Ok(Some(context.reply(template)))
    }

    /// Sets the custom prefix from `prefix [server] <value>`; `reset`
    /// clears it. Returns no reply when no value follows `prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn set_prefix(&self, context: &SettingsContext<'_>) -> SettingsResult<Option<Reply>> {
        let Some(value) = PREFIX_VALUE
            .captures(context.content)
            .and_then(|captures| captures.get(1))
            .map(|found| found.as_str().to_owned())
        else {
            return Ok(None);
        };
        let target = if context.lowered().contains(" server ") {
            PrefixTarget::Server
        } else {
            PrefixTarget::Channel
        };
        let prefix = (!value.eq_ignore_ascii_case(PREFIX_RESET)).then_some(value);
        self.store
            .set_prefix(context.scope, target, prefix.clone())
            .await?;

        let template = match (target, prefix.is_some()) {
            (PrefixTarget::Server, true) => {
                "Server prefix changed by {{ author }} to **{{ prefix }}** in server {{ guild }}"
            }
            (PrefixTarget::Server, false) => {
                "Server prefix reset by {{ author }} in server {{ guild }}"
            }
            (PrefixTarget::Channel, true) => {
                "Prefix changed by {{ author }} to **{{ prefix }}** in server {{ guild }} - #{{ channel }}"
            }
            (PrefixTarget::Channel, false) => {
                "Prefix reset by {{ author }} in server {{ guild }} - #{{ channel }}"
            }
        };
        Ok(Some(
            context
                .reply(template)
                .with_value("prefix", prefix.unwrap_or_default()),
        ))
    }

    /// Reports the effective prefix for the channel.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn check_prefix(
        &self,
        context: &SettingsContext<'_>,
    ) -> SettingsResult<Option<Reply>> {
        let prefix = self.store.prefix(context.scope).await?;
        Ok(Some(prefix.map_or_else(
            || Reply::verbatim("There is no custom prefix set for this channel."),
            |current| {
                Reply::template("Current prefix for this channel is `{{ prefix }}`")
                    .with_value("prefix", current)
            },
        )))
    }
}

fn flavour_reply(context: &SettingsContext<'_>, enabled: bool) -> Reply {
    context
        .reply("Flavour turned {{ state }} in server {{ guild }} - #{{ channel }}")
        .with_value("state", if enabled { "on" } else { "off" })
}
