//! Ordered command classification.
//!
//! Routing is a table of `(marker, category)` rules tried top to bottom;
//! the first rule whose marker matches wins. Keeping precedence in data
//! lets it be read and tested without tracing a chain of conditionals.

use tracing::trace;

use crate::command::domain::{CommandCategory, HelpTopic, IncomingMessage, RawCommand};

/// How a rule's marker is tested against the command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The marker occurs anywhere in the text.
    Contains(&'static str),
    /// The text ends with the marker.
    EndsWith(&'static str),
}

impl Marker {
    /// Returns `true` if the marker matches the text.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        match self {
            Self::Contains(marker) => text.contains(marker),
            Self::EndsWith(marker) => text.ends_with(marker),
        }
    }

    /// Returns the marker text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Contains(marker) | Self::EndsWith(marker) => marker,
        }
    }
}

/// A single routing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingRule {
    /// Marker tested against the command text.
    pub marker: Marker,
    /// Category selected when the marker matches.
    pub category: CommandCategory,
}

impl RoutingRule {
    const fn new(marker: Marker, category: CommandCategory) -> Self {
        Self { marker, category }
    }
}

/// Channel command rules in precedence order.
pub const CHANNEL_RULES: [RoutingRule; 10] = [
    RoutingRule::new(Marker::Contains(" roll "), CommandCategory::StandardRoll),
    RoutingRule::new(Marker::Contains(" gangrel "), CommandCategory::SpecialRoll),
    RoutingRule::new(Marker::Contains(" gan "), CommandCategory::SpecialRoll),
    RoutingRule::new(Marker::Contains(" splat "), CommandCategory::SetSplat),
    RoutingRule::new(Marker::Contains(" flavour "), CommandCategory::SetFlavour),
    RoutingRule::new(Marker::Contains(" delete "), CommandCategory::Delete),
    RoutingRule::new(Marker::Contains(" prefix "), CommandCategory::SetPrefix),
    RoutingRule::new(Marker::EndsWith(" splat"), CommandCategory::CheckSplat),
    RoutingRule::new(Marker::EndsWith(" prefix"), CommandCategory::CheckPrefix),
    RoutingRule::new(Marker::EndsWith(" flavour"), CommandCategory::CheckFlavour),
];

/// Private-message help keywords in precedence order.
pub const HELP_RULES: [(&str, HelpTopic); 5] = [
    ("type", HelpTopic::RollTypes),
    ("flavourhelp", HelpTopic::Flavour),
    ("help", HelpTopic::Commands),
    ("info", HelpTopic::About),
    ("prefix", HelpTopic::Prefix),
];

/// An addressed message together with its selected category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Selected handler category.
    pub category: CommandCategory,
    /// Lower-cased command text.
    pub command: RawCommand,
}

/// Decides whether a message is addressed to the bot and what it asks for.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRouter;

impl CommandRouter {
    /// Routes a message to exactly one category.
    ///
    /// Private messages always map to [`CommandCategory::PrivateHelp`].
    /// Channel messages must pass [`Self::eligible`] first; `None` means
    /// the message was not addressed to the bot.
    #[must_use]
    pub fn route(message: &IncomingMessage, prefix: Option<&str>) -> Option<Route> {
        if message.scope().is_none() {
            return Some(Route {
                category: CommandCategory::PrivateHelp(Self::classify_private(&message.content)),
                command: RawCommand::new(&message.content, true),
            });
        }
        let command = Self::eligible(&message.content, message.mentions_bot, prefix)?;
        Some(Route {
            category: Self::classify(&command),
            command,
        })
    }

    /// Returns the command text if a channel message is addressed to the bot.
    ///
    /// A mention always qualifies. Otherwise the message must start with the
    /// scope's custom prefix followed by a space; the first occurrence of the
    /// prefix is then removed. Without a configured prefix only mentions
    /// qualify.
    #[must_use]
    pub fn eligible(content: &str, mentions_bot: bool, prefix: Option<&str>) -> Option<RawCommand> {
        if mentions_bot {
            return Some(RawCommand::new(content, true));
        }
        let lowered = content.to_lowercase();
        let active = prefix
            .map(str::to_lowercase)
            .filter(|candidate| !candidate.is_empty())?;
        lowered
            .starts_with(&format!("{active} "))
            .then(|| RawCommand::new(&lowered.replacen(&active, "", 1), false))
    }

    /// Classifies an eligible channel command.
    #[must_use]
    pub fn classify(command: &RawCommand) -> CommandCategory {
        CHANNEL_RULES
            .iter()
            .find(|rule| rule.marker.matches(command.text()))
            .map_or(CommandCategory::Ignored, |rule| {
                trace!(marker = rule.marker.text(), "routing rule matched");
                rule.category
            })
    }

    /// Classifies a private message into a help topic.
    #[must_use]
    pub fn classify_private(content: &str) -> HelpTopic {
        let lowered = content.to_lowercase();
        HELP_RULES
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map_or(HelpTopic::Fallback, |(_, topic)| *topic)
    }
}
