//! Incoming chat message types and the lower-cased command text derived
//! from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one incoming message, used to correlate log output.
///
/// # Examples
///
/// ```
/// use dicecord::command::domain::MessageId;
///
/// let id = MessageId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Note: generates a fresh random UUID on each call.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user who sent a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Platform user identifier.
    pub id: String,
    /// Account name.
    pub name: String,
    /// Server nickname, when one is set.
    pub nick: Option<String>,
    /// Whether the account is an automated bot.
    pub is_bot: bool,
}

impl Author {
    /// Creates a human author without a nickname.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nick: None,
            is_bot: false,
        }
    }

    /// Sets the server nickname.
    #[must_use]
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    /// Marks the author as a bot account.
    #[must_use]
    pub const fn as_bot(mut self) -> Self {
        self.is_bot = true;
        self
    }

    /// Returns the platform mention markup for this author.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// Returns the lower-cased display name passed to the roll engine.
    ///
    /// Falls back to the account name when no nickname is set.
    #[must_use]
    pub fn sender_nick(&self) -> String {
        self.nick.as_deref().unwrap_or(&self.name).to_lowercase()
    }
}

/// A server channel in which settings are scoped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChannelScope {
    /// Server (guild) name.
    pub guild: String,
    /// Channel name.
    pub channel: String,
}

impl ChannelScope {
    /// Creates a channel scope.
    #[must_use]
    pub fn new(guild: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            guild: guild.into(),
            channel: channel.into(),
        }
    }
}

impl fmt::Display for ChannelScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - #{}", self.guild, self.channel)
    }
}

/// Where a message was posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLocation {
    /// A shared server channel.
    Channel(ChannelScope),
    /// A private direct-message conversation.
    Private,
}

/// A message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Correlation identifier.
    pub id: MessageId,
    /// Raw message text, case preserved.
    pub content: String,
    /// Sender.
    pub author: Author,
    /// Channel or private conversation.
    pub location: MessageLocation,
    /// Whether the bot account was explicitly mentioned.
    pub mentions_bot: bool,
}

impl IncomingMessage {
    /// Creates a channel message.
    #[must_use]
    pub fn in_channel(content: impl Into<String>, author: Author, scope: ChannelScope) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            author,
            location: MessageLocation::Channel(scope),
            mentions_bot: false,
        }
    }

    /// Creates a private message.
    #[must_use]
    pub fn private(content: impl Into<String>, author: Author) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            author,
            location: MessageLocation::Private,
            mentions_bot: false,
        }
    }

    /// Marks the message as mentioning the bot.
    #[must_use]
    pub const fn mentioning_bot(mut self) -> Self {
        self.mentions_bot = true;
        self
    }

    /// Returns the channel scope for channel messages.
    #[must_use]
    pub const fn scope(&self) -> Option<&ChannelScope> {
        match &self.location {
            MessageLocation::Channel(scope) => Some(scope),
            MessageLocation::Private => None,
        }
    }
}

/// Lower-cased command text that passed the eligibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    text: String,
    addressed: bool,
}

impl RawCommand {
    /// Creates a command, lower-casing the supplied text.
    #[must_use]
    pub fn new(text: &str, addressed: bool) -> Self {
        Self {
            text: text.to_lowercase(),
            addressed,
        }
    }

    /// Returns the lower-cased command text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` when the bot was mentioned rather than reached by prefix.
    #[must_use]
    pub const fn addressed(&self) -> bool {
        self.addressed
    }
}
