//! Per-scope settings values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game line used to choose flavour text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Splat {
    /// No game-specific flavour.
    Default,
    /// Mage: the Awakening.
    Mage,
}

impl Splat {
    /// Every supported splat, in lookup order.
    pub const SUPPORTED: [Self; 2] = [Self::Mage, Self::Default];

    /// Returns the splat's name as typed in chat.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Mage => "mage",
        }
    }

    /// Returns the first supported splat named anywhere in the text.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Self> {
        Self::SUPPORTED
            .into_iter()
            .find(|splat| text.contains(splat.name()))
    }
}

impl fmt::Display for Splat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a delete command removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeleteScope {
    /// The author's settings in this channel.
    User,
    /// Every setting stored for this channel.
    Channel,
    /// Every setting stored for any channel of this server.
    Server,
}

impl DeleteScope {
    /// Reads the scope keyword; `user` takes precedence over `channel`,
    /// which takes precedence over `server`.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        [
            ("user", Self::User),
            ("channel", Self::Channel),
            ("server", Self::Server),
        ]
        .into_iter()
        .find_map(|(keyword, scope)| text.contains(keyword).then_some(scope))
    }
}

/// Where a custom prefix applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixTarget {
    /// Only the current channel.
    Channel,
    /// Every channel of the server without its own prefix.
    Server,
}
