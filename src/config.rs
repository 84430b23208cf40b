//! Bot configuration.
//!
//! Configuration is a JSON document:
//!
//! ```json
//! {
//!   "bot_id": "123456789",
//!   "presence": "PM \"help\" for commands",
//!   "log_filter": "info",
//!   "max_dice": 50
//! }
//! ```
//!
//! Every field is optional. `DICECORD_BOT_ID` overrides `bot_id`.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

use crate::command::domain::DEFAULT_MAX_DICE;

/// Environment variable overriding [`BotConfig::bot_id`].
pub const BOT_ID_ENV: &str = "DICECORD_BOT_ID";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The path has no file name component.
    #[error("config path '{0}' does not name a file")]
    InvalidPath(String),
}

/// Runtime settings for the bot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// The bot's own user ID, as it appears in mention markup.
    pub bot_id: String,
    /// Presence text shown by the transport.
    pub presence: String,
    /// Default `tracing` filter directive.
    pub log_filter: String,
    /// Exclusive upper bound on pool size.
    pub max_dice: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_id: String::new(),
            presence: "PM \"help\" for commands".to_owned(),
            log_filter: "info".to_owned(),
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}

impl BotConfig {
    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid.
    pub fn from_json(text: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_owned(),
            source,
        })
    }

    /// Loads configuration from a file, or defaults when `path` is `None`,
    /// then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(file) => Self::from_json(&read_config(file)?, file.as_str())?,
            None => Self::default(),
        };
        Ok(config.with_overrides(std::env::var(BOT_ID_ENV).ok()))
    }

    /// Applies an optional bot ID override.
    #[must_use]
    pub fn with_overrides(mut self, bot_id: Option<String>) -> Self {
        if let Some(id) = bot_id.filter(|candidate| !candidate.trim().is_empty()) {
            self.bot_id = id;
        }
        self
    }
}

fn read_config(path: &Utf8Path) -> Result<String, ConfigError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_string()))?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let read_error = |source| ConfigError::Read {
        path: path.to_string(),
        source,
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(file_name).map_err(read_error)
}
