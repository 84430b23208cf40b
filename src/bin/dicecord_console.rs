//! Console front end for the dicecord bot.
//!
//! Reads one message per line from standard input and writes replies to
//! standard output. Lines starting with `dm ` are private messages; any
//! other line is posted in a fixed console channel and mentions the bot
//! when it contains `<@{bot_id}>`.
//!
//! Usage: `dicecord_console [config.json]`

use std::sync::Arc;

use camino::Utf8PathBuf;
use dicecord::command::{
    adapters::{
        console::ConsoleTransport, memory::InMemorySettingsStore,
        seeded_engine::SeededRollEngine,
    },
    domain::{Author, ChannelScope, IncomingMessage},
    services::CommandDispatcher,
};
use dicecord::config::BotConfig;
use mockable::DefaultClock;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const PRIVATE_MARKER: &str = "dm ";
const CONSOLE_GUILD: &str = "console";
const CONSOLE_CHANNEL: &str = "general";
const CONSOLE_USER_ID: &str = "1";
const CONSOLE_USER_NAME: &str = "operator";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config_path = std::env::args().nth(1).map(Utf8PathBuf::from);
    let config = BotConfig::load(config_path.as_deref())?;
    init_tracing(&config.log_filter);
    info!(presence = %config.presence, bot_id = %config.bot_id, "dicecord console ready");

    let dispatcher = CommandDispatcher::new(
        &config,
        Arc::new(SeededRollEngine::from_entropy()),
        Arc::new(InMemorySettingsStore::new()),
        Arc::new(ConsoleTransport::new()),
        Arc::new(DefaultClock),
    );
    let mention = format!("<@{}>", config.bot_id);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let message = console_message(&line, &mention, !config.bot_id.is_empty());
        if dispatcher.on_message(&message).await.is_none() {
            debug!("message ignored");
        }
    }
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn console_message(line: &str, mention: &str, has_bot_id: bool) -> IncomingMessage {
    let author = Author::new(CONSOLE_USER_ID, CONSOLE_USER_NAME);
    if let Some(body) = line.strip_prefix(PRIVATE_MARKER) {
        return IncomingMessage::private(body, author);
    }
    let message =
        IncomingMessage::in_channel(line, author, ChannelScope::new(CONSOLE_GUILD, CONSOLE_CHANNEL));
    if has_bot_id && line.contains(mention) {
        message.mentioning_bot()
    } else {
        message
    }
}
