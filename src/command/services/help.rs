//! Private-message help replies.

use crate::command::domain::HelpTopic;
use crate::command::render::Reply;

const ROLL_TYPES: &str = "\
Roll types:
`roll 5` - roll a pool of 5 dice
`roll 5 + 2 - 1` - roll a calculated pool
`roll 8again 5` / `9again` / `noagain` - change the reroll threshold
`roll rote 5` - reroll failed dice once
`roll chance` - roll a single chance die
`roll one` - roll a single die
`gangrel 5` / `gan 5` - tens don't reroll and ones cancel successes
Add `paradox` or `frenzy` to any roll to mark it as such.";

const FLAVOUR_HELP: &str = "\
Flavour text adds game-line commentary to rolls.
`flavour on` / `flavour off` - toggle flavour text for this channel
`flavour check` or `flavour` - show the current setting
`splat mage` - choose the game line for your rolls
`splat check` or `splat` - show your current splat";

const COMMANDS: &str = "\
Mention the bot followed by a command, for example `@dicecord roll 5`.
Write 'type' for the list of roll types, 'flavourhelp' for flavour settings, \
'prefix' for custom prefixes and 'info' for bot info.
`delete user` / `delete channel` / `delete server` removes stored settings.";

const ABOUT: &str = "\
dicecord rolls dice pools for Chronicles of Darkness games.
Pool expressions support up to 10 terms of addition and subtraction.";

const PREFIX_HELP: &str = "\
`prefix <value>` sets a custom prefix for this channel.
`prefix server <value>` sets it for every channel in the server.
`prefix reset` removes the custom prefix; `prefix` shows the current one.
Mentioning the bot always works, with or without a prefix.";

const FALLBACK: &str = "Write 'help' for help, 'info' for bot info, 'type' for list of roll types";

/// Returns the help text for a topic.
#[must_use]
pub const fn help_text(topic: HelpTopic) -> &'static str {
    match topic {
        HelpTopic::RollTypes => ROLL_TYPES,
        HelpTopic::Flavour => FLAVOUR_HELP,
        HelpTopic::Commands => COMMANDS,
        HelpTopic::About => ABOUT,
        HelpTopic::Prefix => PREFIX_HELP,
        HelpTopic::Fallback => FALLBACK,
    }
}

/// Returns the help reply for a topic.
#[must_use]
pub fn help_reply(topic: HelpTopic) -> Reply {
    Reply::verbatim(help_text(topic))
}
