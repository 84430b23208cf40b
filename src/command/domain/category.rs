//! Command categories selected by the router.

use serde::{Deserialize, Serialize};

/// Help text requested through a private message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelpTopic {
    /// `type`: list of supported roll types.
    RollTypes,
    /// `flavourhelp`: flavour text settings.
    Flavour,
    /// `help`: command overview.
    Commands,
    /// `info`: information about the bot.
    About,
    /// `prefix`: custom prefix usage.
    Prefix,
    /// No keyword matched.
    Fallback,
}

/// The single command a message is interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandCategory {
    /// Standard dice pool roll.
    StandardRoll,
    /// Gangrel roll: tens never explode.
    SpecialRoll,
    /// Set the author's splat.
    SetSplat,
    /// Report the author's splat.
    CheckSplat,
    /// Turn flavour text on or off.
    SetFlavour,
    /// Report the flavour text setting.
    CheckFlavour,
    /// Delete stored settings.
    Delete,
    /// Set or reset the custom prefix.
    SetPrefix,
    /// Report the custom prefix.
    CheckPrefix,
    /// Private-message help.
    PrivateHelp(HelpTopic),
    /// Not a command; no response is sent.
    Ignored,
}
