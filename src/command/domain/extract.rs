//! Parameter extraction from free-form roll commands.

use regex::Regex;
use std::sync::LazyLock;

use super::AgainThreshold;

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static AGAIN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:8|9|no)again").expect("again marker pattern should compile")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static ROLL_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\broll ([0-9]+)\b").expect("roll amount pattern should compile")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static AMOUNT_AFTER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(8again|9again|noagain) ([0-9]+)\b")
        .expect("marker amount pattern should compile")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static WHOLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+\b").expect("number pattern should compile"));

/// Returns the first again marker in the text, scanning left to right.
#[must_use]
pub fn again_marker(text: &str) -> Option<&str> {
    AGAIN_MARKER.find(text).map(|marker| marker.as_str())
}

/// Returns the again threshold requested by the text, defaulting to ten.
#[must_use]
pub fn again_threshold(text: &str) -> AgainThreshold {
    again_marker(text)
        .and_then(AgainThreshold::from_marker)
        .unwrap_or_default()
}

/// Boolean roll modifiers. Each is an independent substring test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierFlags {
    /// `rote`: failed dice are rerolled once.
    pub rote: bool,
    /// `paradox`: a mage paradox roll.
    pub paradox: bool,
    /// `frenzy`: a frenzy check.
    pub frenzy: bool,
    /// `chance`: roll a single chance die.
    pub chance: bool,
}

impl ModifierFlags {
    /// Reads all modifier flags from the text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rote: text.contains("rote"),
            paradox: text.contains("paradox"),
            frenzy: text.contains("frenzy"),
            chance: text.contains("chance"),
        }
    }
}

/// Splits command text around the bot's own address so trailing segments
/// can be searched first.
pub trait AddresseeSplit: Send + Sync {
    /// Returns the text segments with the addressee removed, in text order.
    fn segments<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits on the bot's user ID as it appears inside mention markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdSplit {
    bot_id: String,
}

impl BotIdSplit {
    /// Creates a splitter for the given bot ID.
    #[must_use]
    pub fn new(bot_id: impl Into<String>) -> Self {
        Self {
            bot_id: bot_id.into(),
        }
    }
}

impl AddresseeSplit for BotIdSplit {
    fn segments<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if self.bot_id.is_empty() {
            return vec![text];
        }
        text.split(self.bot_id.as_str()).collect()
    }
}

/// Finds the number of dice in a command that has no pool arithmetic.
#[derive(Debug, Clone)]
pub struct DiceAmountExtractor<S = BotIdSplit> {
    split: S,
}

impl<S: AddresseeSplit> DiceAmountExtractor<S> {
    /// Creates an extractor using the given addressee split.
    #[must_use]
    pub const fn new(split: S) -> Self {
        Self { split }
    }

    /// Extracts the dice amount, trying in order:
    ///
    /// 1. `roll <n>`.
    /// 2. `<again marker> <n>`; otherwise the marker is removed from the text.
    /// 3. The first whole number in the segments around the bot address,
    ///    searched from the last segment backwards.
    ///
    /// Returns `None` when no rule yields a number. Amounts too large for
    /// `u32` saturate so they are still rejected as too many dice.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<u32> {
        if text.contains("roll") {
            if let Some(amount) = ROLL_AMOUNT
                .captures(text)
                .and_then(|captures| captures.get(1))
            {
                return Some(parse_amount(amount.as_str()));
            }
        }

        let mut working = text.to_owned();
        if let Some(marker) = again_marker(text) {
            let after_marker = AMOUNT_AFTER_MARKER
                .captures_iter(text)
                .filter(|captures| captures.get(1).is_some_and(|found| found.as_str() == marker))
                .find_map(|captures| captures.get(2));
            if let Some(amount) = after_marker {
                return Some(parse_amount(amount.as_str()));
            }
            working = working.replace(marker, "");
        }

        self.split
            .segments(&working)
            .into_iter()
            .rev()
            .find_map(|segment| WHOLE_NUMBER.find(segment))
            .map(|amount| parse_amount(amount.as_str()))
    }
}

fn parse_amount(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}
