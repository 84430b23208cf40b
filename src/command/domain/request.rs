//! Roll request construction.
//!
//! Building a plan is pure: nothing is sent to the roll engine until the
//! caller dispatches the returned [`RollPlan`].

use serde::{Deserialize, Serialize};

use super::extract::{AddresseeSplit, BotIdSplit, DiceAmountExtractor, ModifierFlags, again_threshold};
use super::pool::{EvaluatedPool, evaluate_pool, has_arithmetic};
use super::{AgainThreshold, RollRejection};

/// Pools at or above this size are refused unless configured otherwise.
pub const DEFAULT_MAX_DICE: u32 = 50;

/// Which family of roll a handler performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollVariant {
    /// Normal pool roll.
    Standard,
    /// Gangrel roll: tens never explode and ones cancel successes.
    Special,
}

/// A fully normalized request for the roll engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// Number of dice; zero for chance rolls.
    pub dice_amount: u32,
    /// Reroll threshold.
    pub again: AgainThreshold,
    /// Rote action.
    pub rote: bool,
    /// Paradox roll.
    pub paradox: bool,
    /// Frenzy check.
    pub frenzy: bool,
    /// Single chance die instead of a pool.
    pub chance: bool,
    /// Special (gangrel) roll.
    pub special: bool,
    /// Lower-cased nickname of the sender.
    pub sender_nick: String,
}

/// What a roll command resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollPlan {
    /// `roll one`: the fixed single-die routine.
    SingleDie,
    /// A request ready for the engine.
    Dispatch {
        /// The request to send.
        request: RollRequest,
        /// The evaluated pool expression, when one was used.
        pool: Option<EvaluatedPool>,
    },
    /// Understood but refused; the message is shown to the user.
    Rejected(RollRejection),
    /// No dice amount found; the command is silently ignored.
    NotUnderstood,
}

/// Turns command text into a [`RollPlan`].
#[derive(Debug, Clone)]
pub struct RollRequestBuilder<S = BotIdSplit> {
    extractor: DiceAmountExtractor<S>,
    max_dice: u32,
}

impl RollRequestBuilder<BotIdSplit> {
    /// Creates a builder that splits on the given bot ID.
    #[must_use]
    pub fn for_bot(bot_id: impl Into<String>) -> Self {
        Self::new(DiceAmountExtractor::new(BotIdSplit::new(bot_id)))
    }
}

impl<S: AddresseeSplit> RollRequestBuilder<S> {
    /// Creates a builder with the default dice limit.
    #[must_use]
    pub const fn new(extractor: DiceAmountExtractor<S>) -> Self {
        Self {
            extractor,
            max_dice: DEFAULT_MAX_DICE,
        }
    }

    /// Overrides the exclusive dice limit.
    #[must_use]
    pub const fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Interprets lower-cased command text as a roll.
    ///
    /// A standard roll that also names ` gangrel ` or ` gan ` is upgraded to
    /// a special roll.
    #[must_use]
    pub fn plan(&self, text: &str, variant: RollVariant, sender_nick: &str) -> RollPlan {
        if text.contains("roll one") {
            return RollPlan::SingleDie;
        }

        let effective = if variant == RollVariant::Standard && names_special_roll(text) {
            RollVariant::Special
        } else {
            variant
        };
        let flags = ModifierFlags::from_text(text);
        let request = RollRequest {
            dice_amount: 0,
            again: match effective {
                RollVariant::Standard => again_threshold(text),
                RollVariant::Special => AgainThreshold::Never,
            },
            rote: flags.rote,
            paradox: flags.paradox,
            frenzy: flags.frenzy,
            chance: flags.chance,
            special: effective == RollVariant::Special,
            sender_nick: sender_nick.to_owned(),
        };

        if flags.chance {
            return RollPlan::Dispatch {
                request,
                pool: None,
            };
        }

        if has_arithmetic(text) {
            return match evaluate_pool(text) {
                Err(error) => RollPlan::Rejected(error.into()),
                Ok(pool) => match pool.dice_amount() {
                    None => RollPlan::Dispatch {
                        request: RollRequest {
                            chance: true,
                            ..request
                        },
                        pool: Some(pool),
                    },
                    Some(amount) => self.checked(request, amount, Some(pool)),
                },
            };
        }

        self.extractor
            .extract(text)
            .map_or(RollPlan::NotUnderstood, |amount| {
                self.checked(request, amount, None)
            })
    }

    fn checked(&self, request: RollRequest, amount: u32, pool: Option<EvaluatedPool>) -> RollPlan {
        if amount >= self.max_dice {
            return RollPlan::Rejected(RollRejection::TooManyDice {
                requested: amount,
                limit: self.max_dice,
            });
        }
        RollPlan::Dispatch {
            request: RollRequest {
                dice_amount: amount,
                ..request
            },
            pool,
        }
    }
}

fn names_special_roll(text: &str) -> bool {
    text.contains(" gangrel ") || text.contains(" gan ")
}
