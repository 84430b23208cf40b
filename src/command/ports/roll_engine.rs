//! Roll engine port.
//!
//! The engine owns the dice mechanics. This crate only hands it normalized,
//! range-checked requests and relays the lines it returns.

use crate::command::domain::RollRequest;

/// Port for the dice-simulation engine.
///
/// Every method returns human-readable lines and never fails for requests
/// that passed the dice limit check. Lines may contain
/// [`MENTION_MARKER`](crate::command::render::MENTION_MARKER) where the
/// invoking user should be mentioned.
pub trait RollEngine: Send + Sync {
    /// Rolls a single chance die.
    fn roll_chance(&self, paradox: bool) -> Vec<String>;

    /// Rolls a standard pool of `request.dice_amount` dice using the
    /// request's again threshold and rote, paradox and frenzy flags.
    fn roll_set(&self, request: &RollRequest) -> Vec<String>;

    /// Rolls a special (gangrel) pool. `request.again` is always
    /// [`AgainThreshold::Never`](crate::command::domain::AgainThreshold::Never).
    fn special_roll_set(&self, request: &RollRequest) -> Vec<String>;

    /// Rolls the fixed single-die routine.
    fn roll_special(&self) -> String;
}
