//! Reroll ("again") thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum die face that adds an extra die to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgainThreshold {
    /// `8again`: eights and above explode.
    Eight,
    /// `9again`: nines and above explode.
    Nine,
    /// The standard rule: only tens explode.
    #[default]
    Ten,
    /// `noagain`: nothing explodes.
    Never,
}

impl AgainThreshold {
    /// Returns the numeric threshold, where `11` means "never".
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Never => 11,
        }
    }

    /// Maps an again marker (`8again`, `9again`, `noagain`) to a threshold.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "8again" => Some(Self::Eight),
            "9again" => Some(Self::Nine),
            "noagain" => Some(Self::Never),
            _ => None,
        }
    }

    /// Returns `true` if a die showing `face` triggers an extra die.
    #[must_use]
    pub const fn explodes(self, face: u8) -> bool {
        face >= self.value()
    }
}

impl fmt::Display for AgainThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str("no-again"),
            other => write!(f, "{}-again", other.value()),
        }
    }
}
