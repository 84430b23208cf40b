//! Errors raised while interpreting a roll command.
//!
//! Both types are user-facing: their `Display` output is sent back to the
//! chat verbatim.

use thiserror::Error;

/// Failures while extracting or evaluating a pool expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PoolExpressionError {
    /// More terms than the evaluator accepts.
    #[error("Too many values, please only include 10 or fewer terms.")]
    TooManyTerms {
        /// Number of terms found.
        count: usize,
    },

    /// No terms, or text outside the digit-and-sign grammar.
    #[error("Pool expression could not be parsed.")]
    Unparsable,

    /// A term outside `-99..=99`.
    #[error("Pool expression could not be parsed.")]
    TermOutOfRange {
        /// The offending term.
        term: i32,
    },
}

/// A roll that was understood but refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RollRejection {
    /// The pool is at or above the configured dice limit.
    #[error("Too many dice. Please roll less than {limit}.")]
    TooManyDice {
        /// Requested pool size.
        requested: u32,
        /// Exclusive upper bound.
        limit: u32,
    },

    /// The pool expression was rejected.
    #[error(transparent)]
    InvalidPool(#[from] PoolExpressionError),
}
