//! Bounded pool-expression extraction and evaluation.
//!
//! Pool expressions come straight from chat text, so evaluation is a
//! hand-written tokenizer over digits and sign characters. Term counts are
//! capped before anything is summed.

use regex::Regex;
use std::fmt;
use std::num::IntErrorKind;
use std::sync::LazyLock;

use super::PoolExpressionError;

/// Maximum number of terms accepted in one expression.
pub const MAX_POOL_TERMS: usize = 10;

/// Largest magnitude of a single term.
pub const MAX_TERM_MAGNITUDE: i32 = 99;

// `noise` swallows command keywords so numbers glued to them are never read
// as operands; `bare` requires leading whitespace for the same reason. Terms
// of any length are captured so oversized ones are rejected, not skipped.
#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<noise>\b(?:gangrel|gan|roll)\b)|(?P<delta>[+-] ?\d+\b)|(?:^|\s)(?P<bare>-?\d+)\b",
    )
    .expect("pool term pattern should compile")
});

/// Returns `true` when the text contains an arithmetic operator.
#[must_use]
pub fn has_arithmetic(text: &str) -> bool {
    text.contains(['+', '-'])
}

/// An ordered sequence of signed integer terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolExpression {
    terms: Vec<i32>,
}

/// A summed pool together with the normalized expression shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedPool {
    /// Sum of all terms.
    pub total: i32,
    /// Terms joined with explicit signs and no whitespace.
    pub expression: String,
}

impl EvaluatedPool {
    /// Returns the pool size if the total is positive.
    #[must_use]
    pub fn dice_amount(&self) -> Option<u32> {
        u32::try_from(self.total).ok().filter(|amount| *amount >= 1)
    }
}

impl PoolExpression {
    /// Extracts terms from free-form command text.
    ///
    /// Bare operands (whitespace-delimited integers) come first, followed by
    /// signed deltas (`+ 2`, `-1`), each in text order.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExpressionError::TooManyTerms`] for more than
    /// [`MAX_POOL_TERMS`] terms, [`PoolExpressionError::Unparsable`] when
    /// none are found and [`PoolExpressionError::TermOutOfRange`] for a term
    /// above [`MAX_TERM_MAGNITUDE`].
    pub fn extract(text: &str) -> Result<Self, PoolExpressionError> {
        let mut operands = Vec::new();
        let mut deltas = Vec::new();
        for captures in TERM_PATTERN.captures_iter(text) {
            if let Some(bare) = captures.name("bare") {
                operands.push(parse_term(bare.as_str())?);
            } else if let Some(delta) = captures.name("delta") {
                deltas.push(parse_term(delta.as_str())?);
            }
        }
        operands.append(&mut deltas);
        Self::from_terms(operands)
    }

    /// Parses a normalized expression such as `5+2-1`.
    ///
    /// Accepts only digits, `+`, `-` and whitespace. Every term needs one
    /// or two digits and at most one leading sign.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExpressionError`] for any other character, a dangling
    /// sign, an oversized term, or a term count outside `1..=10`.
    pub fn parse(expression: &str) -> Result<Self, PoolExpressionError> {
        let mut terms = Vec::new();
        let mut chars = expression
            .chars()
            .filter(|character| !character.is_whitespace())
            .peekable();

        while let Some(lead) = chars.next() {
            let (negative, mut magnitude, mut digits) = match lead {
                '+' => (false, 0, 0_usize),
                '-' => (true, 0, 0_usize),
                other => {
                    let value = digit_value(other).ok_or(PoolExpressionError::Unparsable)?;
                    (false, value, 1)
                }
            };
            while let Some(value) = chars.peek().copied().and_then(digit_value) {
                chars.next();
                digits += 1;
                if digits > 2 {
                    return Err(PoolExpressionError::Unparsable);
                }
                magnitude = magnitude * 10 + value;
            }
            if digits == 0 {
                return Err(PoolExpressionError::Unparsable);
            }
            terms.push(if negative { -magnitude } else { magnitude });
        }

        Self::from_terms(terms)
    }

    /// Builds an expression from already-parsed terms.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExpressionError`] when the term count is outside
    /// `1..=10` or a term exceeds [`MAX_TERM_MAGNITUDE`].
    pub fn from_terms(terms: Vec<i32>) -> Result<Self, PoolExpressionError> {
        if terms.len() > MAX_POOL_TERMS {
            return Err(PoolExpressionError::TooManyTerms { count: terms.len() });
        }
        if terms.is_empty() {
            return Err(PoolExpressionError::Unparsable);
        }
        if let Some(term) = terms
            .iter()
            .copied()
            .find(|term| term.unsigned_abs() > MAX_TERM_MAGNITUDE.unsigned_abs())
        {
            return Err(PoolExpressionError::TermOutOfRange { term });
        }
        Ok(Self { terms })
    }

    /// Returns the terms in order.
    #[must_use]
    pub fn terms(&self) -> &[i32] {
        &self.terms
    }

    /// Returns the left-to-right sum of all terms.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.terms.iter().sum()
    }

    /// Renders the expression and sums it through the tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExpressionError`] if the rendered form fails to
    /// re-parse, which would indicate a rendering defect.
    pub fn evaluate(&self) -> Result<EvaluatedPool, PoolExpressionError> {
        let expression = self.to_string();
        let total = Self::parse(&expression)?.total();
        Ok(EvaluatedPool { total, expression })
    }
}

impl fmt::Display for PoolExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 && *term >= 0 {
                f.write_str("+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// Extracts and evaluates the pool expression embedded in command text.
///
/// # Errors
///
/// Returns [`PoolExpressionError`] when extraction fails.
pub fn evaluate_pool(text: &str) -> Result<EvaluatedPool, PoolExpressionError> {
    PoolExpression::extract(text)?.evaluate()
}

fn parse_term(raw: &str) -> Result<i32, PoolExpressionError> {
    let compact: String = raw
        .chars()
        .filter(|character| !character.is_whitespace())
        .collect();
    // Overflowing terms saturate so the range check reports them.
    compact.parse::<i32>().or_else(|error| match error.kind() {
        IntErrorKind::PosOverflow => Ok(i32::MAX),
        IntErrorKind::NegOverflow => Ok(i32::MIN),
        _ => Err(PoolExpressionError::Unparsable),
    })
}

fn digit_value(character: char) -> Option<i32> {
    character
        .to_digit(10)
        .and_then(|digit| i32::try_from(digit).ok())
}
