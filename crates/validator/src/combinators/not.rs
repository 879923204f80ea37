//! NOT combinator - logical negation of rules
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a rule.
//!
//! Negation is literal: `Not<Min>` also accepts every non-integer value,
//! because `Min` rejects those. Pair it with a type-constraining rule when
//! that matters.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::combinators::Not;
//! use fieldcheck_validator::foundation::{Rule, Value};
//! use fieldcheck_validator::validators::Match;
//!
//! let no_digits = Not::new(Match::new(r"\d"));
//! assert!(no_digits.evaluate(&Value::Str("abc")));
//! assert!(!no_digits.evaluate(&Value::Str("abc1")));
//! ```

use crate::foundation::{Rule, Value};

/// Inverts a rule with logical NOT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<R> {
    pub(crate) inner: R,
}

impl<R> Not<R> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Rule for Not<R> {
    fn name(&self) -> &'static str {
        "not"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        !self.inner.evaluate(value)
    }
}

/// Creates a `Not` combinator from a rule.
pub fn not<R: Rule>(rule: R) -> Not<R> {
    Not::new(rule)
}
