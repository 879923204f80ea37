//! OR combinator - logical disjunction of rules
//!
//! This module provides the [`Or`] combinator which combines two rules
//! with logical OR semantics - at least one rule must pass for the combined
//! rule to succeed.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::combinators::Or;
//! use fieldcheck_validator::foundation::{Rule, Value};
//! use fieldcheck_validator::validators::Len;
//!
//! // Either a 5 or a 10 byte code
//! let rule = Or::new(Len::new(5), Len::new(10));
//! assert!(rule.evaluate(&Value::Str("hello")));
//! assert!(rule.evaluate(&Value::Str("helloworld")));
//! assert!(!rule.evaluate(&Value::Str("hi")));
//! ```

use crate::foundation::{Rule, Value};

/// Combines two rules with logical OR.
///
/// If the left rule passes, the right one is not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: Rule, R: Rule> Rule for Or<L, R> {
    fn name(&self) -> &'static str {
        "or"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        self.left.evaluate(value) || self.right.evaluate(value)
    }
}

/// Creates an `Or` combinator from two rules.
pub fn or<L: Rule, R: Rule>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}

/// At least one rule in a dynamically sized list must pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrAny<R> {
    rules: Vec<R>,
}

impl<R: Rule> Rule for OrAny<R> {
    fn name(&self) -> &'static str {
        "or_any"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        self.rules.iter().any(|rule| rule.evaluate(value))
    }
}

/// Creates an [`OrAny`] combinator. An empty list accepts nothing.
pub fn or_any<R: Rule>(rules: Vec<R>) -> OrAny<R> {
    OrAny { rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;
    use crate::validators::{Len, len, max, min};

    #[test]
    fn test_or_left_passes() {
        assert!(or(len(5), len(10)).evaluate(&Value::Str("hello")));
    }

    #[test]
    fn test_or_right_passes() {
        assert!(or(len(5), len(10)).evaluate(&Value::Str("helloworld")));
    }

    #[test]
    fn test_or_both_fail() {
        assert!(!or(len(5), len(10)).evaluate(&Value::Str("hi")));
        assert!(!or(len(5), len(10)).evaluate(&Value::Int(5)));
    }

    #[test]
    fn test_or_chain() {
        let outside = max(-10).or(min(10));
        assert!(outside.evaluate(&Value::Int(-11)));
        assert!(outside.evaluate(&Value::Int(10)));
        assert!(!outside.evaluate(&Value::Int(0)));
    }

    #[test]
    fn test_or_any() {
        let rule = or_any(vec![len(1), len(3)]);
        assert!(rule.evaluate(&Value::Str("abc")));
        assert!(!rule.evaluate(&Value::Str("ab")));
        assert!(!or_any(Vec::<Len>::new()).evaluate(&Value::Str("")));
    }
}
