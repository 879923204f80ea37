//! AND combinator - logical conjunction of rules
//!
//! This module provides the [`And`] combinator which combines two rules
//! with logical AND semantics - both rules must pass for the combined
//! rule to succeed.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::combinators::And;
//! use fieldcheck_validator::foundation::{Rule, Value};
//! use fieldcheck_validator::validators::{max, min};
//!
//! let rule = And::new(min(1), max(10));
//! assert!(rule.evaluate(&Value::Int(5)));
//! assert!(!rule.evaluate(&Value::Int(0))); // fails min
//! ```

use crate::foundation::{Rule, Value};

/// Combines two rules with logical AND.
///
/// The right rule is only evaluated when the left one passes.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L: Rule, R: Rule> Rule for And<L, R> {
    fn name(&self) -> &'static str {
        "and"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        self.left.evaluate(value) && self.right.evaluate(value)
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L: Rule, R: Rule>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}

/// All rules in a dynamically sized list must pass.
///
/// ```
/// use fieldcheck_validator::combinators::and_all;
/// use fieldcheck_validator::foundation::{Rule, Value};
/// use fieldcheck_validator::validators::min;
///
/// let rule = and_all(vec![min(3), min(5), min(7)]);
/// assert!(rule.evaluate(&Value::Int(7)));
/// assert!(!rule.evaluate(&Value::Int(6)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndAll<R> {
    rules: Vec<R>,
}

impl<R: Rule> Rule for AndAll<R> {
    fn name(&self) -> &'static str {
        "and_all"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        self.rules.iter().all(|rule| rule.evaluate(value))
    }
}

/// Creates an [`AndAll`] combinator. An empty list accepts everything.
pub fn and_all<R: Rule>(rules: Vec<R>) -> AndAll<R> {
    AndAll { rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;
    use crate::validators::{len, max, min, required};

    #[test]
    fn test_and_both_pass() {
        assert!(and(min(1), max(10)).evaluate(&Value::Int(10)));
    }

    #[test]
    fn test_and_left_fails() {
        assert!(!and(min(1), max(10)).evaluate(&Value::Int(0)));
    }

    #[test]
    fn test_and_right_fails() {
        assert!(!and(min(1), max(10)).evaluate(&Value::Int(11)));
    }

    #[test]
    fn test_and_chain() {
        let rule = required().and(len(4)).and(required());
        assert!(rule.evaluate(&Value::Str("four")));
        assert!(!rule.evaluate(&Value::Str("")));
        assert_eq!(rule.name(), "and");
    }

    #[test]
    fn test_and_all() {
        assert!(and_all(vec![min(0), min(1)]).evaluate(&Value::Int(1)));
        assert!(!and_all(vec![min(0), min(2)]).evaluate(&Value::Int(1)));
        assert!(and_all(Vec::<crate::validators::Min>::new()).evaluate(&Value::Nil));
    }
}
