//! Core traits for the validation system
//!
//! This module defines the one capability every rule implements, plus the
//! extension trait that adds combinator methods on top of it.

use crate::foundation::Value;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A predicate over a single field value.
///
/// Rules are immutable once built, so a single instance can be shared across
/// threads and reused for any number of calls. A rule that does not
/// understand the variant it receives must return `false`; there is no
/// separate error channel for type mismatches.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Rule, Value};
///
/// struct Even;
///
/// impl Rule for Even {
///     fn name(&self) -> &'static str {
///         "even"
///     }
///
///     fn evaluate(&self, value: &Value<'_>) -> bool {
///         matches!(value, Value::Int(n) if n % 2 == 0)
///     }
/// }
///
/// assert!(Even.evaluate(&Value::Int(4)));
/// assert!(!Even.evaluate(&Value::Str("4")));
/// ```
pub trait Rule: Send + Sync {
    /// Short identifier of the rule, used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if `value` satisfies the rule.
    fn evaluate(&self, value: &Value<'_>) -> bool;
}

impl<R: Rule + ?Sized> Rule for &R {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn evaluate(&self, value: &Value<'_>) -> bool {
        (**self).evaluate(value)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn evaluate(&self, value: &Value<'_>) -> bool {
        (**self).evaluate(value)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Combinator methods for rules.
///
/// Automatically implemented for every [`Rule`].
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let adult = min(18).and(max(130));
/// assert!(validate(&adult, 42));
/// assert!(!validate(&adult, 7));
/// ```
pub trait RuleExt: Rule + Sized {
    /// Both rules must pass. Short-circuits on the first failure.
    fn and<R: Rule>(self, other: R) -> And<Self, R> {
        And::new(self, other)
    }

    /// At least one rule must pass. Short-circuits on the first success.
    fn or<R: Rule>(self, other: R) -> Or<Self, R> {
        Or::new(self, other)
    }

    /// Inverts the rule.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Rule> RuleExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Rule for AlwaysValid {
        fn name(&self) -> &'static str {
            "always_valid"
        }

        fn evaluate(&self, _value: &Value<'_>) -> bool {
            true
        }
    }

    #[test]
    fn test_rule_trait() {
        assert!(AlwaysValid.evaluate(&Value::Nil));
    }

    #[test]
    fn test_forwarding_impls() {
        let boxed: Box<dyn Rule> = Box::new(AlwaysValid);
        assert!(boxed.evaluate(&Value::Int(1)));
        assert_eq!(boxed.name(), "always_valid");

        let by_ref = &AlwaysValid;
        assert!(by_ref.evaluate(&Value::Bool(false)));
    }
}
