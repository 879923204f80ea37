//! Core validation types and traits
//!
//! This module contains the building blocks every rule is made of:
//!
//! - **Value**: [`Value`], the closed set of input kinds rules inspect
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Dispatch**: [`validate`] and the [`Validation`] dispatcher
//! - **Errors**: [`RuleError`], returned only by fallible constructors
//!
//! # Fail-closed
//!
//! Every outcome is a `bool`. Passing a string to a numeric rule, or a float
//! to [`Required`](crate::validators::Required), is not an error: it simply
//! fails.
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! assert!(validate(min(4), 4));
//! assert!(!validate(min(4), "four"));
//! assert!(!validate(min(4), 11.1212));
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::RuleError;
pub use traits::{Rule, RuleExt};
pub use value::Value;

// ============================================================================
// DISPATCH
// ============================================================================

/// Checks `value` against `rule`.
///
/// This is the single entry point of the crate. It adds nothing beyond the
/// conversion into [`Value`]; the outcome is whatever the rule says.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::validate;
/// use fieldcheck_validator::validators::{Len, Required};
///
/// assert!(validate(Len::new(4), "four"));
/// assert!(!validate(Required, ""));
/// ```
#[inline]
pub fn validate<'a, R, V>(rule: R, value: V) -> bool
where
    R: Rule,
    V: Into<Value<'a>>,
{
    rule.evaluate(&value.into())
}

/// Zero-sized dispatcher for callers that prefer a method-call surface.
///
/// ```
/// use fieldcheck_validator::foundation::Validation;
/// use fieldcheck_validator::validators::Max;
///
/// let validation = Validation::new();
/// assert!(validation.validate(Max::new(4), -1));
/// assert!(!validation.validate(Max::new(4), 5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Validation;

impl Validation {
    /// Creates the dispatcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// See [`validate`].
    #[inline]
    pub fn validate<'a, R, V>(&self, rule: R, value: V) -> bool
    where
        R: Rule,
        V: Into<Value<'a>>,
    {
        validate(rule, value)
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Returns `true` if every rule accepts `value`.
///
/// Stops at the first rule that rejects. An empty slice accepts everything.
///
/// ```
/// use fieldcheck_validator::foundation::{Rule, validate_all};
/// use fieldcheck_validator::validators::{Len, Required};
///
/// let rules: [&dyn Rule; 2] = [&Required, &Len::new(4)];
/// assert!(validate_all("four", &rules));
/// assert!(!validate_all("", &rules));
/// ```
pub fn validate_all<'a, V>(value: V, rules: &[&dyn Rule]) -> bool
where
    V: Into<Value<'a>>,
{
    let value = value.into();
    rules.iter().all(|rule| rule.evaluate(&value))
}

/// Returns `true` if at least one rule accepts `value`.
///
/// Stops at the first rule that accepts. An empty slice accepts nothing.
pub fn validate_any<'a, V>(value: V, rules: &[&dyn Rule]) -> bool
where
    V: Into<Value<'a>>,
{
    let value = value.into();
    rules.iter().any(|rule| rule.evaluate(&value))
}

#[cfg(test)]
mod core_tests {
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

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn name(&self) -> &'static str {
            "always_fails"
        }

        fn evaluate(&self, _value: &Value<'_>) -> bool {
            false
        }
    }

    #[test]
    fn test_validate_delegates() {
        assert!(validate(AlwaysValid, "test"));
        assert!(!validate(AlwaysFails, "test"));
        assert!(Validation.validate(&AlwaysValid, Value::Nil));
    }

    #[test]
    fn test_validate_accepts_trait_objects() {
        let rule: Box<dyn Rule> = Box::new(AlwaysFails);
        assert!(!validate(&rule, 1));
        assert!(!validate(rule.as_ref(), 1));
    }

    #[test]
    fn test_validate_all() {
        assert!(validate_all("test", &[&AlwaysValid, &AlwaysValid]));
        assert!(!validate_all("test", &[&AlwaysValid, &AlwaysFails]));
        assert!(validate_all("test", &[]));
    }

    #[test]
    fn test_validate_any() {
        assert!(validate_any("test", &[&AlwaysFails, &AlwaysValid]));
        assert!(!validate_any("test", &[&AlwaysFails, &AlwaysFails]));
        assert!(!validate_any("test", &[]));
    }
}
