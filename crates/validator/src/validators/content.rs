//! Pattern rules
//!
//! [`Match`] accepts strings in which its regular expression finds a match
//! *anywhere*. Anchor the pattern with `^`/`$` for whole-string matching.
//! [`Email`] is a [`Match`] with a fixed, deliberately loose pattern.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Rule, RuleError, Value};

/// Pattern behind [`Email`].
///
/// It only requires an optional local part followed by `@`; the domain is
/// never inspected, so `"a@"` passes while `"aa.com"` does not.
pub const EMAIL_PATTERN: &str = r"(\w*[0-9a-zA-Z])*@";

static EMAIL: LazyLock<Match> = LazyLock::new(|| Match::new(EMAIL_PATTERN));

/// Compiles `pattern`, keeping it in the error on failure.
fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

// ============================================================================
// MATCH
// ============================================================================

/// Accepts strings containing a match of a regular expression.
///
/// The pattern is compiled once, at construction.
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// assert!(validate(Match::new("[a-z]"), "foobar"));
/// assert!(!validate(Match::new("az"), "a"));
/// assert!(!validate(Match::new("az"), 3));
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    pattern: Regex,
}

impl Match {
    /// Compiles `pattern` into a rule.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Patterns are
    /// expected to be program constants; use [`Match::try_new`] for patterns
    /// that come from data.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        match Self::try_new(pattern) {
            Ok(rule) => rule,
            Err(err) => panic!("{err}"),
        }
    }

    /// Compiles `pattern` into a rule, reporting invalid patterns.
    ///
    /// ```
    /// use fieldcheck_validator::foundation::RuleError;
    /// use fieldcheck_validator::validators::Match;
    ///
    /// assert!(Match::try_new(r"^\d+$").is_ok());
    /// assert!(matches!(Match::try_new("["), Err(RuleError::InvalidPattern { .. })));
    /// ```
    pub fn try_new(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self {
            pattern: compile(pattern)?,
        })
    }

    /// The source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// The compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.pattern
    }
}

impl Rule for Match {
    fn name(&self) -> &'static str {
        "match"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        matches!(value, Value::Str(s) if self.pattern.is_match(s))
    }
}

/// Creates a [`Match`] rule. Panics on an invalid pattern, like [`Match::new`].
#[must_use]
pub fn matches(pattern: &str) -> Match {
    Match::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

/// A [`Match`] preconfigured with [`EMAIL_PATTERN`].
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// assert!(validate(email(), "cihangir+tag@koding.com"));
/// assert!(!validate(email(), "aa.com"));
/// ```
#[derive(Debug, Clone)]
pub struct Email {
    inner: Match,
}

impl Email {
    /// Creates the rule. The pattern is compiled once per process and shared.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EMAIL.clone(),
        }
    }

    /// The underlying [`Match`] rule.
    pub fn as_match(&self) -> &Match {
        &self.inner
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Email {
    fn name(&self) -> &'static str {
        "email"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        self.inner.evaluate(value)
    }
}

/// Creates an [`Email`] rule.
#[must_use]
pub fn email() -> Email {
    Email::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_partial() {
        assert!(matches("[a-z]").evaluate(&Value::Str("foobar")));
        assert!(matches("[a-z]").evaluate(&Value::Str("123x456")));
        assert!(!matches("az").evaluate(&Value::Str("a")));
    }

    #[test]
    fn test_match_anchored() {
        let digits = matches(r"^\d{3}-\d{4}$");
        assert!(digits.evaluate(&Value::Str("123-4567")));
        assert!(!digits.evaluate(&Value::Str("x123-4567")));
    }

    #[test]
    fn test_match_non_string() {
        assert!(!matches("az").evaluate(&Value::Int(3)));
        assert!(!matches(".*").evaluate(&Value::Nil));
    }

    #[test]
    fn test_match_keeps_source() {
        assert_eq!(matches("a+b").as_str(), "a+b");
        assert_eq!(matches("a+b").regex().as_str(), "a+b");
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn test_match_invalid_pattern_panics() {
        let _ = Match::new("(unclosed");
    }

    #[test]
    fn test_try_new_reports_pattern() {
        let err = Match::try_new("(unclosed").unwrap_err();
        let RuleError::InvalidPattern { pattern, .. } = err;
        assert_eq!(pattern, "(unclosed");
    }

    #[test]
    fn test_email() {
        let rule = email();
        assert!(rule.evaluate(&Value::Str("cihangir@koding.com")));
        assert!(rule.evaluate(&Value::Str("cihangir+tag@koding.com")));
        assert!(!rule.evaluate(&Value::Str("a")));
        assert!(!rule.evaluate(&Value::Str("aa.com")));
    }

    #[test]
    fn test_email_does_not_check_domain() {
        assert!(email().evaluate(&Value::Str("a@")));
        assert!(email().evaluate(&Value::Str("@")));
    }

    #[test]
    fn test_email_forwards_to_match() {
        assert_eq!(email().as_match().as_str(), EMAIL_PATTERN);
        assert!(!email().evaluate(&Value::Int(1)));
        assert_eq!(email().name(), "email");
    }
}
