//! Construction-time errors.
//!
//! Evaluating a rule never fails; it answers `true` or `false`. The only
//! failure in this crate happens while *building* a rule from caller-supplied
//! data, such as a regular expression read from configuration.

use thiserror::Error;

/// Error returned by the fallible rule constructors.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// The pattern handed to a regex-based rule does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The compiler's diagnostic.
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_display_names_pattern() {
        let source = regex::Regex::new("[").unwrap_err();
        let err = RuleError::InvalidPattern {
            pattern: "[".to_owned(),
            source,
        };
        assert!(err.to_string().starts_with("invalid pattern '['"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
