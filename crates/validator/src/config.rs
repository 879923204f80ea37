//! Rules declared as data.
//!
//! [`RuleConfig`] is the serializable description of one built-in rule, for
//! rule sets that live in JSON/TOML/YAML next to the fields they check.
//! Building a rule from configuration is fallible (a pattern may not
//! compile), unlike the panicking [`Match::new`] meant for program constants.
//!
//! # Format
//!
//! Externally tagged, snake-case variant names:
//!
//! ```json
//! [{"min": 4}, {"max": 20}, {"len": 4}, {"len_chars": 3},
//!  "required", {"match": "^[a-z]+$"}, "email"]
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::{Rule, RuleError};
use crate::validators::{Email, Len, Match, Max, Min, Required};

/// Serializable description of a built-in rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleConfig {
    /// [`Min`] with the given bound.
    Min(i64),
    /// [`Max`] with the given bound.
    Max(i64),
    /// Byte-counting [`Len`].
    Len(usize),
    /// Char-counting [`Len`].
    LenChars(usize),
    /// [`Required`].
    Required,
    /// [`Match`] with the given pattern.
    Match(String),
    /// [`Email`].
    Email,
}

impl RuleConfig {
    /// Builds the described rule.
    ///
    /// ```
    /// use fieldcheck_validator::prelude::*;
    ///
    /// let config: RuleConfig = serde_json::from_str(r#"{"min": 4}"#).unwrap();
    /// let rule = config.build().unwrap();
    /// assert!(validate(&rule, 4));
    /// ```
    pub fn build(&self) -> Result<Box<dyn Rule>, RuleError> {
        let rule: Box<dyn Rule> = match self {
            Self::Min(bound) => Box::new(Min::new(*bound)),
            Self::Max(bound) => Box::new(Max::new(*bound)),
            Self::Len(length) => Box::new(Len::new(*length)),
            Self::LenChars(length) => Box::new(Len::chars(*length)),
            Self::Required => Box::new(Required),
            Self::Match(pattern) => Box::new(Match::try_new(pattern)?),
            Self::Email => Box::new(Email::new()),
        };
        tracing::debug!(rule = rule.name(), "built rule from configuration");
        Ok(rule)
    }

    /// Builds every rule in `configs`, stopping at the first failure.
    pub fn build_all(configs: &[Self]) -> Result<Vec<Box<dyn Rule>>, RuleError> {
        configs.iter().map(Self::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_all_variants() {
        let configs: Vec<RuleConfig> = serde_json::from_str(
            r#"[{"min": 4}, {"max": 20}, {"len": 4}, {"len_chars": 3},
                "required", {"match": "^[a-z]+$"}, "email"]"#,
        )
        .unwrap();

        assert_eq!(
            configs,
            vec![
                RuleConfig::Min(4),
                RuleConfig::Max(20),
                RuleConfig::Len(4),
                RuleConfig::LenChars(3),
                RuleConfig::Required,
                RuleConfig::Match("^[a-z]+$".to_owned()),
                RuleConfig::Email,
            ]
        );
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let json = serde_json::to_string(&RuleConfig::Match("a".to_owned())).unwrap();
        assert_eq!(json, r#"{"match":"a"}"#);
        assert_eq!(serde_json::to_string(&RuleConfig::Required).unwrap(), r#""required""#);
    }

    #[test]
    fn test_build_preserves_semantics() {
        let rule = RuleConfig::Len(4).build().unwrap();
        assert_eq!(rule.name(), "len");
        assert!(rule.evaluate(&Value::Str("four")));
        assert!(!rule.evaluate(&Value::Int(4)));
    }

    #[test]
    fn test_build_invalid_pattern() {
        let err = RuleConfig::Match("[".to_owned()).build().err().unwrap();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "["));
    }

    #[test]
    fn test_build_all_stops_on_error() {
        let ok = RuleConfig::build_all(&[RuleConfig::Required, RuleConfig::Email]).unwrap();
        assert_eq!(ok.len(), 2);

        let bad = RuleConfig::build_all(&[RuleConfig::Required, RuleConfig::Match("(".into())]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_unknown_rule_rejected() {
        assert!(serde_json::from_str::<RuleConfig>(r#"{"between": [1, 2]}"#).is_err());
        assert!(serde_json::from_str::<RuleConfig>(r#"{"len": -1}"#).is_err());
    }
}
