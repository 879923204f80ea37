//! Presence rule
//!
//! [`Required`] treats the zero value of each supported kind as "not
//! provided":
//!
//! | Input | Passes when |
//! |---|---|
//! | `Nil` | never |
//! | string | non-empty |
//! | `bool` | `true` |
//! | integer | non-zero |
//! | timestamp (by value or reference) | not a zero instant |
//!
//! Every other kind fails and emits a `WARN` event naming the type, so gaps
//! in coverage show up in logs instead of crashing callers.

use chrono::{DateTime, Utc};

use crate::foundation::Value;

/// `0001-01-01T00:00:00Z` as seconds from the Unix epoch.
const YEAR_ONE_SECS: i64 = -62_135_596_800;

/// Whether `t` is one of the instants treated as "unset": the Unix epoch
/// (`DateTime::<Utc>::default()`) or the first instant of year 1.
pub(crate) fn is_zero_time(t: &DateTime<Utc>) -> bool {
    t.timestamp_subsec_nanos() == 0 && matches!(t.timestamp(), 0 | YEAR_ONE_SECS)
}

crate::rule! {
    /// Accepts values that are present and non-zero.
    ///
    /// ```
    /// use fieldcheck_validator::prelude::*;
    ///
    /// assert!(validate(Required, "foo"));
    /// assert!(validate(Required, -1));
    /// assert!(!validate(Required, ""));
    /// assert!(!validate(Required, false));
    /// assert!(!validate(Required, None::<&str>));
    /// ```
    pub Required;
    name = "required";
    evaluate(value) {
        match value {
            Value::Nil => false,
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Time(t) => !is_zero_time(t),
            Value::TimeRef(t) => !is_zero_time(t),
            Value::Float(_) | Value::Unsupported(_) => {
                tracing::warn!(
                    value_type = value.type_name(),
                    "required: validation not implemented for type"
                );
                false
            }
        }
    }
    fn required();
}
