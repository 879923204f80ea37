//! Numeric bound rules
//!
//! Both bounds are inclusive and apply to [`Value::Int`] only. Floats,
//! booleans and numeric strings are never coerced: they fail.

use crate::foundation::Value;

crate::rule! {
    /// Accepts integers greater than or equal to `min`.
    ///
    /// ```
    /// use fieldcheck_validator::prelude::*;
    ///
    /// assert!(validate(min(4), 4));
    /// assert!(!validate(min(4), 0));
    /// assert!(!validate(min(4), 11.1212));
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min { min: i64 };
    name = "min";
    evaluate(self, value) { matches!(value, Value::Int(n) if *n >= self.min) }
    fn min(min: i64);
}

crate::rule! {
    /// Accepts integers less than or equal to `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max { max: i64 };
    name = "max";
    evaluate(self, value) { matches!(value, Value::Int(n) if *n <= self.max) }
    fn max(max: i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;

    #[rstest]
    #[case(-1, false)]
    #[case(0, false)]
    #[case(4, true)]
    #[case(5, true)]
    #[case(11, true)]
    fn test_min(#[case] input: i64, #[case] expected: bool) {
        assert_eq!(min(4).evaluate(&Value::Int(input)), expected);
    }

    #[rstest]
    #[case(-1, true)]
    #[case(0, true)]
    #[case(4, true)]
    #[case(5, false)]
    #[case(11, false)]
    fn test_max(#[case] input: i64, #[case] expected: bool) {
        assert_eq!(max(4).evaluate(&Value::Int(input)), expected);
    }

    #[test]
    fn test_extreme_bounds() {
        assert!(min(i64::MIN).evaluate(&Value::Int(i64::MIN)));
        assert!(max(i64::MAX).evaluate(&Value::Int(i64::MAX)));
    }

    #[rstest]
    #[case(Value::Bool(true))]
    #[case(Value::Float(11.1212))]
    #[case(Value::Float(4.0))]
    #[case(Value::Str("5"))]
    #[case(Value::Nil)]
    #[case(Value::Unsupported("u64"))]
    fn test_non_integers_fail(#[case] input: Value<'static>) {
        assert!(!min(4).evaluate(&input));
        assert!(!max(4).evaluate(&input));
    }
}
