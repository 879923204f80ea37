//! The closed set of input kinds a rule can inspect.
//!
//! Rules never see arbitrary Rust types. Callers convert into [`Value`]
//! (usually implicitly, through `impl Into<Value>` on the dispatcher) and each
//! rule pattern-matches on the variant it understands. Anything outside the
//! supported kinds becomes [`Value::Unsupported`], carrying the source type
//! name so diagnostics can say what was passed.

use chrono::{DateTime, Utc};

/// A borrowed, type-tagged view of a field value.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::Value;
///
/// assert_eq!(Value::from("foo"), Value::Str("foo"));
/// assert_eq!(Value::from(42_u8), Value::Int(42));
/// assert_eq!(Value::from(None::<i32>), Value::Nil);
/// assert_eq!(Value::from(u64::MAX), Value::Unsupported("u64"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// No value at all.
    Nil,
    /// A string slice.
    Str(&'a str),
    /// A boolean.
    Bool(bool),
    /// Any integer that fits in `i64`.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A timestamp held by value.
    Time(DateTime<Utc>),
    /// A timestamp held by reference.
    TimeRef(&'a DateTime<Utc>),
    /// A value of a type no rule knows how to inspect.
    Unsupported(&'static str),
}

impl Value<'_> {
    /// Builds an [`Value::Unsupported`] tagged with the name of `T`.
    ///
    /// ```
    /// use fieldcheck_validator::foundation::Value;
    ///
    /// let v = Value::unsupported::<Vec<u8>>();
    /// assert!(v.type_name().ends_with("Vec<u8>"));
    /// ```
    #[must_use]
    pub fn unsupported<T: ?Sized>() -> Value<'static> {
        Value::Unsupported(std::any::type_name::<T>())
    }

    /// Name of the type this value was produced from, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Str(_) => "&str",
            Value::Bool(_) => "bool",
            Value::Int(_) => "i64",
            Value::Float(_) => "f64",
            Value::Time(_) => "DateTime<Utc>",
            Value::TimeRef(_) => "&DateTime<Utc>",
            Value::Unsupported(name) => *name,
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Value::Str(s.as_str())
    }
}

impl From<bool> for Value<'_> {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value<'_> {
    #[inline]
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl<'a> From<&'a DateTime<Utc>> for Value<'a> {
    #[inline]
    fn from(t: &'a DateTime<Utc>) -> Self {
        Value::TimeRef(t)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    #[inline]
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Nil, Into::into)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline]
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )+
    };
}

// Wide integers only become `Int` when the value fits.
macro_rules! impl_from_wide_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline]
                fn from(n: $t) -> Self {
                    i64::try_from(n).map_or(Value::Unsupported(stringify!($t)), Value::Int)
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
impl_from_wide_int!(isize, usize, u64, i128, u128);

impl From<f32> for Value<'_> {
    #[inline]
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value<'_> {
    #[inline]
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(json: &'a serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if n.is_u64() {
                    Value::Unsupported("u64")
                } else {
                    n.as_f64().map_or(Value::Unsupported("number"), Value::Float)
                }
            }
            Json::String(s) => Value::Str(s.as_str()),
            Json::Array(_) => Value::Unsupported("array"),
            Json::Object(_) => Value::Unsupported("object"),
        }
    }
}
