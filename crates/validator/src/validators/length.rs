//! Exact string length rule
//!
//! [`Len`] checks for *equality*, not an upper bound: `Len::new(4)` rejects
//! both `"two"` and `"thisislongerthanforcharacter"`. Length is measured in
//! bytes by default; use [`Len::chars`] to count Unicode scalar values.

use crate::foundation::{Rule, Value};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// LEN
// ============================================================================

/// Accepts strings whose length is exactly `length`.
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// assert!(validate(len(4), "four"));
/// assert!(!validate(len(4), "two"));
/// assert!(!validate(len(4), 2));
///
/// // "née" is 4 bytes but 3 chars
/// assert!(validate(Len::chars(3), "née"));
/// assert!(!validate(Len::new(3), "née"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Len {
    /// Required length.
    pub length: usize,
    /// Unit the length is counted in.
    pub mode: LengthMode,
}

impl Len {
    /// Creates a rule that counts bytes.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Bytes,
        }
    }

    /// Creates a rule that counts Unicode scalar values.
    #[must_use]
    pub const fn chars(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Chars,
        }
    }
}

impl Rule for Len {
    fn name(&self) -> &'static str {
        "len"
    }

    fn evaluate(&self, value: &Value<'_>) -> bool {
        matches!(value, Value::Str(s) if self.mode.measure(s) == self.length)
    }
}

/// Creates a byte-counting [`Len`] rule.
#[must_use]
pub const fn len(length: usize) -> Len {
    Len::new(length)
}
