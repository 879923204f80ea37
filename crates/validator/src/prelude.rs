//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the rule trait, the dispatcher, every built-in rule and the
//! combinators.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let username = required().and(matches("^[a-z0-9_]+$"));
//! assert!(validate(&username, "gopher_42"));
//! assert!(!validate(&username, ""));
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, dispatch
// ============================================================================

pub use crate::foundation::{
    Rule, RuleError, RuleExt, Validation, Value, validate, validate_all, validate_any,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, AndAll, Not, Or, OrAny, and_all, or_any};

// ============================================================================
// SERDE-GATED: Rules declared as data
// ============================================================================

#[cfg(feature = "serde")]
pub use crate::config::RuleConfig;
