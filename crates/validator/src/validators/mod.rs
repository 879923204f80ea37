//! Built-in rules
//!
//! # Categories
//!
//! - **Numeric**: [`Min`], [`Max`]
//! - **String**: [`Len`], [`Match`], [`Email`]
//! - **Presence**: [`Required`]
//!
//! Each rule has a lowercase factory function (`min(4)`, `len(4)`,
//! `required()`, `matches("[a-z]")`, `email()`).
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let age = min(18).and(max(130));
//! let code = required().and(len(4));
//!
//! assert!(validate(&age, 42));
//! assert!(validate(&code, "AB12"));
//! assert!(validate(email(), "user@example.com"));
//! ```

pub mod content;
pub mod length;
pub mod nullable;
pub mod range;

pub use content::{EMAIL_PATTERN, Email, Match, email, matches};
pub use length::{Len, LengthMode, len};
pub use nullable::{Required, required};
pub use range::{Max, Min, max, min};
