//! # fieldcheck-validator
//!
//! Small, composable rules for validating individual field values.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! assert!(validate(min(4), 4));
//! assert!(!validate(len(4), "two"));
//! assert!(validate(Required, "x"));
//! assert!(validate(email(), "cihangir@koding.com"));
//! ```
//!
//! Every check goes through [`validate`](foundation::validate) and answers a
//! plain `bool`. Type mismatches (a string handed to [`Min`](validators::Min),
//! a float handed to [`Required`](validators::Required)) fail closed rather
//! than erroring.
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate rules, or implement
//! [`Rule`](foundation::Rule) manually for anything with a custom constructor.
//!
//! ## Built-in Rules
//!
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max)
//! - **String**: [`Len`](validators::Len), [`Match`](validators::Match),
//!   [`Email`](validators::Email)
//! - **Presence**: [`Required`](validators::Required)
//!
//! ## Logging
//!
//! The crate logs through `tracing` and never installs a subscriber.
//! `Required` emits a `WARN` event when it is handed a kind of value it has no
//! notion of presence for.

pub mod combinators;
#[cfg(feature = "serde")]
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
