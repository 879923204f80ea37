//! Rule combinators
//!
//! Boolean composition of rules. Combinators are rules themselves, so they
//! nest and go through the same [`validate`](crate::foundation::validate)
//! entry point. There is no error aggregation: a combined rule answers a
//! single `bool` like any other.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, AndAll, and, and_all};
pub use not::{Not, not};
pub use or::{Or, OrAny, or, or_any};
