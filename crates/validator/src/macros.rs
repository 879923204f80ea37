//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: Create a complete rule (struct + `Rule` impl + factory fn)
//! - [`all_of!`]: AND-chain multiple rules
//! - [`any_of!`]: OR-chain multiple rules
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::rule;
//! use fieldcheck_validator::foundation::{Rule, Value};
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub Positive;
//!     name = "positive";
//!     evaluate(value) { matches!(value, Value::Int(n) if *n > 0) }
//!     fn positive();
//! }
//!
//! // Struct with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub DivisibleBy { divisor: i64 };
//!     name = "divisible_by";
//!     evaluate(self, value) {
//!         matches!(value, Value::Int(n) if self.divisor != 0 && n % self.divisor == 0)
//!     }
//!     fn divisible_by(divisor: i64);
//! }
//!
//! assert!(positive().evaluate(&Value::Int(3)));
//! assert!(divisible_by(3).evaluate(&Value::Int(9)));
//! assert!(!divisible_by(3).evaluate(&Value::Str("9")));
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// Unit rules always derive `Debug, Clone, Copy, PartialEq, Eq, Hash, Default`.
/// Rules with fields derive `Debug, Clone`; add more via `#[derive(...)]`.
/// Fields are public and `new` takes them in declaration order.
#[macro_export]
macro_rules! rule {
    // ── Unit rule + factory fn ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        name = $rname:literal;
        evaluate($val:ident) $body:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            name = $rname;
            evaluate($val) $body
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit rule, no factory ────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        name = $rname:literal;
        evaluate($val:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn name(&self) -> &'static str {
                $rname
            }

            fn evaluate(&self, $val: &$crate::foundation::Value<'_>) -> bool $body
        }
    };

    // ── Struct with fields + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        name = $rname:literal;
        evaluate($self_:ident, $val:ident) $body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            name = $rname;
            evaluate($self_, $val) $body
        }

        #[must_use]
        $vis const fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields, no factory ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        name = $rname:literal;
        evaluate($self_:ident, $val:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            fn name(&self) -> &'static str {
                $rname
            }

            fn evaluate(&$self_, $val: &$crate::foundation::Value<'_>) -> bool $body
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// AND-chains rules: `all_of!(a, b, c)` is `a.and(b).and(c)`.
///
/// Requires [`RuleExt`](crate::foundation::RuleExt) in scope.
#[macro_export]
macro_rules! all_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

/// OR-chains rules: `any_of!(a, b, c)` is `a.or(b).or(c)`.
///
/// Requires [`RuleExt`](crate::foundation::RuleExt) in scope.
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}
