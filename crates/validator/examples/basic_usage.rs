//! Basic usage example for fieldcheck-validator

use fieldcheck_validator::prelude::*;

fn report(label: &str, input: impl std::fmt::Debug, valid: bool) {
    let mark = if valid { "✓" } else { "✗" };
    println!("{mark} {label}: {input:?}");
}

fn main() {
    // Numeric bounds are inclusive and accept integers only
    let age = min(18).and(max(130));
    for input in [17, 18, 42, 131] {
        report("age in 18..=130", input, validate(&age, input));
    }
    report("age as float", 42.0, validate(&age, 42.0));

    // Exact length
    for input in ["four", "two", "née!"] {
        report("exactly 4 bytes", input, validate(len(4), input));
        report("exactly 4 chars", input, validate(Len::chars(4), input));
    }

    // Presence
    let now = chrono::Utc::now();
    report("required string", "", validate(Required, ""));
    report("required int", -1, validate(Required, -1));
    report("required time", now, validate(Required, &now));
    report("required option", None::<&str>, validate(Required, None::<&str>));

    // Patterns
    report("contains a lowercase letter", "FOObar", validate(matches("[a-z]"), "FOObar"));
    for input in ["cihangir@koding.com", "aa.com"] {
        report("email", input, validate(email(), input));
    }

    // Invalid patterns from untrusted input go through the fallible constructor
    match Match::try_new("a(b") {
        Ok(_) => println!("pattern compiled"),
        Err(e) => println!("✗ {e}"),
    }

    println!("\nfieldcheck-validator is working correctly!");
}
