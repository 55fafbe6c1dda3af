use std::env::args;

use sknchk::{signal_critical, signal_ok, signal_unknown};

// Usage: cargo run --example simple -- haaa
//        cargo run --example simple -- itsfine

fn main() {
    // Grab the first argument
    let arg = args().nth(1).unwrap_or_default();

    // Check logic goes here
    match arg.as_ref() {
        "itsfine" => signal_ok("Everything is fine :-)", ""),
        "haaa" => signal_critical(
            "Something went terribly wrong!",
            "The argument given was 'haaa'",
        ),
        _ => signal_unknown("unexpected argument", ""),
    }
}
