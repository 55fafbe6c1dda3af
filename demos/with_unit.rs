use std::time::Instant;

use sknchk::{Check, Unit};

fn main() {
    let started = Instant::now();
    let entries = std::fs::read_dir(".").map(|d| d.count()).ok();

    let mut check = Check::new();
    match entries {
        Some(n) => {
            check.add_short(&format!("{} entries in the current directory", n), false);
            check.add_ok();
        }
        None => {
            check.add_short("could not read the current directory", false);
            check.add_unknown();
        }
    }

    // A missing value is never printed
    check.add_perf_data(
        "entries",
        entries.map(|n| n as f64),
        Unit::Counter,
        None,
        None,
        Some(0.0),
        None,
    );
    check.add_perf_data(
        "duration",
        Some(started.elapsed().as_secs_f64() * 1000.0),
        Unit::Milliseconds,
        None,
        None,
        None,
        None,
    );
    // Custom units are written as given
    check.add_perf_data("speed", Some(10.0), "km", None, None, None, None);

    check.print_and_exit();
}
