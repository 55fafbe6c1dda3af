use std::env::args;

use sknchk::Check;

// Usage: cargo run --example aggregate -- 12 85 97

fn main() {
    let mut check = Check::new();

    let usages: Vec<f64> = args().skip(1).filter_map(|a| a.parse().ok()).collect();
    if usages.is_empty() {
        check.add_short("no usage given", false);
        check.add_unknown();
    }

    for (i, usage) in usages.iter().enumerate() {
        let name = format!("disk{}", i);

        if *usage >= 95.0 {
            // surface the worst news first
            check.prepend_short(&format!("{} is full", name), true);
            check.add_critical();
        } else if *usage >= 80.0 {
            check.add_short(&format!("{} is filling up", name), true);
            check.add_warning();
        } else {
            check.add_ok();
        }

        check.add_long(&format!("{} at {:.1}%", name, usage), true);
        check.add_perf_data(
            &name,
            Some(*usage),
            "%",
            Some(80.0),
            Some(95.0),
            Some(0.0),
            Some(100.0),
        );
    }

    // print status, perfdata, and exit
    check.print_and_exit();
}
