use clap::Parser;

use sknchk::{Check, Mode, OutputMode};

// Usage: cargo run --features clap --example output_mode -- --output html --load 3.2

#[derive(clap::Parser)]
struct Cli {
    /// How the result is rendered
    #[clap(long, value_enum, default_value_t = Mode::Cli)]
    output: Mode,
    /// The value to report
    #[clap(long)]
    load: f64,
    #[clap(long, default_value_t = 4.0)]
    warn: f64,
    #[clap(long, default_value_t = 8.0)]
    crit: f64,
}

fn main() {
    let cli = Cli::parse();

    // The output mode has to be chosen before anything is added to the check
    let mut check = Check::with_output(OutputMode::from(cli.output));

    let load = format!("load is {:.2}", cli.load);
    if cli.load >= cli.crit {
        let text = check.output().format_critical(&load);
        check.add_short(&text, false);
        check.add_critical();
    } else if cli.load >= cli.warn {
        let text = check.output().format_warning(&load);
        check.add_short(&text, false);
        check.add_warning();
    } else {
        let text = check.output().format_ok(&load);
        check.add_short(&text, false);
        check.add_ok();
    }

    check.add_perf_data(
        "load",
        Some(cli.load),
        "",
        Some(cli.warn),
        Some(cli.crit),
        Some(0.0),
        None,
    );

    check.print_and_exit();
}
