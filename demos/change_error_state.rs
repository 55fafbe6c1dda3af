use anyhow::anyhow;

use sknchk::{Check, OutputMode, Runner, Status};

fn main() {
    // Instead of exiting a critical service state, we exit with a service state of "unknown" on error.
    Runner::<anyhow::Error>::new()
        .with_output(OutputMode::debug())
        .on_error(|e| (Status::Unknown, e))
        .safe_run(do_check)
        .print_and_exit()
}

// This example uses anyhow
fn do_check() -> Result<Check, anyhow::Error> {
    // Do something which returns an error.
    Err(anyhow!("something really bad happened"))
}
