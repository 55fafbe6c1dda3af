use std::fmt::Display;

use crate::{Check, OutputMode, Runner, RunnerResult, Status};

/// Runs the given closure and reports an error with the given state.
///
/// ```rust,no_run
/// # use std::error::Error;
/// # use sknchk::{safe_run, Check, Status};
/// fn do_check() -> Result<Check, Box<dyn Error>> {
///     Ok(Check::ok("all good", ""))
/// }
///
/// safe_run(do_check, Status::Unknown).print_and_exit()
/// ```
pub fn safe_run<E, F>(f: F, error_state: Status) -> RunnerResult<E>
where
    E: Display + 'static,
    F: FnOnce() -> Result<Check, E>,
{
    Runner::new()
        .on_error(move |err| (error_state, err))
        .safe_run(f)
}

/// Exits with `status`, printing `short` and, if not empty, `long` with the given output mode.
///
/// ```rust,no_run
/// # use sknchk::{signal_with_output, OutputMode, Status};
/// signal_with_output(OutputMode::html(), Status::Critical, "disk full", "/var is at 100%")
/// ```
pub fn signal_with_output(output: OutputMode, status: Status, short: &str, long: &str) -> ! {
    Check::single(output, status, short, long).print_and_exit()
}

/// Exits with [Status::Ok], printing `short` and, if not empty, `long`.
pub fn signal_ok(short: &str, long: &str) -> ! {
    signal_with_output(OutputMode::default(), Status::Ok, short, long)
}

/// Exits with [Status::Warning], printing `short` and, if not empty, `long`.
pub fn signal_warning(short: &str, long: &str) -> ! {
    signal_with_output(OutputMode::default(), Status::Warning, short, long)
}

/// Exits with [Status::Critical], printing `short` and, if not empty, `long`.
pub fn signal_critical(short: &str, long: &str) -> ! {
    signal_with_output(OutputMode::default(), Status::Critical, short, long)
}

/// Exits with [Status::Unknown], printing `short` and, if not empty, `long`.
pub fn signal_unknown(short: &str, long: &str) -> ! {
    signal_with_output(OutputMode::default(), Status::Unknown, short, long)
}
