//! The sknchk crate provides the basic plumbing of a shinken/nagios check: collecting partial
//! results, deciding on the worst state, printing the plugin output line and exiting with the
//! matching exit code.
//!
//! ```rust,no_run
//! use sknchk::{Check, OutputMode};
//!
//! let mut check = Check::with_output(OutputMode::debug());
//! check.add_short("2 of 3 disks are fine", false);
//! check.add_long("/var is 95% full", true);
//! check.add_critical();
//! check.add_perf_data("var", Some(95.0), "%", Some(80.0), Some(90.0), Some(0.0), Some(100.0));
//!
//! // Prints the result and exits with 2
//! check.print_and_exit();
//! ```

use std::fmt;

mod check;
mod helper;
mod output;
mod perfdata;
mod runner;

pub use crate::check::Check;
pub use crate::helper::{
    safe_run, signal_critical, signal_ok, signal_unknown, signal_warning, signal_with_output,
};
pub use crate::output::{Mode, OutputMode, ParseOutputModeError};
pub use crate::perfdata::{perf_string, PerfData, Unit};
pub use crate::runner::{Runner, RunnerResult};

/// Represents a service state from nagios.
///
/// States are ordered by severity, UNKNOWN being the most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Returns the corresponding nagios exit code to signal the service state of self.
    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::Status;

    #[test]
    fn test_state() {
        assert_eq!(Status::Ok.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Critical.exit_code(), 2);
        assert_eq!(Status::Unknown.exit_code(), 3);

        assert_eq!(&Status::Ok.to_string(), "OK");
        assert_eq!(&Status::Warning.to_string(), "WARNING");
        assert_eq!(&Status::Critical.to_string(), "CRITICAL");
        assert_eq!(&Status::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_state_order() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert!(Status::Critical < Status::Unknown);
        assert_eq!(Status::Critical.max(Status::Unknown), Status::Unknown);
    }
}
