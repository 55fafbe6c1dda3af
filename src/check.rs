use std::io::{self, Write};
use std::process;

use tracing::{debug, error, trace};

use crate::perfdata::{perf_string, PerfData, Unit};
use crate::{OutputMode, Status};

const SEE_LONG_OUTPUT: &str = "For more details see long output.";

/// Collects everything a check run finds out until it is time to report to nagios.
///
/// Status signals and text are recorded independently and only combined when the result is
/// rendered. The final status is the worst signal recorded, or OK if none was.
///
/// ```rust
/// # use sknchk::{Check, Status};
/// let mut check = Check::new();
/// check.add_short("3 disks checked", false);
/// check.add_ok();
/// check.add_warning();
/// check.add_perf_data("usage", Some(87.0), "%", Some(80.0), Some(90.0), None, None);
///
/// assert_eq!(check.final_status(), Status::Warning);
/// assert_eq!(
///     &check.to_nagios_string(),
///     "[WARNING] 3 disks checked|usage=87.00%;80;90;;"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Check {
    output: OutputMode,
    short: Vec<String>,
    long: Vec<String>,
    perf_data: Vec<PerfData>,
    statuses: Vec<Status>,
}

impl Check {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty check rendered with the given output mode.
    pub fn with_output(output: OutputMode) -> Self {
        Check {
            output,
            ..Self::default()
        }
    }

    /// Creates a check holding a single status, one short fragment and, if `long` is not empty,
    /// one long fragment.
    pub fn single(output: OutputMode, status: Status, short: &str, long: &str) -> Self {
        let mut check = Check::with_output(output);
        check.short.push(short.to_owned());
        if !long.is_empty() {
            check.long.push(long.to_owned());
        }
        check.statuses.push(status);
        check
    }

    pub fn ok(short: &str, long: &str) -> Self {
        Check::single(OutputMode::default(), Status::Ok, short, long)
    }

    pub fn warning(short: &str, long: &str) -> Self {
        Check::single(OutputMode::default(), Status::Warning, short, long)
    }

    pub fn critical(short: &str, long: &str) -> Self {
        Check::single(OutputMode::default(), Status::Critical, short, long)
    }

    pub fn unknown(short: &str, long: &str) -> Self {
        Check::single(OutputMode::default(), Status::Unknown, short, long)
    }

    pub fn output(&self) -> &OutputMode {
        &self.output
    }

    pub fn short(&self) -> &[String] {
        &self.short
    }

    pub fn long(&self) -> &[String] {
        &self.long
    }

    pub fn perf_data(&self) -> &[PerfData] {
        &self.perf_data
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Appends a fragment to the short output.
    pub fn add_short(&mut self, short: &str, bullet: bool) {
        let fragment = self.fragment(short, bullet);
        self.short.push(fragment);
    }

    /// Inserts a fragment in front of the short output.
    pub fn prepend_short(&mut self, short: &str, bullet: bool) {
        let fragment = self.fragment(short, bullet);
        self.short.insert(0, fragment);
    }

    /// Appends a fragment to the long output.
    pub fn add_long(&mut self, long: &str, bullet: bool) {
        let fragment = self.fragment(long, bullet);
        self.long.push(fragment);
    }

    pub fn add_ok(&mut self) {
        self.add_status(Status::Ok)
    }

    pub fn add_warning(&mut self) {
        self.add_status(Status::Warning)
    }

    pub fn add_critical(&mut self) {
        self.add_status(Status::Critical)
    }

    pub fn add_unknown(&mut self) {
        self.add_status(Status::Unknown)
    }

    pub fn add_status(&mut self, status: Status) {
        trace!(%status, "recording status");
        self.statuses.push(status);
    }

    /// Appends a performance metric. A metric without value is kept but never printed.
    #[allow(clippy::too_many_arguments)]
    pub fn add_perf_data(
        &mut self,
        name: &str,
        value: Option<f64>,
        unit: impl Into<Unit>,
        warn: Option<f64>,
        crit: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
    ) {
        self.perf_data
            .push(PerfData::new(name, value, unit, warn, crit, min, max));
    }

    /// Returns the worst recorded status, or [Status::Ok] if nothing has been recorded.
    pub fn final_status(&self) -> Status {
        self.statuses.iter().copied().max().unwrap_or(Status::Ok)
    }

    /// Will return the exit code of the determined state via Self::final_status.
    pub fn exit_code(&self) -> i32 {
        self.final_status().exit_code()
    }

    /// Returns the complete text nagios reads from stdout.
    ///
    /// When there is long output, a pointer to it is added to the short output and the long
    /// output follows on the next line. Performance data is appended after a `|` if at least one
    /// metric has a value.
    pub fn to_nagios_string(&self) -> String {
        let new_line = self.output.new_line();
        let mut s = format!("{} ", self.output.prefix(self.final_status()));

        if self.long.is_empty() {
            s.push_str(&self.short.join(new_line));
        } else {
            let pointer = format!("{}{}", new_line, SEE_LONG_OUTPUT);
            let short = self
                .short
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(pointer.as_str()))
                .collect::<Vec<_>>();

            s.push_str(&short.join(new_line));
            s.push('\n');
            s.push_str(&self.long.join(new_line));
        }

        let perf = perf_string(&self.perf_data);
        if !perf.is_empty() {
            s.push('|');
            s.push_str(&perf);
        }

        s
    }

    /// Writes the rendered result and returns the status it represents.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<Status> {
        let status = self.final_status();
        w.write_all(self.to_nagios_string().as_bytes())?;
        w.flush()?;
        Ok(status)
    }

    /// Will print Self::to_nagios_string and exit with the exit code from Self::exit_code.
    ///
    /// If stdout can't be written to, the process exits as UNKNOWN.
    pub fn print_and_exit(&self) -> ! {
        let stdout = io::stdout();
        match self.write_to(&mut stdout.lock()) {
            Ok(status) => {
                debug!(%status, "check finished");
                process::exit(status.exit_code())
            }
            Err(err) => {
                error!(%err, "failed to write check result");
                process::exit(Status::Unknown.exit_code())
            }
        }
    }

    fn fragment(&self, text: &str, bullet: bool) -> String {
        if bullet {
            format!("{}{}", self.output.bullet(), text)
        } else {
            text.to_owned()
        }
    }
}
