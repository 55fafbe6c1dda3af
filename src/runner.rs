use std::fmt::Display;

use tracing::debug;

use crate::{Check, OutputMode, Status};

/// Runs a fallible check and turns an error into a reportable result.
pub struct Runner<E> {
    on_error: Option<Box<dyn FnOnce(E) -> (Status, E)>>,
    output: OutputMode,
}

impl<E: Display> Runner<E> {
    pub fn new() -> Self {
        Self {
            on_error: None,
            output: OutputMode::default(),
        }
    }

    pub fn on_error(mut self, f: impl FnOnce(E) -> (Status, E) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// The output mode an error is reported with.
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// This will run either the default `on_error` handler or the one specified by calling
    /// [Runner::on_error]. Without a handler an error is reported as [Status::Critical].
    pub fn safe_run(self, f: impl FnOnce() -> Result<Check, E>) -> RunnerResult<E> {
        match f() {
            Ok(check) => RunnerResult::Ok(check),
            Err(err) => {
                debug!(%err, "check returned an error");
                let (state, err) = match self.on_error {
                    Some(f) => f(err),
                    None => (Status::Critical, err),
                };

                RunnerResult::Err(self.output, state, err)
            }
        }
    }
}

impl<E: Display> Default for Runner<E> {
    fn default() -> Self {
        Self::new()
    }
}

pub enum RunnerResult<E> {
    Ok(Check),
    Err(OutputMode, Status, E),
}

impl<E: Display> RunnerResult<E> {
    /// Converts an error into a check with a single status whose short output is the error
    /// message.
    pub fn into_check(self) -> Check {
        match self {
            RunnerResult::Ok(check) => check,
            RunnerResult::Err(output, state, err) => {
                Check::single(output, state, &err.to_string(), "")
            }
        }
    }

    pub fn print_and_exit(self) -> ! {
        self.into_check().print_and_exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("woops")]
    struct EmptyError;

    #[test]
    fn test_runner_ok() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| panic!("error handler called for a successful check"))
            .safe_run(|| Ok(Check::ok("fine", "")));

        assert!(matches!(result, RunnerResult::Ok(_)));
        assert_eq!(&result.into_check().to_nagios_string(), "[OK] fine");
    }

    #[test]
    fn test_runner_error() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| (Status::Unknown, EmptyError {}))
            .safe_run(|| Err(EmptyError {}));

        assert!(matches!(result, RunnerResult::Err(_, Status::Unknown, _)));

        let check = result.into_check();
        assert_eq!(check.exit_code(), 3);
        assert_eq!(&check.to_nagios_string(), "[UNKNOWN] woops");
    }

    #[test]
    fn test_runner_default_error_state() {
        let check = Runner::<EmptyError>::new()
            .with_output(OutputMode::debug())
            .safe_run(|| Err(EmptyError {}))
            .into_check();

        assert_eq!(check.final_status(), Status::Critical);
        assert_eq!(check.output().mode(), crate::Mode::Debug);
        assert_eq!(&check.to_nagios_string(), "[CRITICAL] woops");
    }

    #[test]
    fn test_runner_anyhow() {
        let check = Runner::<anyhow::Error>::new()
            .safe_run(|| Err(anyhow::anyhow!("connection refused")))
            .into_check();

        assert_eq!(&check.to_nagios_string(), "[CRITICAL] connection refused");
    }
}
