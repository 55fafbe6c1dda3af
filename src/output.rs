use std::fmt;
use std::str::FromStr;

use crate::Status;

const HTML_NEW_LINE: &str = "<br />";
const HTML_BULLET: &str = "&#8226;&#8194;";
const HTML_STYLE_OK: &str = "color: #28a745!important;";
const HTML_STYLE_WARNING: &str = "color: #ffc107!important;";
const HTML_STYLE_CRITICAL: &str = "color: #dc3545!important;";

const BADGE_STYLE: &str = "display: inline-block; padding: .25em .4em; font-size: 75%; \
font-weight: 700; line-height: 1; text-align: center; white-space: nowrap; \
vertical-align: baseline; border-radius: .25rem;";

/// The output style a check result is rendered with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Mode {
    /// Plain text, suitable for the classic nagios/shinken web interfaces.
    #[default]
    Cli,
    /// Inline styled HTML.
    Html,
    /// Plain text with real line breaks, meant for running a check by hand.
    Debug,
}

impl Mode {
    /// The tag of this mode as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cli => "cli",
            Mode::Html => "html",
            Mode::Debug => "debug",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown output mode '{0}', expected one of: cli, html, debug")]
pub struct ParseOutputModeError(String);

impl FromStr for Mode {
    type Err = ParseOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cli" => Ok(Mode::Cli),
            "html" => Ok(Mode::Html),
            "debug" => Ok(Mode::Debug),
            _ => Err(ParseOutputModeError(s.to_owned())),
        }
    }
}

/// Describes how fragments of a [crate::Check] are glued together and decorated.
///
/// Configure it once, before adding anything to a check: bullets are applied when a fragment is
/// added, while line separators and prefixes are applied when the result is rendered.
///
/// ```rust
/// # use sknchk::OutputMode;
/// let mut output = OutputMode::default();
/// assert_eq!(output.format_warning("x"), "x");
///
/// output.set_html();
/// assert_eq!(
///     output.format_warning("x"),
///     r#"<span style="color: #ffc107!important;">x</span>"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputMode {
    mode: Mode,
    new_line: &'static str,
    bullet: &'static str,
    style_ok: &'static str,
    style_warning: &'static str,
    style_critical: &'static str,
}

impl OutputMode {
    pub fn cli() -> Self {
        OutputMode {
            mode: Mode::Cli,
            new_line: "",
            bullet: " - ",
            style_ok: "",
            style_warning: "",
            style_critical: "",
        }
    }

    pub fn html() -> Self {
        let mut output = Self::cli();
        output.set_html();
        output
    }

    pub fn debug() -> Self {
        let mut output = Self::cli();
        output.set_debug();
        output
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches to HTML output.
    pub fn set_html(&mut self) {
        self.mode = Mode::Html;
        self.new_line = HTML_NEW_LINE;
        self.bullet = HTML_BULLET;
        self.style_ok = HTML_STYLE_OK;
        self.style_warning = HTML_STYLE_WARNING;
        self.style_critical = HTML_STYLE_CRITICAL;
    }

    /// Switches to debug output. Debug output is never colored.
    pub fn set_debug(&mut self) {
        self.mode = Mode::Debug;
        self.new_line = "\n";
        self.bullet = "- ";
        self.style_ok = "";
        self.style_warning = "";
        self.style_critical = "";
    }

    /// The separator placed between fragments.
    pub fn new_line(&self) -> &str {
        self.new_line
    }

    pub fn bullet(&self) -> &str {
        self.bullet
    }

    pub fn format_ok(&self, s: &str) -> String {
        self.colorize(s, self.style_ok)
    }

    pub fn format_warning(&self, s: &str) -> String {
        self.colorize(s, self.style_warning)
    }

    pub fn format_critical(&self, s: &str) -> String {
        self.colorize(s, self.style_critical)
    }

    /// The label printed in front of the short output for the given state.
    pub fn prefix(&self, status: Status) -> String {
        match self.mode {
            Mode::Html => {
                let (head, label) = match status {
                    Status::Ok => ("color:white; background-color: #28a745;", "OK"),
                    Status::Warning => ("color:#212529; background-color: #ffc107;", "Warning"),
                    Status::Critical => ("color:white; background-color: #dc3545;", "Critical"),
                    Status::Unknown => ("color:white; background-color: #6c757d;", "Unknown"),
                };
                format!(r#"<span style="{} {}">{}</span>"#, head, BADGE_STYLE, label)
            }
            Mode::Cli | Mode::Debug => format!("[{}]", status),
        }
    }

    fn colorize(&self, s: &str, style: &str) -> String {
        match self.mode {
            Mode::Html => format!(r#"<span style="{}">{}</span>"#, style, s),
            Mode::Cli | Mode::Debug => s.to_owned(),
        }
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::cli()
    }
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Cli => OutputMode::cli(),
            Mode::Html => OutputMode::html(),
            Mode::Debug => OutputMode::debug(),
        }
    }
}
