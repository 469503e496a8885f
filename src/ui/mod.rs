//! User-facing output
//!
//! All status, warning and diagnostic output goes through the [`Reporter`]
//! trait, allowing different implementations based on command-line flags
//! (`--verbose`) and a silent implementation for tests.
//!
//! Status lines are written to stdout; warnings and errors go to stderr.

use console::Style;

use crate::error::HostwireError;

/// Reporter trait for workflow output
pub trait Reporter {
    /// A regular progress line
    fn info(&self, message: &str);

    /// A completed step
    fn success(&self, message: &str);

    /// A non-fatal problem the user should look at
    fn warn(&self, message: &str);

    /// Extra detail, only shown in verbose mode
    fn detail(&self, message: &str);

    /// Report a non-fatal diagnostic (e.g. a malformed host class)
    fn warn_diagnostic(&self, warning: &HostwireError) {
        self.warn(&warning.to_string());
    }
}

/// Console reporter with colored output
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn success(&self, message: &str) {
        println!("{} {}", Style::new().green().bold().apply_to("✔"), message);
    }

    fn warn(&self, message: &str) {
        eprintln!(
            "{} {}",
            Style::new().yellow().bold().apply_to("Warning:"),
            Style::new().yellow().apply_to(message)
        );
    }

    fn detail(&self, message: &str) {
        if self.verbose {
            println!("{}", Style::new().dim().apply_to(message));
        }
    }
}

/// Silent reporter for tests
#[cfg(test)]
#[derive(Default)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn info(&self, _message: &str) {}

    fn success(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn detail(&self, _message: &str) {}
}

/// Print a fatal error with its diagnostic code and help text
pub fn print_fatal(err: &HostwireError) {
    use miette::Diagnostic;

    let red = Style::new().red().bold();
    eprintln!("{} {}", red.apply_to("Error:"), Style::new().red().apply_to(err));
    if let Some(code) = err.code() {
        eprintln!("  {}", Style::new().dim().apply_to(format!("[{code}]")));
    }
    if let Some(help) = err.help() {
        eprintln!("  {} {}", Style::new().cyan().apply_to("help:"), help);
    }
    if let HostwireError::FileReadFailed { reason, .. }
    | HostwireError::FileWriteFailed { reason, .. }
    | HostwireError::ConfigParseFailed { reason, .. } = err
    {
        eprintln!("  {} {}", Style::new().dim().apply_to("cause:"), reason);
    }
}
