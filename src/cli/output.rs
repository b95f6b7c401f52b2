//! Terminal output for CLI commands.

use std::io;

use console::{Term, style};

/// Prints progress, results and warnings, honouring verbose/quiet flags.
///
/// Normal output goes to stdout; warnings and errors go to stderr and are
/// shown even in quiet mode. Colors are dropped automatically when the
/// stream is not a terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    stdout: Term,
    stderr: Term,
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            verbose,
            quiet,
        }
    }

    fn out(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(line)
    }

    /// Detail line, verbose mode only.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose {
            self.out(&style(message).dim().to_string())
        } else {
            Ok(())
        }
    }

    /// Progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.out(&format!("{} {message}", style("→").cyan()))
    }

    /// Success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.out(&format!("{} {message}", style("✓").green().bold()))
    }

    /// Warning line on stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.stderr
            .write_line(&format!("{} {}", style("⚠").yellow().bold(), style(message).yellow()))
    }

    /// Error line on stderr.
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.stderr
            .write_line(&format!("{} {}", style("✗").red().bold(), style(message).red()))
    }

    /// Section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.out("")?;
        self.out(&style(title).bold().to_string())
    }

    /// Indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.out(&format!("  {message}"))
    }
}
