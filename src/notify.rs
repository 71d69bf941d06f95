//! Operator interaction: confirming large exports and reporting results.

use crate::error::TreeclipError;
use crate::options::ExportLimits;
use crate::report::{ReportFormat, format_report, large_export_warning};
use crate::types::Aggregate;
use std::io::{self, BufRead, Write};

/// Asks the operator before large exports and tells them the outcome.
pub trait Notifier {
    /// Returns `true` to go ahead with an export whose preview exceeded `limits`.
    fn confirm_large_export(
        &mut self,
        preview: &Aggregate,
        limits: &ExportLimits,
    ) -> Result<bool, TreeclipError>;

    /// Called once the buffer has been handed to the sink.
    fn export_completed(&mut self, stats: &Aggregate, destination: &str)
    -> Result<(), TreeclipError>;
}

/// Prompts on a line-based terminal.
pub struct TerminalNotifier<R, W> {
    input: R,
    output: W,
    format: ReportFormat,
    assume_yes: bool,
}

impl TerminalNotifier<io::StdinLock<'static>, io::Stderr> {
    /// Reads answers from stdin and writes prompts and reports to stderr.
    pub fn stdio(format: ReportFormat, assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), format, assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalNotifier<R, W> {
    pub fn new(input: R, output: W, format: ReportFormat, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            format,
            assume_yes,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Notifier for TerminalNotifier<R, W> {
    fn confirm_large_export(
        &mut self,
        preview: &Aggregate,
        limits: &ExportLimits,
    ) -> Result<bool, TreeclipError> {
        writeln!(self.output, "{}", large_export_warning(preview, limits))
            .map_err(TreeclipError::Terminal)?;
        if self.assume_yes {
            writeln!(self.output, "Continuing (--yes).").map_err(TreeclipError::Terminal)?;
            return Ok(true);
        }
        write!(self.output, "Continue? [y/N] ").map_err(TreeclipError::Terminal)?;
        self.output.flush().map_err(TreeclipError::Terminal)?;
        let mut answer = String::new();
        // EOF reads zero bytes and declines.
        self.input
            .read_line(&mut answer)
            .map_err(TreeclipError::Terminal)?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn export_completed(
        &mut self,
        stats: &Aggregate,
        destination: &str,
    ) -> Result<(), TreeclipError> {
        let report = format_report(stats, "exported", Some(destination), self.format)?;
        writeln!(self.output, "{}", report).map_err(TreeclipError::Terminal)
    }
}

/// Answers every confirmation the same way and stays quiet.
#[derive(Debug, Clone, Default)]
pub struct NonInteractive {
    confirm: bool,
    /// Previews that reached the confirmation step.
    pub asked: Vec<Aggregate>,
    /// Totals reported on completion.
    pub completed: Option<Aggregate>,
}

impl NonInteractive {
    pub fn new(confirm: bool) -> Self {
        Self {
            confirm,
            ..Default::default()
        }
    }
}

impl Notifier for NonInteractive {
    fn confirm_large_export(
        &mut self,
        preview: &Aggregate,
        _limits: &ExportLimits,
    ) -> Result<bool, TreeclipError> {
        self.asked.push(*preview);
        Ok(self.confirm)
    }

    fn export_completed(
        &mut self,
        stats: &Aggregate,
        _destination: &str,
    ) -> Result<(), TreeclipError> {
        self.completed = Some(*stats);
        Ok(())
    }
}
