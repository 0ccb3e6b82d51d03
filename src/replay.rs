//! Headless replay of composer input scripts.
//!
//! Runs parsed script entries through a [`Controller`] backed by a
//! [`RecordingHost`] and writes one report per input, either as a
//! readable line or as JSON.

use crate::controller::{Controller, HostCommand, RecordingHost};
use crate::model::{ComposerInput, Mode, PanelMetrics, ScriptEntry};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, warn};

/// How replay reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<line> <input>: <from> -> <to> [commands]`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// What one script input did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// 1-indexed script line.
    pub line: usize,
    /// The input on that line.
    pub input: ComposerInput,
    /// Mode before the input.
    pub from: Mode,
    /// Mode after the input.
    pub to: Mode,
    /// Whether the mode changed.
    pub changed: bool,
    /// Host commands issued, in order. Empty when unchanged.
    pub commands: Vec<HostCommand>,
    /// Host command failures, already formatted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

impl ReplayReport {
    /// Render as a single human-readable line (no trailing newline).
    pub fn to_text(&self) -> String {
        let mut text = if self.changed {
            let commands: Vec<String> = self.commands.iter().map(ToString::to_string).collect();
            format!(
                "{} {}: {} -> {} [{}]",
                self.line,
                self.input,
                self.from,
                self.to,
                commands.join(", ")
            )
        } else {
            format!("{} {}: unchanged", self.line, self.input)
        };
        if !self.failures.is_empty() {
            text.push_str(" failed: ");
            text.push_str(&self.failures.join("; "));
        }
        text
    }
}

/// Totals for a finished replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Valid inputs applied.
    pub inputs: usize,
    /// Inputs that changed the mode.
    pub changed: usize,
    /// Lines skipped as malformed.
    pub malformed: usize,
    /// Host command failures across all inputs.
    pub host_failures: usize,
}

/// Run one input through the controller and describe the outcome.
pub fn step(
    controller: &mut Controller<RecordingHost>,
    line: usize,
    input: ComposerInput,
) -> ReplayReport {
    let from = controller.mode();
    let (changed, failures) = match controller.apply(input) {
        Ok(applied) => (applied.is_changed(), Vec::new()),
        Err(err) => (true, err.failures.iter().map(ToString::to_string).collect()),
    };

    ReplayReport {
        line,
        input,
        from,
        to: controller.mode(),
        changed,
        commands: controller.host_mut().drain(),
        failures,
    }
}

/// Replay `entries` against a fresh controller, writing reports to `out`.
///
/// Malformed lines are logged and skipped.
///
/// # Errors
///
/// Returns an I/O error if writing a report fails.
pub fn replay<W: Write>(
    entries: &[ScriptEntry],
    metrics: PanelMetrics,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<ReplaySummary> {
    let mut controller = Controller::new(RecordingHost::new(), metrics);
    let mut summary = ReplaySummary::default();

    for entry in entries {
        let (line, input) = match entry {
            ScriptEntry::Input { line_number, input } => (*line_number, *input),
            ScriptEntry::Malformed(malformed) => {
                warn!(
                    line = malformed.line_number(),
                    error = malformed.error_message(),
                    raw = malformed.raw_line(),
                    "skipping malformed script line"
                );
                summary.malformed += 1;
                continue;
            }
        };

        let report = step(&mut controller, line, input);
        summary.inputs += 1;
        if report.changed {
            summary.changed += 1;
        }
        summary.host_failures += report.failures.len();

        match format {
            OutputFormat::Text => writeln!(out, "{}", report.to_text())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
    }

    debug!(?summary, final_mode = %controller.mode(), "replay finished");
    Ok(summary)
}
