//! Text and JSON rendering of scenario reports.

use std::fmt::Write;

use crate::error::CliError;
use crate::programs::SampleProgram;
use crate::runner::ScenarioReport;

/// Trace lines shown per run before the rest are elided.
pub const TRACE_DISPLAY_LIMIT: usize = 40;

/// Human-readable report for one program.
pub fn render_text(report: &ScenarioReport, show_trace: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {}: {}, {}", report.name, report.program, report.initial);
    if let Some(limit) = report.step_limit {
        let _ = writeln!(out, "   (step limit {limit})");
    }
    for run in &report.runs {
        if show_trace && !run.trace.is_empty() {
            for line in run.trace.iter().take(TRACE_DISPLAY_LIMIT) {
                let _ = writeln!(out, "   | {line}");
            }
            if run.trace.len() > TRACE_DISPLAY_LIMIT {
                let _ = writeln!(
                    out,
                    "   | ... {} more",
                    run.trace.len() - TRACE_DISPLAY_LIMIT
                );
            }
        }
        let _ = writeln!(out, "   {:<13} {}", run.strategy.name(), run.outcome);
    }
    let verdict = match (report.agree, report.expected) {
        (true, true) => "ok",
        (false, _) => "FAILED: strategies disagree",
        (true, false) => "FAILED: unexpected outcome",
    };
    let _ = writeln!(out, "   {verdict}");
    out
}

/// One-line JSON report for one program.
pub fn render_json(report: &ScenarioReport) -> Result<String, CliError> {
    Ok(serde_json::to_string(report)?)
}

/// `--list` output.
pub fn render_catalog(programs: &[SampleProgram]) -> String {
    let mut out = String::new();
    for program in programs {
        let _ = writeln!(out, "{:<14} {}", program.name, program.description);
        let _ = writeln!(out, "{:<14} {}, {}", "", program.statement, program.environment);
    }
    out
}
