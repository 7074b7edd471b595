//! Console rendering for validation reports.

use anyhow::Result;
use clap::ValueEnum;

use crate::models::CheckReport;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable console lines.
    Text,
    /// Prettified JSON document.
    Json,
}

/// Render a report in the requested format.
pub fn render_report(report: &CheckReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(report: &CheckReport) -> String {
    if report.is_ok() {
        return "all local references exist".to_string();
    }

    let mut lines = vec!["missing local references:".to_string()];
    for entry in &report.missing {
        lines.push(format!(
            "  line {}: {} -> {}",
            entry.line,
            entry.raw,
            entry.resolved.display()
        ));
    }
    lines.join("\n")
}
