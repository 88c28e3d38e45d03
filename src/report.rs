//! Plain-text report for one evaluation.
//!
//! The format is newline-delimited `key: value` lines meant for people; no
//! other tool parses it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::consts::{REPORT_FILE_NAME, format_index, format_value};
use crate::engine::{Evaluation, Parameter};

/// Timestamp format used in the `Date:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the report text. `label` is an optional sample identifier.
/// Readings are printed unrounded; only the index is rounded.
pub fn render(evaluation: &Evaluation, timestamp: DateTime<Local>, label: Option<&str>) -> String {
    let reading = &evaluation.reading;
    let mut out = String::from("Water quality report - Aquasens\n");
    out.push_str(&format!("Date: {}\n", timestamp.format(TIMESTAMP_FORMAT)));
    if let Some(label) = label {
        out.push_str(&format!("Sample: {label}\n"));
    }

    out.push_str("\nReadings:\n");
    for (parameter, value) in [
        (Parameter::Ph, reading.ph),
        (Parameter::Turbidity, reading.turbidity),
        (Parameter::Arsenic, reading.arsenic),
    ] {
        out.push_str(&format!(
            " - {}: {}\n",
            parameter.label(),
            format_value(value, parameter.unit())
        ));
    }

    out.push_str("\nDetails:\n");
    for (parameter, assessment) in evaluation.assessments.iter() {
        out.push_str(&format!(
            " - {}: {} (score {}) {}\n",
            parameter.label(),
            assessment.status,
            assessment.score,
            assessment.message
        ));
    }

    out.push_str(&format!(
        "\nQuality index (0-100): {}\n",
        format_index(evaluation.index)
    ));
    out.push_str(&format!("Final result: {}\n", evaluation.decision.label()));
    out.push_str(&format!("{}\n", evaluation.decision_text));
    out
}

/// Write `contents` to the report file inside `dir`, creating the directory
/// if needed. Returns the written path.
pub fn write(dir: &Path, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create report directory {}", dir.display()))?;
    let path = dir.join(REPORT_FILE_NAME);
    fs::write(&path, contents)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
