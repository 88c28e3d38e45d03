//! The non-interactive `assess` command.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::banner::evaluation_text;
use crate::engine::{AssessmentEngine, Evaluation, Reading};
use crate::{form, report};

/// How one sample is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessOptions<'a> {
    /// Print the evaluation as JSON instead of text.
    pub json: bool,
    /// Write the text report into this directory.
    pub report_dir: Option<&'a Path>,
    /// Sample label written into the report.
    pub label: Option<&'a str>,
}

/// What a one-shot assessment produced.
#[derive(Debug)]
pub struct AssessOutcome {
    pub evaluation: Evaluation,
    /// Path of the written report, if one was requested.
    pub report_path: Option<PathBuf>,
}

/// Validate `reading`, evaluate it, print the result to `out`, and write the
/// report if asked. Invalid input fails before anything is printed or written.
pub fn run_assess(
    engine: &AssessmentEngine,
    reading: Reading,
    options: &AssessOptions<'_>,
    out: &mut dyn Write,
) -> Result<AssessOutcome> {
    form::validate(&reading)?;
    let evaluation = engine.evaluate(reading);

    if options.json {
        let json = serde_json::to_string_pretty(&evaluation)
            .context("failed to serialize evaluation")?;
        writeln!(out, "{json}")?;
    } else {
        write!(out, "{}", evaluation_text(&evaluation))?;
    }

    let report_path = match options.report_dir {
        Some(dir) => {
            let contents = report::render(&evaluation, Local::now(), options.label);
            Some(report::write(dir, &contents)?)
        }
        None => None,
    };

    Ok(AssessOutcome {
        evaluation,
        report_path,
    })
}
