//! The sample prompt: `/` commands plus bare readings.
//!
//! Each line is either a built-in command (looked up by name or alias in
//! [`BUILTINS`]) or a reading in the format accepted by
//! [`form::parse_reading`]. [`dispatch`] turns the line into a
//! [`CommandResult`] and reports parse failures and unknown commands as
//! errors for the prompt to print.

mod help;
mod last;
mod report;
mod session;
mod thresholds;

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::path::Path;

use crate::engine::{AssessmentEngine, Evaluation, Reading};
use crate::form;

/// Session state available to commands during execution.
pub struct SessionInfo<'a> {
    pub engine: &'a AssessmentEngine,
    /// Most recent evaluation, if any.
    pub last: Option<&'a Evaluation>,
    pub report_dir: &'a Path,
    /// Sample label written into reports.
    pub label: Option<&'a str>,
}

/// What the prompt should do with one input line.
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// A validated reading to evaluate.
    Sample(Reading),
    /// Command done, prompt again.
    Handled,
    /// Forget the last evaluation.
    Reset,
    /// Leave the prompt.
    Quit,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/report"`.
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    async fn execute(&self, info: &SessionInfo<'_>) -> Result<CommandResult>;
}

/// Every command the prompt knows, in `/help` order.
pub static BUILTINS: &[&dyn Command] = &[
    &help::HelpCommand,
    &thresholds::ThresholdsCommand,
    &last::LastCommand,
    &report::ReportCommand,
    &session::NewCommand,
    &session::QuitCommand,
];

/// Look up a command by name or alias.
pub fn find(trigger: &str) -> Option<&'static dyn Command> {
    BUILTINS
        .iter()
        .copied()
        .find(|c| c.name() == trigger || c.aliases().contains(&trigger))
}

/// Run the command named by `input`, or parse it as a reading.
pub async fn dispatch(input: &str, info: &SessionInfo<'_>) -> Result<CommandResult> {
    let input = input.trim();
    if let Some(command) = find(input) {
        tracing::debug!(command = command.name(), "running command");
        return command.execute(info).await;
    }
    if input.starts_with('/') {
        bail!("unknown command: {input} (type /help for available commands)");
    }
    form::parse_reading(input).map(CommandResult::Sample)
}

/// Help listing for all built-ins, aliases in parentheses.
pub fn help_text() -> String {
    let entries: Vec<(String, &str)> = BUILTINS
        .iter()
        .map(|c| {
            let label = match c.aliases() {
                [] => c.name().to_string(),
                aliases => format!("{} ({})", c.name(), aliases.join(", ")),
            };
            (label, c.description())
        })
        .collect();
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, description) in &entries {
        out.push_str(&format!("  {label:<width$}  {description}\n"));
    }
    out.push_str("\n  anything else is read as a sample: <pH> <turbidity NTU> <arsenic µg/L>\n");
    out
}
