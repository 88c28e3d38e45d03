use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::Local;

use super::{Command, CommandResult, SessionInfo};
use crate::report;

pub struct ReportCommand;

#[async_trait]
impl Command for ReportCommand {
    fn name(&self) -> &str {
        "/report"
    }

    fn aliases(&self) -> &[&str] {
        &["/save"]
    }

    fn description(&self) -> &str {
        "write the last evaluation to a text report"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> Result<CommandResult> {
        let Some(evaluation) = info.last else {
            bail!("no sample evaluated yet, enter a reading first");
        };

        let contents = report::render(evaluation, Local::now(), info.label);
        let path = report::write(info.report_dir, &contents)?;
        println!("  ✓ report saved to {}", path.display());
        Ok(CommandResult::Handled)
    }
}
