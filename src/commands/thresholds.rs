use anyhow::Result;
use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::banner::thresholds_text;

pub struct ThresholdsCommand;

#[async_trait]
impl Command for ThresholdsCommand {
    fn name(&self) -> &str {
        "/thresholds"
    }

    fn aliases(&self) -> &[&str] {
        &["/limits"]
    }

    fn description(&self) -> &str {
        "show reference thresholds and index weights"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> Result<CommandResult> {
        print!(
            "{}",
            thresholds_text(info.engine.thresholds(), info.engine.weights())
        );
        Ok(CommandResult::Handled)
    }
}
