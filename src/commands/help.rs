use anyhow::Result;
use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, help_text};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "list commands and the reading format"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> Result<CommandResult> {
        print!("{}", help_text());
        Ok(CommandResult::Handled)
    }
}
