use anyhow::Result;
use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::banner::print_evaluation;

pub struct LastCommand;

#[async_trait]
impl Command for LastCommand {
    fn name(&self) -> &str {
        "/last"
    }

    fn description(&self) -> &str {
        "show the last evaluation again"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> Result<CommandResult> {
        match info.last {
            Some(evaluation) => print_evaluation(evaluation),
            None => println!("  no sample evaluated yet"),
        }
        Ok(CommandResult::Handled)
    }
}
