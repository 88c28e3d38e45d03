//! Commands that change the prompt's own state rather than a sample.

use anyhow::Result;
use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Drops the last evaluation so `/last` and `/report` start empty.
pub struct NewCommand;

#[async_trait]
impl Command for NewCommand {
    fn name(&self) -> &str {
        "/new"
    }

    fn aliases(&self) -> &[&str] {
        &["/clear"]
    }

    fn description(&self) -> &str {
        "discard the last evaluation and start a new sample"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> Result<CommandResult> {
        if info.last.is_some() {
            println!("  last evaluation discarded, ready for a new sample");
        } else {
            println!("  ready for a new sample");
        }
        Ok(CommandResult::Reset)
    }
}

/// Ends the session. The bare words work too since people type them.
pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["/q", "/exit", "quit", "exit"]
    }

    fn description(&self) -> &str {
        "end the session and print the sample count"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> Result<CommandResult> {
        Ok(CommandResult::Quit)
    }
}
