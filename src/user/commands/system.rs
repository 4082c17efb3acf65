//! System commands - leaving the current command source.

use crate::error::CalcResult;
use crate::user::{Command, CommandContext, Flow};

/// Exit command instance.
pub static EXIT: ExitCommand = ExitCommand;

/// Exit command implementation.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["quit"]
    }

    fn description(&self) -> &'static str {
        " - exit the program"
    }

    fn usage(&self) -> &'static str {
        "Usage: exit\n\
         Aliases: quit\n\
         \n\
         Typed interactively, ends the program.\n\
         Inside a file being read, stops reading that file only."
    }

    fn category(&self) -> &'static str {
        "system"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        ctx.args().expect_count(0)?;
        Ok(Flow::Exit)
    }
}
