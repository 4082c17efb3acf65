//! Command history management and history command.

use std::collections::VecDeque;
use std::io::Write;

use crate::error::CalcResult;
use crate::user::{Command, CommandContext, Flow};

/// Command history buffer.
pub struct CommandHistory {
    /// Stored commands (newest at back).
    entries: VecDeque<String>,
    limit: usize,
}

impl CommandHistory {
    /// Create an empty history keeping at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Add a command to history.
    pub fn push(&mut self, cmd: &str) {
        // Don't add empty commands or duplicates of the last command
        if cmd.is_empty() || self.entries.back().is_some_and(|last| last == cmd) {
            return;
        }

        self.entries.push_back(cmd.to_string());

        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get all history entries (oldest first).
    pub fn entries(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// History command instance.
pub static HISTORY_CMD: HistoryCommand = HistoryCommand;

/// History command implementation.
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        " [clear] - show (or clear) the commands entered so far"
    }

    fn usage(&self) -> &'static str {
        "Usage: history [clear]\n\
         \n\
         Without arguments: shows all command history.\n\
         With 'clear': clears the history.\n\
         Only commands typed interactively are recorded."
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        let args = ctx.args();
        let history = &mut ctx.session.history;
        match args.get(0) {
            Some("clear") => {
                args.expect_count(1)?;
                history.clear();
                writeln!(ctx.out, "History cleared.")?;
            }
            Some(other) => {
                return Err(crate::error::CalcError::ArgumentCount(format!(
                    "unknown argument '{other}', usage: history [clear]"
                )));
            }
            None if history.is_empty() => writeln!(ctx.out, "No command history.")?,
            None => {
                writeln!(ctx.out, "Command history:")?;
                for (i, cmd) in history.entries().enumerate() {
                    writeln!(ctx.out, "  {:3}  {}", i + 1, cmd)?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}
