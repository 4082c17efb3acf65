//! Command trait and context definitions.

use std::io::Write;

use crate::config::Config;
use crate::error::{CalcError, CalcResult, parse_int};
use crate::operation::OperationRegistry;
use crate::user::commands::history::CommandHistory;
use crate::user::source::CommandSource;

/// Parsed command arguments.
pub struct Args<'a> {
    args: Vec<&'a str>,
}

impl<'a> Args<'a> {
    /// Create Args from a slice of string references.
    pub fn new(args: Vec<&'a str>) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Fail unless exactly `expected` arguments were given.
    pub fn expect_count(&self, expected: usize) -> CalcResult<()> {
        if self.len() > expected {
            return Err(CalcError::ArgumentCount("too many arguments for the action".into()));
        }
        if self.len() < expected {
            return Err(CalcError::ArgumentCount(format!(
                "missing argument: expected {expected}, got {}",
                self.len()
            )));
        }
        Ok(())
    }

    /// Parse argument `index` as a strict integer.
    pub fn int(&self, index: usize, what: &str) -> CalcResult<i32> {
        let token = self
            .get(index)
            .ok_or_else(|| CalcError::ArgumentCount(format!("missing argument: {what}")))?;
        parse_int(token, what)
    }
}

/// One command line split into its name and arguments.
pub struct CommandLine<'a> {
    /// The original line, trimmed.
    pub raw: &'a str,
    /// The command name that was invoked.
    pub command: &'a str,
    /// Parsed arguments (excluding command name).
    pub args: Args<'a>,
    /// Raw argument string (everything after command name).
    pub args_raw: &'a str,
}

impl<'a> CommandLine<'a> {
    /// Split a line. Blank lines yield `None`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (command, args_raw) = match line.find(char::is_whitespace) {
            Some(pos) => (&line[..pos], line[pos..].trim_start()),
            None => (line, ""),
        };

        Some(Self {
            raw: line,
            command,
            args: Args::new(args_raw.split_whitespace().collect()),
            args_raw,
        })
    }
}

/// State shared by every command of one interpreter.
pub struct Session {
    pub registry: OperationRegistry,
    pub history: CommandHistory,
    pub config: Config,
}

/// What the interpreter should do after a command.
pub enum Flow {
    /// Read the next command from the current source.
    Continue,
    /// Stop the current source.
    Exit,
    /// Push a new source and read from it until it is drained.
    Source(CommandSource),
}

/// Command execution context.
pub struct CommandContext<'a> {
    pub line: &'a CommandLine<'a>,
    pub session: &'a mut Session,
    /// Source the command came from. Follow-up input (matrices,
    /// confirmations) is read from here too.
    pub input: &'a mut CommandSource,
    pub out: &'a mut dyn Write,
    /// Number of sources currently open, the interactive one included.
    pub depth: usize,
}

impl<'a> CommandContext<'a> {
    /// Arguments of the line being executed. Borrowed from the line, not
    /// from the context, so they stay usable while the session is mutated.
    pub fn args(&self) -> &'a Args<'a> {
        &self.line.args
    }

    /// Parse argument `index` as an operation index valid in the registry.
    pub fn operation_index(&self, index: usize) -> CalcResult<usize> {
        let value = self.args().int(index, "operation index")?;
        self.session.registry.check_index(i64::from(value))
    }
}

/// Trait for implementing commands.
///
/// Commands are registered statically and looked up by name or alias.
pub trait Command: Sync {
    /// Primary command name.
    fn name(&self) -> &'static str;

    /// Alternative names for this command.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Short description (shown in help list).
    fn description(&self) -> &'static str;

    /// Detailed usage information (shown in `help <command>`).
    fn usage(&self) -> &'static str {
        self.description()
    }

    /// Command category for grouping in help.
    fn category(&self) -> &'static str {
        "general"
    }

    /// Execute the command with the given context.
    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_command_and_args() {
        let line = CommandLine::parse("  add   0\t1 ").unwrap();
        assert_eq!(line.command, "add");
        assert_eq!(line.args.len(), 2);
        assert_eq!(line.args.get(1), Some("1"));
        assert_eq!(line.args_raw, "0\t1");
        assert_eq!(line.raw, "add   0\t1");
        assert!(CommandLine::parse("   ").is_none());
    }

    #[test]
    fn test_expect_count() {
        let line = CommandLine::parse("del 1 2").unwrap();
        assert!(matches!(line.args.expect_count(1), Err(CalcError::ArgumentCount(_))));
        assert!(matches!(line.args.expect_count(3), Err(CalcError::ArgumentCount(_))));
        assert!(line.args.expect_count(2).is_ok());
    }

    #[test]
    fn test_int_argument() {
        let line = CommandLine::parse("scal -3 x").unwrap();
        assert_eq!(line.args.int(0, "scalar").unwrap(), -3);
        assert!(matches!(line.args.int(1, "scalar"), Err(CalcError::InvalidFormat(_))));
        assert!(matches!(line.args.int(2, "scalar"), Err(CalcError::ArgumentCount(_))));
    }
}
