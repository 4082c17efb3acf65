//! Command interpreter - reads lines, dispatches them to the command system
//! and reports the outcome.
//!
//! The interpreter owns a stack of [`CommandSource`]s. Commands are always
//! read from the top of the stack; `read` pushes a script, and a script is
//! popped again when it is drained or runs `exit`. Once the interactive
//! source at the bottom is gone the interpreter terminates.
//!
//! An error raised by a command is reported and the loop continues; only I/O
//! failures on the interactive stream end [`Interpreter::run`] early.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{CalcError, CalcResult, parse_int};
use crate::operation::OperationRegistry;
use crate::operation::registry::validate_capacity;
use crate::user::commands::history::CommandHistory;
use crate::user::registry::find_command;
use crate::user::{CommandContext, CommandLine, CommandSource, Flow, Session};

/// Prompt shown before every interactive command.
pub const PROMPT: &str = "Enter command ('help' for the list of available commands): ";
/// Prompt shown while waiting for the registry capacity.
pub const CAPACITY_PROMPT: &str = "Enter the maximum number of operations (2-100): ";

/// Interpreter lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Bounded mode without a configured capacity: the first input must be one.
    AwaitingCapacity,
    Ready,
    Terminated,
}

pub struct Interpreter<W: Write> {
    session: Session,
    sources: Vec<CommandSource>,
    out: W,
    state: State,
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter reading interactively from `input`.
    pub fn new(config: Config, input: Box<dyn BufRead>, out: W) -> CalcResult<Self> {
        let registry = match config.capacity {
            Some(capacity) => OperationRegistry::with_capacity(capacity)?,
            None => OperationRegistry::new(),
        };
        let state = if config.capacity.is_none() && config.bounded {
            State::AwaitingCapacity
        } else {
            State::Ready
        };
        let session = Session {
            registry,
            history: CommandHistory::new(config.history_size),
            config,
        };

        Ok(Self {
            session,
            sources: vec![CommandSource::interactive(input)],
            out,
            state,
        })
    }

    /// Push a script on top of the current source. The most recently pushed
    /// script runs first.
    pub fn push_script(&mut self, path: &Path) -> CalcResult<()> {
        let source = CommandSource::open(path)?;
        log::debug!("queued script {}", path.display());
        self.sources.push(source);
        Ok(())
    }

    /// Process commands until the interactive source ends or `exit` is typed.
    pub fn run(&mut self) -> CalcResult<()> {
        while self.state != State::Terminated {
            self.step()?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Process at most one line of input.
    pub fn step(&mut self) -> CalcResult<()> {
        match self.state {
            State::AwaitingCapacity => self.read_capacity(),
            State::Ready => self.read_command(),
            State::Terminated => Ok(()),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.session.registry
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// The capacity always comes from the interactive source at the bottom of
    /// the stack; scripts queued above it wait until it has been given.
    fn read_capacity(&mut self) -> CalcResult<()> {
        write!(self.out, "{CAPACITY_PROMPT}")?;
        self.out.flush()?;
        let Some(stdin) = self.sources.first_mut() else {
            self.state = State::Terminated;
            return Ok(());
        };
        let Some(line) = stdin.next_line()? else {
            self.state = State::Terminated;
            return Ok(());
        };
        if line.trim().is_empty() {
            return Ok(());
        }

        match parse_capacity(&line).and_then(|c| self.session.registry.set_capacity(c).map(|_| c)) {
            Ok(capacity) => {
                log::info!("registry capacity set to {capacity}");
                self.state = State::Ready;
            }
            Err(err) => self.report(line.trim(), &err, true)?,
        }
        Ok(())
    }

    fn read_command(&mut self) -> CalcResult<()> {
        let interactive = self.current_is_interactive();
        if interactive {
            self.print_operations()?;
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
        }
        let Some(line) = self.next_line()? else {
            return Ok(());
        };
        let Some(parsed) = CommandLine::parse(&line) else {
            return Ok(());
        };

        if interactive {
            self.session.history.push(parsed.raw);
        }
        log::debug!("dispatching '{}'", parsed.raw);

        match self.dispatch(&parsed) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                if self.sources.len() == 1 {
                    writeln!(self.out, "Goodbye!")?;
                }
                self.pop_source();
            }
            Ok(Flow::Source(source)) => {
                log::debug!("entering {}", source.name());
                self.sources.push(source);
            }
            Err(CalcError::Io(err)) if interactive => return Err(CalcError::Io(err)),
            Err(err) => self.report(parsed.raw, &err, interactive)?,
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &CommandLine) -> CalcResult<Flow> {
        let cmd = find_command(line.command)
            .ok_or_else(|| CalcError::UnknownCommand(line.command.to_string()))?;
        let depth = self.sources.len();
        let Some(input) = self.sources.last_mut() else {
            return Ok(Flow::Exit);
        };

        let mut ctx = CommandContext {
            line,
            session: &mut self.session,
            input,
            out: &mut self.out,
            depth,
        };
        cmd.execute(&mut ctx)
    }

    /// Next line of the current source. Drained sources are popped and yield
    /// `None`, as does a script that fails to read.
    fn next_line(&mut self) -> CalcResult<Option<String>> {
        let Some(source) = self.sources.last_mut() else {
            self.state = State::Terminated;
            return Ok(None);
        };
        let interactive = source.is_interactive();
        let name = source.name().to_string();

        match source.next_line() {
            Ok(Some(line)) => Ok(Some(line)),
            Ok(None) => {
                self.pop_source();
                Ok(None)
            }
            Err(err) if !interactive => {
                writeln!(self.out, "Error in file: {name}: {err}")?;
                self.pop_source();
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn pop_source(&mut self) {
        if let Some(source) = self.sources.pop() {
            log::debug!("leaving {} after {} lines", source.name(), source.line_no());
        }
        if self.sources.is_empty() {
            self.state = State::Terminated;
        }
    }

    fn current_is_interactive(&self) -> bool {
        self.sources.last().is_some_and(CommandSource::is_interactive)
    }

    fn report(&mut self, line: &str, err: &CalcError, interactive: bool) -> CalcResult<()> {
        log::debug!("command '{line}' failed: {err:?}");
        match err {
            CalcError::File { .. } => writeln!(self.out, "Error in file: {err}")?,
            _ if !interactive => writeln!(self.out, "Error in line: {line}\nReason: {err}")?,
            _ => writeln!(self.out, "Error: {err}")?,
        }
        Ok(())
    }

    fn print_operations(&mut self) -> CalcResult<()> {
        let registry = &self.session.registry;
        writeln!(self.out)?;
        writeln!(self.out, "List of available matrix operations:")?;
        for (index, op) in registry.iter() {
            write!(self.out, "{index}. ")?;
            op.print(&mut self.out, true)?;
            writeln!(self.out)?;
        }
        if let Some(capacity) = registry.capacity() {
            writeln!(self.out, "({}/{capacity} operations)", registry.len())?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Parse a line holding nothing but a capacity.
fn parse_capacity(line: &str) -> CalcResult<usize> {
    let mut tokens = line.split_whitespace();
    let token = tokens
        .next()
        .ok_or_else(|| CalcError::ArgumentCount("missing argument: capacity".into()))?;
    if tokens.next().is_some() {
        return Err(CalcError::ArgumentCount("too many arguments for the action".into()));
    }
    // negative values fail the range check as 0
    let capacity = usize::try_from(parse_int(token, "capacity")?).unwrap_or(0);
    validate_capacity(capacity)?;
    Ok(capacity)
}
