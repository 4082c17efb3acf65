//! User command system - the interactive calculator front end.
//!
//! - `command.rs` - `Command`, the parsed `CommandLine` and the per-call context
//! - `registry.rs` - the command table and name/alias lookup
//! - `commands/` - eval, the operation builders, del, resize, read and the rest
//! - `source.rs` - Line sources (interactive stream, script files)
//! - `interpreter.rs` - The read/dispatch/report loop over a stack of sources
//!
//! Commands that create operations live together in `commands/define.rs`;
//! every other command has its own file. Follow-up input a command needs
//! (matrix rows for `eval`, the confirmation for a shrinking `resize`) is
//! read from the same source the command line came from.

pub mod command;
pub mod commands;
pub mod interpreter;
pub mod registry;
pub mod source;


pub use command::{Args, Command, CommandContext, CommandLine, Flow, Session};
pub use interpreter::{Interpreter, State};
pub use source::CommandSource;
