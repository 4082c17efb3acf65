//! Read command - run the commands stored in a file.

use std::path::Path;

use crate::error::{CalcError, CalcResult};
use crate::user::source::CommandSource;
use crate::user::{Command, CommandContext, Flow};

/// Read command instance.
pub static READ: ReadCommand = ReadCommand;

/// Read command implementation.
pub struct ReadCommand;

impl Command for ReadCommand {
    fn name(&self) -> &'static str {
        "read"
    }

    fn description(&self) -> &'static str {
        " path - execute the commands written in the file at path"
    }

    fn usage(&self) -> &'static str {
        "Usage: read <path>\n\
         \n\
         The file uses the same one-command-per-line format as the prompt;\n\
         matrices for 'eval' follow on the next lines. Errors are reported\n\
         per line and do not stop the file. 'exit' in the file stops reading\n\
         it and returns to the previous input."
    }

    fn category(&self) -> &'static str {
        "scripting"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        let path = ctx.line.args_raw.trim();
        if path.is_empty() {
            return Err(CalcError::ArgumentCount("missing argument: file path".into()));
        }
        let path = Path::new(path);

        // depth counts the interactive source, so this allows max_read_depth files
        if ctx.depth > ctx.session.config.max_read_depth {
            return Err(CalcError::File {
                path: path.to_path_buf(),
                reason: format!(
                    "too many nested 'read' commands (limit {})",
                    ctx.session.config.max_read_depth
                ),
            });
        }

        let source = CommandSource::open(path)?;
        log::debug!("reading commands from {}", path.display());
        Ok(Flow::Source(source))
    }
}
