//! Resize command - change the registry's capacity bound.

use std::io::Write;

use crate::error::{CalcError, CalcResult};
use crate::operation::registry::validate_capacity;
use crate::user::{Command, CommandContext, Flow};

/// Resize command instance.
pub static RESIZE: ResizeCommand = ResizeCommand;

/// Resize command implementation.
pub struct ResizeCommand;

impl Command for ResizeCommand {
    fn name(&self) -> &'static str {
        "resize"
    }

    fn description(&self) -> &'static str {
        " n - change the maximum number of operations to n (2-100)"
    }

    fn usage(&self) -> &'static str {
        "Usage: resize <n>\n\
         \n\
         Raising the bound never changes the operation list. Lowering it below\n\
         the current number of operations asks for confirmation and then\n\
         deletes the operations from #n onwards."
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        ctx.args().expect_count(1)?;
        let requested = ctx.args().int(0, "capacity")?;
        // negative values fail the range check as 0
        let capacity = usize::try_from(requested).unwrap_or(0);

        validate_capacity(capacity)?;

        let len = ctx.session.registry.len();
        if capacity < len {
            write!(
                ctx.out,
                "Shrinking to {capacity} deletes operations #{capacity}-#{}. Continue? (y/n): ",
                len - 1
            )?;
            ctx.out.flush()?;
            let answer = ctx
                .input
                .next_line()?
                .ok_or_else(|| CalcError::EndOfInput("expected an answer (y/n)".into()))?;

            if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                writeln!(ctx.out, "Resize cancelled.")?;
                return Ok(Flow::Continue);
            }
            ctx.session.registry.truncate(capacity);
            log::info!("registry truncated to {capacity} operations");
        }

        ctx.session.registry.set_capacity(capacity)?;
        log::info!("registry capacity set to {capacity}");
        writeln!(ctx.out, "Maximum number of operations set to {capacity}.")?;
        Ok(Flow::Continue)
    }
}
