//! Del command - remove an operation from the registry.

use crate::error::CalcResult;
use crate::operation::INPUT_NAME;
use crate::user::{Command, CommandContext, Flow};

/// Del command instance.
pub static DEL: DelCommand = DelCommand;

/// Del command implementation.
pub struct DelCommand;

impl Command for DelCommand {
    fn name(&self) -> &'static str {
        "del"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["delete"]
    }

    fn description(&self) -> &'static str {
        "(ete) num - delete operation #num from the operation list"
    }

    fn usage(&self) -> &'static str {
        "Usage: del <num>\n\
         \n\
         Operations after #num move down by one index. Operations built\n\
         from #num keep working: they hold their own reference to it."
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        ctx.args().expect_count(1)?;
        let index = ctx.operation_index(0)?;
        let registry = &mut ctx.session.registry;
        if registry.is_referenced(index) {
            log::warn!("operation #{index} is still used by a later operation");
        }
        let removed = registry.remove(index)?;
        log::info!("deleted operation #{index}: {}", removed.expression(INPUT_NAME));
        Ok(Flow::Continue)
    }
}
