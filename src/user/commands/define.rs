//! Commands that register new operations.

use std::rc::Rc;

use crate::error::CalcResult;
use crate::operation::{Add, Comp, INPUT_NAME, Identity, OperationRef, Scalar, Sub, Transpose};
use crate::user::{Command, CommandContext, Flow};

/// Append `op` to the registry.
fn register(ctx: &mut CommandContext, op: OperationRef) -> CalcResult<Flow> {
    let index = ctx.session.registry.push(op)?;
    if let Ok(op) = ctx.session.registry.get(index) {
        log::info!("registered operation #{index}: {}", op.expression(INPUT_NAME));
    }
    Ok(Flow::Continue)
}

/// Resolve the two operand indices of a binary command.
fn operands(ctx: &CommandContext) -> CalcResult<(OperationRef, OperationRef)> {
    ctx.args().expect_count(2)?;
    let lhs = ctx.operation_index(0)?;
    let rhs = ctx.operation_index(1)?;
    let registry = &ctx.session.registry;
    Ok((registry.get(lhs)?.clone(), registry.get(rhs)?.clone()))
}

pub static SCAL: ScalCommand = ScalCommand;

pub struct ScalCommand;

impl Command for ScalCommand {
    fn name(&self) -> &'static str {
        "scal"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["scalar"]
    }

    fn description(&self) -> &'static str {
        "(ar) val - creates an operation that multiplies the given matrix by scalar val"
    }

    fn usage(&self) -> &'static str {
        "Usage: scal <val>\n\
         \n\
         Registers A * val. Evaluating it fails if any resulting element\n\
         leaves the range -1024..1000."
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        ctx.args().expect_count(1)?;
        let factor = ctx.args().int(0, "scalar value")?;
        register(ctx, Rc::new(Scalar::new(factor)))
    }
}

pub static IDEN: IdenCommand = IdenCommand;

pub struct IdenCommand;

impl Command for IdenCommand {
    fn name(&self) -> &'static str {
        "iden"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["identity"]
    }

    fn description(&self) -> &'static str {
        "(tity) - creates another identity operation"
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        ctx.args().expect_count(0)?;
        register(ctx, Rc::new(Identity))
    }
}

pub static TRAN: TranCommand = TranCommand;

pub struct TranCommand;

impl Command for TranCommand {
    fn name(&self) -> &'static str {
        "tran"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["transpose"]
    }

    fn description(&self) -> &'static str {
        "(spose) - creates another transpose operation"
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        ctx.args().expect_count(0)?;
        register(ctx, Rc::new(Transpose))
    }
}

pub static ADD: AddCommand = AddCommand;

pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        " num1 num2 - creates an operation that is the addition of the result of \
         operation #num1 and the result of operation #num2"
    }

    fn usage(&self) -> &'static str {
        "Usage: add <num1> <num2>\n\
         \n\
         Both operations are applied to the same input matrix and the results\n\
         are added. Evaluation fails if an element exceeds 1000."
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        let (lhs, rhs) = operands(ctx)?;
        register(ctx, Rc::new(Add::new(lhs, rhs)?))
    }
}

pub static SUB: SubCommand = SubCommand;

pub struct SubCommand;

impl Command for SubCommand {
    fn name(&self) -> &'static str {
        "sub"
    }

    fn description(&self) -> &'static str {
        " num1 num2 - creates an operation that is the subtraction of the result of \
         operation #num1 and the result of operation #num2"
    }

    fn usage(&self) -> &'static str {
        "Usage: sub <num1> <num2>\n\
         \n\
         Both operations are applied to the same input matrix and the second\n\
         result is subtracted from the first. Evaluation fails if an element\n\
         drops below -1024."
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        let (lhs, rhs) = operands(ctx)?;
        register(ctx, Rc::new(Sub::new(lhs, rhs)?))
    }
}

pub static COMP: CompCommand = CompCommand;

pub struct CompCommand;

impl Command for CompCommand {
    fn name(&self) -> &'static str {
        "comp"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["composite"]
    }

    fn description(&self) -> &'static str {
        "(osite) num1 num2 - creates an operation that is the composition of \
         operation #num1 and operation #num2"
    }

    fn usage(&self) -> &'static str {
        "Usage: comp <num1> <num2>\n\
         \n\
         Registers num1(num2(A)): operation #num2 is applied first and its\n\
         result is fed to operation #num1."
    }

    fn category(&self) -> &'static str {
        "operations"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        let (outer, inner) = operands(ctx)?;
        register(ctx, Rc::new(Comp::new(outer, inner)?))
    }
}
