//! Eval command - apply a registered operation to matrices read from input.

use std::io::Write;

use crate::error::{CalcError, CalcResult};
use crate::matrix::{SquareMatrix, parse_element};
use crate::operation::INPUT_NAME;
use crate::user::source::CommandSource;
use crate::user::{Command, CommandContext, Flow};

/// Eval command instance.
pub static EVAL: EvalCommand = EvalCommand;

/// Eval command implementation.
pub struct EvalCommand;

impl Command for EvalCommand {
    fn name(&self) -> &'static str {
        "eval"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["evaluate"]
    }

    fn description(&self) -> &'static str {
        "(uate) num n - compute the result of function #num on an n×n matrix \
         (that will be prompted)"
    }

    fn usage(&self) -> &'static str {
        "Usage: eval <num> <n>\n\
         \n\
         Prompts for the matrices operation #num needs, each n×n (1 <= n <= 5),\n\
         given as n*n integers in row-major order. Rows may be split across\n\
         lines. Every element must lie between -1024 and 1000."
    }

    fn category(&self) -> &'static str {
        "evaluation"
    }

    fn execute(&self, ctx: &mut CommandContext) -> CalcResult<Flow> {
        ctx.args().expect_count(2)?;
        let index = ctx.operation_index(0)?;
        let size = ctx.args().int(1, "matrix size")?;
        let max = ctx.session.config.max_matrix_size;
        if size < 1 || size as usize > max {
            return Err(CalcError::Range(format!(
                "Invalid input: please enter size between 1 - {max}"
            )));
        }
        let size = size as usize;

        let operation = ctx.session.registry.get(index)?.clone();
        let count = operation.input_count();
        // prompts are for the interactive source only
        let prompt = ctx.input.is_interactive();
        if prompt && count > 1 {
            write!(ctx.out, "\nPlease enter {count} matrices:\n")?;
        }

        let mut inputs = Vec::with_capacity(count);
        for _ in 0..count {
            if prompt {
                write!(ctx.out, "\nEnter a {size}x{size} matrix:\n")?;
                ctx.out.flush()?;
            }
            inputs.push(read_matrix(ctx.input, size)?);
        }

        let result = operation.compute(&inputs)?;
        log::debug!("evaluated operation #{index} on {count} {size}x{size} matrices");

        writeln!(ctx.out)?;
        for (i, input) in inputs.iter().enumerate() {
            if count == 1 {
                write!(ctx.out, "{INPUT_NAME} = \n{input}")?;
            } else {
                write!(ctx.out, "{INPUT_NAME}{} = \n{input}", i + 1)?;
            }
        }
        write!(ctx.out, "{} = \n{result}", operation.expression(INPUT_NAME))?;
        Ok(Flow::Continue)
    }
}

/// Read `size * size` integers from `source`, continuing onto further lines
/// until enough have been given.
///
/// Each line is checked as soon as it is read: a bad element, or extra items
/// on the last line, fails without consuming any further line.
pub fn read_matrix(source: &mut CommandSource, size: usize) -> CalcResult<SquareMatrix> {
    let needed = size * size;
    let mut rows: Vec<Vec<i32>> = vec![Vec::with_capacity(size); size];
    let mut count = 0;
    while count < needed {
        let Some(line) = source.next_line()? else {
            return Err(CalcError::EndOfInput(format!(
                "expected {needed} items for the matrix, got {count}"
            )));
        };
        for token in line.split_whitespace() {
            if count == needed {
                return Err(CalcError::ArgumentCount("too many items for the matrix".into()));
            }
            rows[count / size].push(parse_element(token)?);
            count += 1;
        }
    }
    SquareMatrix::from_rows(&rows)
}
