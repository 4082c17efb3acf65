//! Matrix operations - the function objects kept in the registry.
//!
//! # Architecture
//!
//! - `identity.rs`, `transpose.rs`, `scalar.rs` - single-input operations
//! - `binary.rs` - `Add`, `Sub` and `Comp`, built from two earlier operations
//! - `registry.rs` - the ordered [`OperationRegistry`]
//!
//! Composite operations hold their operands as [`OperationRef`]s, so an
//! operand stays alive for as long as any composite uses it, even after it
//! has been deleted from the registry.

use std::io::{self, Write};
use std::rc::Rc;

use crate::error::{CalcError, CalcResult};
use crate::matrix::SquareMatrix;

pub mod binary;
pub mod identity;
pub mod registry;
pub mod scalar;
pub mod transpose;

pub use binary::{Add, Comp, Sub};
pub use identity::Identity;
pub use registry::OperationRegistry;
pub use scalar::Scalar;
pub use transpose::Transpose;

/// Shared handle to a registered operation.
pub type OperationRef = Rc<dyn Operation>;

/// Name used for the input matrix when describing an operation.
pub const INPUT_NAME: &str = "A";

/// A function from `input_count()` equally sized matrices to one matrix.
pub trait Operation {
    /// Short kind label shown in listings.
    fn kind(&self) -> &'static str;

    /// Number of matrices the caller must supply to [`Operation::compute`].
    fn input_count(&self) -> usize;

    /// Apply the operation. `inputs` must hold exactly `input_count()` matrices.
    fn compute(&self, inputs: &[SquareMatrix]) -> CalcResult<SquareMatrix>;

    /// The operation written as an expression over `input`.
    fn expression(&self, input: &str) -> String;

    /// Operations this one is built from.
    fn operands(&self) -> Vec<&OperationRef> {
        Vec::new()
    }

    /// Write a description: `kind: expression` when verbose, else the
    /// expression alone.
    fn print(&self, w: &mut dyn Write, verbose: bool) -> io::Result<()> {
        if verbose {
            write!(w, "{}: {}", self.kind(), self.expression(INPUT_NAME))
        } else {
            write!(w, "{}", self.expression(INPUT_NAME))
        }
    }
}

/// Check that exactly `expected` matrices were supplied, all the same size.
pub(crate) fn expect_inputs(inputs: &[SquareMatrix], expected: usize) -> CalcResult<()> {
    if inputs.len() != expected {
        return Err(CalcError::ArgumentCount(format!(
            "operation expects {expected} matrices, got {}",
            inputs.len()
        )));
    }
    if let Some(first) = inputs.first() {
        if inputs.iter().any(|m| m.size() != first.size()) {
            return Err(CalcError::Range("all input matrices must have the same size".into()));
        }
    }
    Ok(())
}

/// Wrap compound expressions in parentheses before applying a postfix operator.
pub(crate) fn operand(expr: &str) -> String {
    if expr.contains(' ') && !(expr.starts_with('(') && expr.ends_with(')') && balanced_outer(expr)) {
        format!("({expr})")
    } else {
        expr.to_string()
    }
}

/// Whether the outermost parentheses of `expr` enclose the whole string.
fn balanced_outer(expr: &str) -> bool {
    let mut depth = 0usize;
    for (i, c) in expr.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i != expr.len() - 1 {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}
