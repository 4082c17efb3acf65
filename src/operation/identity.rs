//! Identity operation.

use super::{Operation, expect_inputs};
use crate::error::CalcResult;
use crate::matrix::SquareMatrix;

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Operation for Identity {
    fn kind(&self) -> &'static str {
        "identity"
    }

    fn input_count(&self) -> usize {
        1
    }

    fn compute(&self, inputs: &[SquareMatrix]) -> CalcResult<SquareMatrix> {
        expect_inputs(inputs, 1)?;
        Ok(inputs[0].clone())
    }

    fn expression(&self, input: &str) -> String {
        input.to_string()
    }
}
