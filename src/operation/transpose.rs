//! Transpose operation.

use super::{Operation, expect_inputs, operand};
use crate::error::CalcResult;
use crate::matrix::SquareMatrix;

/// Mirrors its input across the main diagonal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Transpose;

impl Operation for Transpose {
    fn kind(&self) -> &'static str {
        "transpose"
    }

    fn input_count(&self) -> usize {
        1
    }

    fn compute(&self, inputs: &[SquareMatrix]) -> CalcResult<SquareMatrix> {
        expect_inputs(inputs, 1)?;
        Ok(inputs[0].transpose())
    }

    fn expression(&self, input: &str) -> String {
        format!("{}^T", operand(input))
    }
}
