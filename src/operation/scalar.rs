//! Scalar multiplication.

use super::{Operation, expect_inputs, operand};
use crate::error::CalcResult;
use crate::matrix::SquareMatrix;

/// Multiplies its input by a fixed integer.
#[derive(Debug, Clone, Copy)]
pub struct Scalar {
    factor: i32,
}

impl Scalar {
    pub fn new(factor: i32) -> Self {
        Self { factor }
    }
}

impl Operation for Scalar {
    fn kind(&self) -> &'static str {
        "scalar"
    }

    fn input_count(&self) -> usize {
        1
    }

    fn compute(&self, inputs: &[SquareMatrix]) -> CalcResult<SquareMatrix> {
        expect_inputs(inputs, 1)?;
        inputs[0].scaled(self.factor)
    }

    fn expression(&self, input: &str) -> String {
        format!("{} * {}", operand(input), self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_scalar_multiplies_each_element() {
        let a = SquareMatrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let result = Scalar::new(3).compute(&[a.clone()]).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(result[(i, j)], a[(i, j)] * 3);
            }
        }
    }

    #[test]
    fn test_scalar_out_of_range() {
        let a = SquareMatrix::new(2, -600);
        assert!(matches!(Scalar::new(2).compute(&[a]), Err(CalcError::Range(_))));
    }

    #[test]
    fn test_expression() {
        assert_eq!(Scalar::new(-4).expression("A"), "A * -4");
        assert_eq!(Scalar::new(2).expression("(A + A^T)"), "(A + A^T) * 2");
    }
}
