//! Composite operations built from two registered operations.
//!
//! `Add` and `Sub` apply both operands to the *same* input matrices and
//! combine the two results. `Comp` feeds the result of its second operand
//! into its first, i.e. `Comp(a, b)(M) = a(b(M))`.

use core::slice;

use super::{Operation, OperationRef, expect_inputs};
use crate::error::{CalcError, CalcResult};
use crate::matrix::SquareMatrix;

fn same_arity(lhs: &OperationRef, rhs: &OperationRef) -> CalcResult<usize> {
    if lhs.input_count() != rhs.input_count() {
        return Err(CalcError::ArgumentCount(format!(
            "operands take {} and {} matrices",
            lhs.input_count(),
            rhs.input_count()
        )));
    }
    Ok(lhs.input_count())
}

/// `lhs(M) + rhs(M)`.
pub struct Add {
    lhs: OperationRef,
    rhs: OperationRef,
    inputs: usize,
}

impl Add {
    pub fn new(lhs: OperationRef, rhs: OperationRef) -> CalcResult<Self> {
        let inputs = same_arity(&lhs, &rhs)?;
        Ok(Self { lhs, rhs, inputs })
    }
}

impl Operation for Add {
    fn kind(&self) -> &'static str {
        "add"
    }

    fn input_count(&self) -> usize {
        self.inputs
    }

    fn compute(&self, inputs: &[SquareMatrix]) -> CalcResult<SquareMatrix> {
        expect_inputs(inputs, self.inputs)?;
        let lhs = self.lhs.compute(inputs)?;
        let rhs = self.rhs.compute(inputs)?;
        lhs.checked_add(&rhs)
    }

    fn expression(&self, input: &str) -> String {
        format!("({} + {})", self.lhs.expression(input), self.rhs.expression(input))
    }

    fn operands(&self) -> Vec<&OperationRef> {
        vec![&self.lhs, &self.rhs]
    }
}

/// `lhs(M) - rhs(M)`.
pub struct Sub {
    lhs: OperationRef,
    rhs: OperationRef,
    inputs: usize,
}

impl Sub {
    pub fn new(lhs: OperationRef, rhs: OperationRef) -> CalcResult<Self> {
        let inputs = same_arity(&lhs, &rhs)?;
        Ok(Self { lhs, rhs, inputs })
    }
}

impl Operation for Sub {
    fn kind(&self) -> &'static str {
        "sub"
    }

    fn input_count(&self) -> usize {
        self.inputs
    }

    fn compute(&self, inputs: &[SquareMatrix]) -> CalcResult<SquareMatrix> {
        expect_inputs(inputs, self.inputs)?;
        let lhs = self.lhs.compute(inputs)?;
        let rhs = self.rhs.compute(inputs)?;
        lhs.checked_sub(&rhs)
    }

    fn expression(&self, input: &str) -> String {
        format!("({} - {})", self.lhs.expression(input), self.rhs.expression(input))
    }

    fn operands(&self) -> Vec<&OperationRef> {
        vec![&self.lhs, &self.rhs]
    }
}

/// `outer(inner(M))`.
pub struct Comp {
    outer: OperationRef,
    inner: OperationRef,
}

impl Comp {
    /// The outer operation receives a single matrix, so it must be unary.
    pub fn new(outer: OperationRef, inner: OperationRef) -> CalcResult<Self> {
        if outer.input_count() != 1 {
            return Err(CalcError::ArgumentCount(format!(
                "cannot compose: outer operation takes {} matrices",
                outer.input_count()
            )));
        }
        Ok(Self { outer, inner })
    }
}

impl Operation for Comp {
    fn kind(&self) -> &'static str {
        "comp"
    }

    fn input_count(&self) -> usize {
        self.inner.input_count()
    }

    fn compute(&self, inputs: &[SquareMatrix]) -> CalcResult<SquareMatrix> {
        expect_inputs(inputs, self.input_count())?;
        let mid = self.inner.compute(inputs)?;
        self.outer.compute(slice::from_ref(&mid))
    }

    fn expression(&self, input: &str) -> String {
        self.outer.expression(&self.inner.expression(input))
    }

    fn operands(&self) -> Vec<&OperationRef> {
        vec![&self.outer, &self.inner]
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::operation::{Identity, Scalar, Transpose};

    fn sample() -> SquareMatrix {
        SquareMatrix::from_rows(&[[1, 2], [3, 4]]).unwrap()
    }

    fn rc<O: Operation + 'static>(op: O) -> OperationRef {
        Rc::new(op)
    }

    #[test]
    fn test_add_applies_both_operands_to_same_input() {
        let add = Add::new(rc(Identity), rc(Transpose)).unwrap();
        let expected = SquareMatrix::from_rows(&[[2, 5], [5, 8]]).unwrap();
        assert_eq!(add.compute(&[sample()]).unwrap(), expected);

        let m = sample();
        let by_parts = Identity
            .compute(&[m.clone()])
            .unwrap()
            .checked_add(&Transpose.compute(&[m.clone()]).unwrap())
            .unwrap();
        assert_eq!(add.compute(&[m]).unwrap(), by_parts);
    }

    #[test]
    fn test_add_range_error() {
        let add = Add::new(rc(Identity), rc(Identity)).unwrap();
        let big = SquareMatrix::new(2, 501);
        assert!(matches!(add.compute(&[big]), Err(CalcError::Range(_))));
    }

    #[test]
    fn test_sub() {
        let sub = Sub::new(rc(Identity), rc(Transpose)).unwrap();
        let expected = SquareMatrix::from_rows(&[[0, -1], [1, 0]]).unwrap();
        assert_eq!(sub.compute(&[sample()]).unwrap(), expected);

        let sub = Sub::new(rc(Scalar::new(-1)), rc(Identity)).unwrap();
        let low = SquareMatrix::new(1, 600);
        assert!(matches!(sub.compute(&[low]), Err(CalcError::Range(_))));
    }

    #[test]
    fn test_comp_applies_inner_first() {
        let scale = rc(Scalar::new(2));
        let shift = rc(Add::new(rc(Identity), rc(Transpose)).unwrap());
        let comp = Comp::new(scale.clone(), shift.clone()).unwrap();
        let m = sample();
        let expected = scale.compute(&[shift.compute(&[m.clone()]).unwrap()]).unwrap();
        assert_eq!(comp.compute(&[m]).unwrap(), expected);
        assert_eq!(comp.expression("A"), "(A + A^T) * 2");
    }

    #[test]
    fn test_descriptions() {
        let add = Add::new(rc(Scalar::new(3)), rc(Transpose)).unwrap();
        assert_eq!(add.expression("A"), "(A * 3 + A^T)");
        let comp = Comp::new(rc(Transpose), rc(Scalar::new(3))).unwrap();
        assert_eq!(comp.expression("A"), "(A * 3)^T");
        let mut out = Vec::new();
        comp.print(&mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "comp: (A * 3)^T");
    }

    #[test]
    fn test_operands_share_ownership() {
        let base = rc(Scalar::new(5));
        let add = Add::new(base.clone(), base.clone()).unwrap();
        assert!(add.operands().iter().all(|op| Rc::ptr_eq(op, &base)));
        drop(add);
        assert_eq!(Rc::strong_count(&base), 1);
    }
}
