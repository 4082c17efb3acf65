//! Bounded square matrices.
//!
//! Every element of a [`SquareMatrix`] stays within
//! [`MIN_ELEMENT`]..=[`MAX_ELEMENT`]. Arithmetic that would leave that range
//! fails with [`CalcError::Range`] instead of producing the value.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{CalcError, CalcResult};

/// Smallest value a matrix element may hold.
pub const MIN_ELEMENT: i32 = -1024;
/// Largest value a matrix element may hold.
pub const MAX_ELEMENT: i32 = 1000;

const OUT_OF_RANGE: &str = "Matrix value is out of range";

/// A dense `size x size` grid of bounded integers, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    size: usize,
    cells: Vec<i32>,
}

impl SquareMatrix {
    /// Create a matrix with every element set to `value`.
    pub fn new(size: usize, value: i32) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Create a matrix whose element `(i, j)` is `i * size + j`.
    pub fn with_pattern(size: usize) -> Self {
        Self {
            size,
            cells: (0..size * size).map(|i| i as i32).collect(),
        }
    }

    /// Build a matrix from nested rows. Rows must all have `rows.len()` entries.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> CalcResult<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(CalcError::ArgumentCount(format!(
                    "matrix row has {} items, expected {size}",
                    row.len()
                )));
            }
            for &value in row {
                cells.push(check_bounds(i64::from(value))?);
            }
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Element-wise sum. Fails if any element exceeds [`MAX_ELEMENT`].
    pub fn checked_add(&self, rhs: &Self) -> CalcResult<Self> {
        self.zip_with(rhs, |a, b| {
            let sum = i64::from(a) + i64::from(b);
            if sum > i64::from(MAX_ELEMENT) {
                return Err(CalcError::Range(OUT_OF_RANGE.into()));
            }
            check_bounds(sum)
        })
    }

    /// Element-wise difference. Fails if any element drops below [`MIN_ELEMENT`].
    pub fn checked_sub(&self, rhs: &Self) -> CalcResult<Self> {
        self.zip_with(rhs, |a, b| {
            let diff = i64::from(a) - i64::from(b);
            if diff < i64::from(MIN_ELEMENT) {
                return Err(CalcError::Range(OUT_OF_RANGE.into()));
            }
            check_bounds(diff)
        })
    }

    /// Multiply every element by `scalar`.
    pub fn scaled(&self, scalar: i32) -> CalcResult<Self> {
        let cells = self
            .cells
            .iter()
            .map(|&a| check_bounds(i64::from(a) * i64::from(scalar)))
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(Self {
            size: self.size,
            cells,
        })
    }

    /// Mirror across the main diagonal.
    pub fn transpose(&self) -> Self {
        let mut result = Self::with_pattern(self.size);
        for i in 0..self.size {
            for j in 0..self.size {
                result[(i, j)] = self[(j, i)];
            }
        }
        result
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    fn zip_with<F>(&self, rhs: &Self, mut f: F) -> CalcResult<Self>
    where
        F: FnMut(i32, i32) -> CalcResult<i32>,
    {
        if self.size != rhs.size {
            return Err(CalcError::Range(format!(
                "matrix sizes differ: {0}x{0} and {1}x{1}",
                self.size, rhs.size
            )));
        }
        let cells = self
            .cells
            .iter()
            .zip(&rhs.cells)
            .map(|(&a, &b)| f(a, b))
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(Self {
            size: self.size,
            cells,
        })
    }
}

/// Parse one matrix element, enforcing the element bounds.
pub fn parse_element(token: &str) -> CalcResult<i32> {
    let value = token.parse::<i32>().map_err(|_| {
        CalcError::InvalidFormat(format!("expected an integer for matrix, got '{token}'"))
    })?;
    check_bounds(i64::from(value))
}

fn check_bounds(value: i64) -> CalcResult<i32> {
    if value < i64::from(MIN_ELEMENT) || value > i64::from(MAX_ELEMENT) {
        return Err(CalcError::Range(OUT_OF_RANGE.into()));
    }
    Ok(value as i32)
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        &self.cells[i * self.size + j]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i32 {
        &mut self.cells[i * self.size + j]
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[[i32; 2]]) -> SquareMatrix {
        SquareMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_constructors() {
        let filled = SquareMatrix::new(3, 7);
        assert_eq!(filled.size(), 3);
        assert!(filled.rows().flatten().all(|&v| v == 7));

        let pattern = SquareMatrix::with_pattern(2);
        assert_eq!(pattern, m(&[[0, 1], [2, 3]]));
    }

    #[test]
    fn test_add_and_sub() {
        let a = m(&[[1, 2], [3, 4]]);
        let b = m(&[[10, 20], [30, 40]]);
        assert_eq!(a.checked_add(&b).unwrap(), m(&[[11, 22], [33, 44]]));
        assert_eq!(a.checked_sub(&b).unwrap(), m(&[[-9, -18], [-27, -36]]));
    }

    #[test]
    fn test_add_overflow_is_range_error() {
        let a = SquareMatrix::new(2, 600);
        assert!(matches!(a.checked_add(&a), Err(CalcError::Range(_))));
        // exactly the upper bound is fine
        let b = SquareMatrix::new(2, 400);
        assert_eq!(a.checked_add(&b).unwrap(), SquareMatrix::new(2, 1000));
    }

    #[test]
    fn test_sub_underflow_is_range_error() {
        let a = SquareMatrix::new(1, -1000);
        let b = SquareMatrix::new(1, 25);
        assert!(matches!(a.checked_sub(&b), Err(CalcError::Range(_))));
        let c = SquareMatrix::new(1, 24);
        assert_eq!(a.checked_sub(&c).unwrap(), SquareMatrix::new(1, -1024));
    }

    #[test]
    fn test_scaled() {
        let a = m(&[[1, 2], [3, 4]]);
        assert_eq!(a.scaled(3).unwrap(), m(&[[3, 6], [9, 12]]));
        assert_eq!(a.scaled(-2).unwrap(), m(&[[-2, -4], [-6, -8]]));
        assert!(matches!(a.scaled(300), Err(CalcError::Range(_))));
        assert!(matches!(a.scaled(i32::MAX), Err(CalcError::Range(_))));
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let a = SquareMatrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        let t = a.transpose();
        assert_eq!(t[(0, 2)], 7);
        assert_eq!(t[(2, 0)], 3);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_parse_element() {
        assert_eq!(parse_element("-1024").unwrap(), MIN_ELEMENT);
        assert_eq!(parse_element("1000").unwrap(), MAX_ELEMENT);
        assert!(matches!(parse_element("1001"), Err(CalcError::Range(_))));
        assert!(matches!(parse_element("1.5"), Err(CalcError::InvalidFormat(_))));
    }

    #[test]
    fn test_display() {
        let a = m(&[[1, -2], [30, 4]]);
        assert_eq!(a.to_string(), "1 -2\n30 4\n");
    }
}
