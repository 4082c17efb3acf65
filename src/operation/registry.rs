//! Operation registry - ordered storage and lookup of operations.
//!
//! Operations are addressed by their position. Removing an entry shifts every
//! later entry down by one, so an index remembered before a removal may name
//! a different operation afterwards.

use std::rc::Rc;

use super::{Identity, OperationRef, Transpose};
use crate::error::{CalcError, CalcResult};

/// Smallest capacity bound a registry accepts; the two built-ins must fit.
pub const MIN_CAPACITY: usize = 2;
/// Largest capacity bound a registry accepts.
pub const MAX_CAPACITY: usize = 100;

/// Ordered, indexable collection of operations with an optional size bound.
pub struct OperationRegistry {
    operations: Vec<OperationRef>,
    capacity: Option<usize>,
}

impl OperationRegistry {
    /// Create a registry seeded with identity (0) and transpose (1).
    pub fn new() -> Self {
        Self {
            operations: vec![Rc::new(Identity), Rc::new(Transpose)],
            capacity: None,
        }
    }

    /// Create a seeded registry bounded to `capacity` operations.
    pub fn with_capacity(capacity: usize) -> CalcResult<Self> {
        let mut registry = Self::new();
        registry.set_capacity(capacity)?;
        Ok(registry)
    }

    /// Append an operation and return its index.
    pub fn push(&mut self, op: OperationRef) -> CalcResult<usize> {
        if let Some(capacity) = self.capacity {
            if self.operations.len() >= capacity {
                return Err(CalcError::Capacity(capacity));
            }
        }
        self.operations.push(op);
        Ok(self.operations.len() - 1)
    }

    pub fn get(&self, index: usize) -> CalcResult<&OperationRef> {
        self.operations.get(index).ok_or(CalcError::Index {
            index: index as i64,
            len: self.operations.len(),
        })
    }

    /// Remove the operation at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> CalcResult<OperationRef> {
        self.check_index(index as i64)?;
        Ok(self.operations.remove(index))
    }

    /// Validate a user-supplied index against the current size.
    pub fn check_index(&self, index: i64) -> CalcResult<usize> {
        if index < 0 || index >= self.operations.len() as i64 {
            return Err(CalcError::Index {
                index,
                len: self.operations.len(),
            });
        }
        Ok(index as usize)
    }

    /// Whether any other registered operation is built from the one at `index`.
    pub fn is_referenced(&self, index: usize) -> bool {
        let Some(target) = self.operations.get(index) else {
            return false;
        };
        self.operations
            .iter()
            .skip(index + 1)
            .any(|op| op.operands().into_iter().any(|o| Rc::ptr_eq(o, target)))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Set the size bound. Never drops operations; see [`Self::truncate`].
    pub fn set_capacity(&mut self, capacity: usize) -> CalcResult<()> {
        validate_capacity(capacity)?;
        self.capacity = Some(capacity);
        Ok(())
    }

    /// Drop every operation at index `len` or above.
    pub fn truncate(&mut self, len: usize) {
        self.operations.truncate(len);
    }

    /// Iterate over `(index, operation)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &OperationRef)> + '_ {
        self.operations.iter().enumerate()
    }
}

/// Check that `capacity` is an acceptable registry bound.
pub fn validate_capacity(capacity: usize) -> CalcResult<()> {
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        return Err(CalcError::Range(format!(
            "Invalid input: please enter a capacity between {MIN_CAPACITY} - {MAX_CAPACITY}"
        )));
    }
    Ok(())
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
