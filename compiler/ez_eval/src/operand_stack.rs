//! Fixed-capacity operand stack.

use ez_ir::Type;

use crate::errors::type_mismatch;
use crate::{EvalError, EvalResult, Value};

/// Intermediate values of expression evaluation.
///
/// Pushing past capacity and popping an empty stack are errors, not growth
/// or defaults.
#[derive(Debug)]
pub struct OperandStack {
    values: Vec<Value>,
    capacity: usize,
}

impl OperandStack {
    pub fn with_capacity(capacity: usize) -> Self {
        OperandStack {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: Value) -> EvalResult {
        if self.values.len() >= self.capacity {
            return Err(EvalError::StackOverflow {
                capacity: self.capacity,
            });
        }
        tracing::trace!(%value, depth = self.values.len(), "push");
        self.values.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> EvalResult<Value> {
        self.values.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Pop a value that must have static type `ty`.
    pub fn pop_as(&mut self, ty: Type) -> EvalResult<Value> {
        let value = self.pop()?;
        if value.ty() == ty {
            Ok(value)
        } else {
            Err(type_mismatch(ty, value.ty()))
        }
    }

    pub fn pop_bool(&mut self) -> EvalResult<bool> {
        match self.pop()? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch(Type::Bool, other.ty())),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
