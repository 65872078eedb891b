//! Flat variable memory addressed by slot.

use ez_ir::VarSlot;

use crate::{EvalError, EvalResult, Value};

/// One cell per declared variable. A cell is empty until first stored to.
#[derive(Debug)]
pub struct Memory {
    cells: Vec<Option<Value>>,
}

impl Memory {
    pub fn with_capacity(capacity: usize) -> Self {
        Memory {
            cells: vec![None; capacity],
        }
    }

    pub fn load(&self, slot: VarSlot) -> EvalResult<Option<Value>> {
        self.cells
            .get(slot.index())
            .copied()
            .ok_or_else(|| self.out_of_bounds(slot))
    }

    pub fn store(&mut self, slot: VarSlot, value: Value) -> EvalResult {
        let err = self.out_of_bounds(slot);
        let cell = self.cells.get_mut(slot.index()).ok_or(err)?;
        tracing::trace!(%slot, %value, "store");
        *cell = Some(value);
        Ok(())
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn out_of_bounds(&self, slot: VarSlot) -> EvalError {
        EvalError::MemoryOutOfBounds {
            slot,
            capacity: self.cells.len(),
        }
    }
}
