//! The flat data memory arena (`spec.md` §3 "Memory arena", §4.7 `!`/`@`/
//! `cells`/`allot`).

use crate::runtime::cell::{Address, Cell};
use crate::runtime::error::{InterpError, Result};

/// Fixed-size linear array of cells, addressed `[0, size)`. `variable`,
/// `create`, and `allot` carve regions off the monotonically increasing
/// `free` cursor; `!`/`@` can read or write anywhere in bounds.
pub struct Memory {
    cells: Vec<Cell>,
    free: Address,
}

impl Memory {
    pub fn new(size: usize) -> Self {
        Memory {
            cells: vec![0; size],
            free: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The current free-cursor address ("HERE" in traditional Forth parlance).
    pub fn here(&self) -> Address {
        self.free
    }

    pub fn fetch(&self, addr: Address) -> Result<Cell> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(InterpError::InvalidAddress(addr as Cell))
    }

    pub fn store(&mut self, addr: Address, value: Cell) -> Result<()> {
        let slot = self
            .cells
            .get_mut(addr)
            .ok_or(InterpError::InvalidAddress(addr as Cell))?;
        *slot = value;
        Ok(())
    }

    /// Reserve `count` cells at the free cursor and advance it. Used by
    /// `variable` (count == 1). Returns the address of the first reserved
    /// cell.
    pub fn reserve(&mut self, count: Address) -> Result<Address> {
        let addr = self.free;
        let new_free = addr
            .checked_add(count)
            .ok_or(InterpError::AllocationFailure)?;

        if new_free > self.cells.len() {
            return Err(InterpError::AllocationFailure);
        }

        self.free = new_free;
        Ok(addr)
    }

    /// `allot ( n -- )`: advance the free cursor by `n` cells without
    /// initializing anything. `n` may be negative to release space.
    pub fn allot(&mut self, n: Cell) -> Result<()> {
        let new_free = self.free as i64 + n;

        if new_free < 0 || new_free as u64 > self.cells.len() as u64 {
            return Err(InterpError::AllocationFailure);
        }

        self.free = new_free as Address;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_fetch_round_trip() {
        let mut mem = Memory::new(16);
        mem.store(3, 42).unwrap();
        assert_eq!(mem.fetch(3).unwrap(), 42);
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let mem = Memory::new(4);
        assert_eq!(mem.fetch(4), Err(InterpError::InvalidAddress(4)));
    }

    #[test]
    fn reserve_advances_the_free_cursor() {
        let mut mem = Memory::new(4);
        let a = mem.reserve(1).unwrap();
        let b = mem.reserve(1).unwrap();
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(mem.here(), 2);
    }

    #[test]
    fn reserve_past_capacity_fails() {
        let mut mem = Memory::new(2);
        mem.reserve(1).unwrap();
        mem.reserve(1).unwrap();
        assert_eq!(mem.reserve(1), Err(InterpError::AllocationFailure));
    }

    #[test]
    fn allot_does_not_initialize_new_cells() {
        let mut mem = Memory::new(8);
        mem.allot(4).unwrap();
        assert_eq!(mem.here(), 4);
        assert_eq!(mem.fetch(3).unwrap(), 0);
    }
}
