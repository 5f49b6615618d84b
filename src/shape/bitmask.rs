use bitvec::prelude::*;
use std::fmt;

use crate::io::configuration::CELL_CAPACITY;

type Storage = BitArray<[u64; 4], Lsb0>;

/// Fixed-capacity bit storage backing a grid shape
///
/// Holds exactly [`CELL_CAPACITY`] flags inline, so shapes stay `Copy` and
/// never allocate. Indices outside the capacity read as `false` and writes
/// to them are dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellBits {
    bits: Storage,
}

impl CellBits {
    /// Create storage with every flag cleared
    pub fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Create storage with every flag set
    pub fn all() -> Self {
        let mut bits = Storage::ZERO;
        bits.fill(true);
        Self { bits }
    }

    /// Create storage from four little-endian 64-bit words
    pub fn from_words(words: [u64; 4]) -> Self {
        Self {
            bits: BitArray::new(words),
        }
    }

    /// Raw 64-bit words, lowest index in the lowest bit of the first word
    pub fn words(&self) -> [u64; 4] {
        self.bits.into_inner()
    }

    /// Read a flag, `false` beyond the capacity
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Write a flag, ignored beyond the capacity
    pub fn set(&mut self, index: usize, value: bool) {
        if index < CELL_CAPACITY {
            self.bits.set(index, value);
        }
    }

    /// Flip a flag and return its new value
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= CELL_CAPACITY {
            return false;
        }
        let value = !self.get(index);
        self.bits.set(index, value);
        value
    }

    /// Count set flags among the first `len` indices
    pub fn count_ones(&self, len: usize) -> usize {
        self.prefix(len).map_or(0, BitSlice::count_ones)
    }

    /// Indices of set flags among the first `len` indices, ascending
    pub fn iter_ones(&self, len: usize) -> impl Iterator<Item = usize> + '_ {
        self.prefix(len)
            .into_iter()
            .flat_map(|slice| slice.iter_ones())
    }

    /// Raw words with every flag at or beyond `len` cleared
    pub fn masked_words(&self, len: usize) -> [u64; 4] {
        let mut masked = *self;
        if let Some(tail) = masked.bits.get_mut(len.min(CELL_CAPACITY)..) {
            tail.fill(false);
        }
        masked.words()
    }

    fn prefix(&self, len: usize) -> Option<&BitSlice<u64, Lsb0>> {
        self.bits.get(..len.min(CELL_CAPACITY))
    }
}

impl Default for CellBits {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CellBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.words();
        write!(f, "CellBits({a:016x} {b:016x} {c:016x} {d:016x})")
    }
}
