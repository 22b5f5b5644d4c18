use bitvec::prelude::BitVec;
use bitvec::bitvec;
use std::fmt;

/// Fixed-size bitset tracking per-cell membership during grid traversals
///
/// Backs the visited sets of the carving and reachability breadth-first
/// searches. Provides O(1) membership testing; out-of-range positions are
/// treated as permanently absent.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CellSet {
    /// Create an empty set covering a grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    fn index(&self, pos: [i32; 2]) -> Option<usize> {
        if pos[0] >= 0
            && pos[0] < self.width as i32
            && pos[1] >= 0
            && pos[1] < self.height as i32
        {
            Some(pos[0] as usize * self.height + pos[1] as usize)
        } else {
            None
        }
    }

    /// Insert a position; out-of-range positions are ignored
    pub fn insert(&mut self, pos: [i32; 2]) {
        if let Some(index) = self.index(pos) {
            self.bits.set(index, true);
        }
    }

    /// Test position membership
    pub fn contains(&self, pos: [i32; 2]) -> bool {
        self.index(pos)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count positions in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no positions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellSet({} of {} cells)",
            self.count(),
            self.width * self.height
        )
    }
}
