//! Dense tid-sets. Each transaction id gets a bit position so that support
//! counting is a bitwise AND followed by a popcount.

use bitvec::prelude::*;

use crate::types::{SupportCount, TidSet};

/// Bidirectional mapping between transaction ids and bit positions.
#[derive(Debug, Clone)]
pub struct TidIndex<T> {
    tids: Vec<T>,
}

impl<T: Ord + Clone> TidIndex<T> {
    pub fn new(tids: impl IntoIterator<Item = T>) -> Self {
        let mut tids: Vec<T> = tids.into_iter().collect();
        tids.sort_unstable();
        tids.dedup();
        Self { tids }
    }

    pub fn len(&self) -> usize {
        self.tids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tids.is_empty()
    }

    pub fn position(&self, tid: &T) -> Option<usize> {
        self.tids.binary_search(tid).ok()
    }

    /// Tids unknown to the index are ignored.
    pub fn encode(&self, tidset: &TidSet<T>) -> TidBitmap {
        let mut bits = bitvec![0; self.tids.len()];
        for position in tidset.iter().filter_map(|tid| self.position(tid)) {
            bits.set(position, true);
        }
        TidBitmap { bits }
    }

    pub fn decode(&self, bitmap: &TidBitmap) -> TidSet<T> {
        bitmap
            .bits
            .iter_ones()
            .map(|position| self.tids[position].clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidBitmap {
    bits: BitVec,
}

impl TidBitmap {
    pub fn support(&self) -> SupportCount {
        self.bits.count_ones()
    }

    pub fn intersect(&self, other: &TidBitmap) -> TidBitmap {
        let mut bits = self.bits.clone();
        bits &= other.bits.as_bitslice();
        TidBitmap { bits }
    }
}
