/// Packed presence bits, one per row slot.
///
/// A marked bit means the slot holds a value; an unmarked slot is null.
/// Positions at or past `len()` are never marked, so whole-byte scans are
/// exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMap {
    bits: Vec<u8>,
    size: usize,
}

impl BitMap {
    pub fn new(size: usize) -> Self {
        Self {
            bits: vec![0u8; Self::size_for(size)],
            size,
        }
    }

    /// Bytes needed to hold `size` bits.
    pub fn size_for(size: usize) -> usize {
        size.div_ceil(8)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `false` when `position` is outside the bitmap.
    pub fn mark(&mut self, position: usize) -> bool {
        if position >= self.size {
            return false;
        }
        self.bits[position / 8] |= 1u8 << (position % 8);
        true
    }

    /// Returns `false` when `position` is outside the bitmap.
    pub fn unmark(&mut self, position: usize) -> bool {
        if position >= self.size {
            return false;
        }
        self.bits[position / 8] &= !(1u8 << (position % 8));
        true
    }

    #[inline]
    pub fn is_marked(&self, position: usize) -> bool {
        if position >= self.size {
            return false;
        }
        (self.bits[position / 8] & (1u8 << (position % 8))) != 0
    }

    pub fn mark_all(&mut self) {
        self.bits.fill(0xFF);
        let tail = self.size % 8;
        if tail != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last = (1u8 << tail) - 1;
            }
        }
    }

    pub fn reset(&mut self) {
        self.bits.fill(0);
    }

    pub fn count_marked(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_all_marked(&self) -> bool {
        self.count_marked() == self.size
    }

    pub fn is_all_unmarked(&self) -> bool {
        self.bits.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}
