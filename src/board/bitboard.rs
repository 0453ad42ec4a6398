use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use super::square::Square;

/// One bit per square, bit `row * 8 + col`.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(u64::MAX);

    pub fn overlaps(&self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_full(&self) -> bool {
        self.0 == u64::MAX
    }

    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates the set squares in ascending index order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let mut remaining = self.0;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let index = remaining.trailing_zeros() as u8;
            remaining &= remaining - 1;
            Square::from_index(index)
        })
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
