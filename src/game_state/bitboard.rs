//! 64-bit square sets.
//!
//! Bit `i` set means square `i` is a member. All operations are pure and
//! constant time; bit scans use the hardware `trailing_zeros` /
//! `leading_zeros` intrinsics.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::game_state::chess_types::Square;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;

pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_2: u64 = 0x0000_0000_0000_FF00;
pub const RANK_3: u64 = 0x0000_0000_00FF_0000;
pub const RANK_6: u64 = 0x0000_FF00_0000_0000;
pub const RANK_7: u64 = 0x00FF_0000_0000_0000;
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// One-step compass directions, seen from the light side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Change in square index for one step.
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => 8,
            Direction::South => -8,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthEast => 9,
            Direction::NorthWest => 7,
            Direction::SouthEast => -7,
            Direction::SouthWest => -9,
        }
    }

    /// Squares whose shifted bit would wrap onto the opposite edge.
    #[inline]
    const fn wrap_mask(self) -> u64 {
        match self {
            Direction::North | Direction::South => !0,
            Direction::East | Direction::NorthEast | Direction::SouthEast => !FILE_H,
            Direction::West | Direction::NorthWest | Direction::SouthWest => !FILE_A,
        }
    }
}

/// A set of board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(!0);

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Bitboard(1u64 << square.index())
    }

    #[inline]
    pub const fn union(self, other: Bitboard) -> Self {
        Bitboard(self.0 | other.0)
    }

    #[inline]
    pub const fn intersection(self, other: Bitboard) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Members of `self` that are not in `other`.
    #[inline]
    pub const fn difference(self, other: Bitboard) -> Self {
        Bitboard(self.0 & !other.0)
    }

    #[inline]
    pub const fn complement(self) -> Self {
        Bitboard(!self.0)
    }

    /// Moves every member one step in `direction`; members that would leave
    /// the board (including across the a/h edge) are dropped.
    #[inline]
    pub const fn shift(self, direction: Direction) -> Self {
        let kept = self.0 & direction.wrap_mask();
        let offset = direction.offset();
        if offset > 0 {
            Bitboard(kept << offset as u32)
        } else {
            Bitboard(kept >> (-offset) as u32)
        }
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        (self.0 >> square.index()) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << square.index());
    }

    #[inline]
    pub fn toggle(&mut self, square: Square) {
        self.0 ^= 1u64 << square.index();
    }

    /// Least significant member.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index(self.0.trailing_zeros() as u8))
        }
    }

    /// Most significant member.
    #[inline]
    pub const fn msb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index(63 - self.0.leading_zeros() as u8))
        }
    }

    /// Removes and returns the least significant member.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        let square = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(square)
    }

    #[inline]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Eight rows of `0`/`1`, bit 0 (a1) first, bits separated by spaces.
    pub fn to_grid_string(self) -> String {
        let mut out = String::with_capacity(128);
        for index in 0..64u32 {
            out.push(if (self.0 >> index) & 1 != 0 { '1' } else { '0' });
            out.push(if (index + 1) % 8 == 0 { '\n' } else { ' ' });
        }
        out
    }
}

/// Yields member squares from least to most significant.
#[derive(Debug, Clone)]
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_grid_string())
    }
}
