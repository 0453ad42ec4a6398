use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::bitboard::Bitboard;
use super::error::BoardError;

static ALGEBRAIC_SQUARE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-hA-H])([1-8])$").expect("square pattern is valid"));

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A cell of the 8x8 board, addressed by 0-indexed (row, column). Row 0 is
/// the top row. The algebraic form uses the column letter and `row + 1`, so
/// `(2, 3)` is `d3`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Square(u8);

impl Square {
    pub const CORNERS: [Square; 4] = [
        Square::new(0, 0),
        Square::new(0, 7),
        Square::new(7, 0),
        Square::new(7, 7),
    ];

    /// Callers outside the crate go through `from_row_col`, which checks
    /// the range instead of panicking.
    pub(crate) const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8);
        Self(row * 8 + col)
    }

    pub fn from_row_col(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> u8 {
        self.0 / 8
    }

    pub fn col(&self) -> u8 {
        self.0 % 8
    }

    pub fn bit(&self) -> Bitboard {
        Bitboard(1 << self.0)
    }

    pub fn is_corner(&self) -> bool {
        Self::CORNERS.contains(self)
    }

    /// The neighbouring square one step in the given direction, if it is on
    /// the board.
    pub fn offset(&self, row_step: i8, col_step: i8) -> Option<Self> {
        Self::from_row_col(self.row() as i8 + row_step, self.col() as i8 + col_step)
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", FILES[self.col() as usize], self.row() + 1)
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let caps = ALGEBRAIC_SQUARE.captures(algebraic)?;
        let file = caps[1].chars().next()?.to_ascii_lowercase();
        let col = FILES.iter().position(|&f| f == file)? as u8;
        let row = caps[2].parse::<u8>().ok()? - 1;
        Some(Self::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| BoardError::InvalidSquareNotation {
            notation: s.to_string(),
        })
    }
}
