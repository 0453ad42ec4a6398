pub mod bitboard;
pub mod color;
pub mod error;
pub mod notation;
pub mod square;

mod display;


use smallvec::SmallVec;

use bitboard::Bitboard;
use color::Color;
use error::BoardError;
use square::Square;

use crate::reversi_position;

/// Legal moves for one position. Reversi rarely offers more than 32.
pub type MoveList = SmallVec<[Square; 32]>;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Disc totals for both colors. Absent colors count as zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PieceCounts {
    pub black: u8,
    pub white: u8,
}

impl PieceCounts {
    pub fn get(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn total(&self) -> u8 {
        self.black + self.white
    }
}

/// An 8x8 Reversi position: one occupancy bitboard per color and the side to
/// move. Positions are values; `apply_move` returns the successor and leaves
/// `self` untouched so sibling moves can be explored from the same parent.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    /// An empty board with black to move.
    pub fn new() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
            turn: Color::Black,
        }
    }

    pub fn starting_position() -> Self {
        reversi_position! {
            ........
            ........
            ........
            ...WB...
            ...BW...
            ........
            ........
            ........
        }
    }

    pub fn discs(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupied().overlaps(square.bit())
    }

    pub fn owner(&self, square: Square) -> Option<Color> {
        if self.black.overlaps(square.bit()) {
            Some(Color::Black)
        } else if self.white.overlaps(square.bit()) {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn put(&mut self, square: Square, color: Color) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }
        match color {
            Color::Black => self.black |= square.bit(),
            Color::White => self.white |= square.bit(),
        }
        Ok(())
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub fn piece_counts(&self) -> PieceCounts {
        PieceCounts {
            black: self.black.count_ones() as u8,
            white: self.white.count_ones() as u8,
        }
    }

    /// Every occupied square with its owner, in row-major order.
    pub fn cell_owners(&self) -> impl Iterator<Item = (Square, Color)> + '_ {
        self.occupied()
            .squares()
            .filter_map(move |square| self.owner(square).map(|color| (square, color)))
    }

    /// Legal moves for the side to move, in row-major order.
    pub fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.turn)
    }

    pub fn legal_moves_for(&self, color: Color) -> MoveList {
        Square::all()
            .filter(|&square| !self.flips(square, color).is_empty())
            .collect()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        Square::all().any(|square| !self.flips(square, color).is_empty())
    }

    pub fn is_legal_move(&self, square: Square) -> bool {
        !self.flips(square, self.turn).is_empty()
    }

    /// The game ends when the board is full or neither side can move.
    pub fn is_terminal(&self) -> bool {
        self.occupied().is_full()
            || (!self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White))
    }

    /// The color with more discs once the game is over. `None` while the game
    /// is running or on a draw.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_terminal() {
            return None;
        }
        let counts = self.piece_counts();
        if counts.black > counts.white {
            Some(Color::Black)
        } else if counts.white > counts.black {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Places a disc for the side to move and flips every outflanked run.
    /// The turn passes to the opponent, or stays when the opponent has no
    /// reply.
    pub fn apply_move(&self, square: Square) -> Result<Board, BoardError> {
        let flips = self.flips(square, self.turn);
        if flips.is_empty() {
            return Err(BoardError::IllegalMoveError { square });
        }

        let mut next = self.clone();
        let placed = flips | square.bit();
        match self.turn {
            Color::Black => {
                next.black |= placed;
                next.white &= !flips;
            }
            Color::White => {
                next.white |= placed;
                next.black &= !flips;
            }
        }

        let opponent = self.turn.opposite();
        if next.has_legal_move(opponent) {
            next.turn = opponent;
        }
        Ok(next)
    }

    /// The same position with every disc and the side to move recolored.
    pub fn with_colors_swapped(&self) -> Board {
        Board {
            black: self.white,
            white: self.black,
            turn: self.turn.opposite(),
        }
    }

    /// Discs that `color` would flip by playing `square`; empty when the move
    /// is illegal.
    fn flips(&self, square: Square, color: Color) -> Bitboard {
        if self.is_occupied(square) {
            return Bitboard::EMPTY;
        }

        let own = self.discs(color);
        let opponent = self.discs(color.opposite());
        let mut flips = Bitboard::EMPTY;

        for &(row_step, col_step) in DIRECTIONS.iter() {
            let mut run = Bitboard::EMPTY;
            let mut cursor = square.offset(row_step, col_step);

            while let Some(current) = cursor {
                let bit = current.bit();
                if opponent.overlaps(bit) {
                    run |= bit;
                    cursor = current.offset(row_step, col_step);
                } else {
                    if own.overlaps(bit) {
                        flips |= run;
                    }
                    break;
                }
            }
        }

        flips
    }
}
