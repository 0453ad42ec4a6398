use crate::alpha_beta_searcher::{Score, MAX_WIN, MIN_WIN};
use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;

pub use self::weight_tables::{WeightTable, BASIS_WEIGHTS, GROUP3_WEIGHTS};

mod weight_tables;

/// Disc total at or below which the game counts as the opening.
pub const DEFAULT_PHASE_THRESHOLD: u8 = 50;

/// Largest material scale the CLI accepts. Larger scales are still clamped
/// by the evaluator, but they drown out the positional term entirely.
pub const MAX_MATERIAL_SCALE: Score = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Endgame,
}

/// Scores positions for black, the maximizing player.
///
/// The heuristic blends two differentials, both taken as black minus white:
/// the sum of the static weights of each side's discs, and the disc count
/// scaled by `material_scale`. In the opening the disc count is subtracted,
/// rewarding fewer but better placed discs. Past the phase threshold it is
/// added, since the count decides the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionalEvaluator {
    weights: WeightTable,
    phase_threshold: u8,
    material_scale: Score,
}

impl PositionalEvaluator {
    pub fn new(weights: WeightTable, phase_threshold: u8, material_scale: Score) -> Self {
        Self {
            weights,
            phase_threshold,
            material_scale,
        }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn phase_threshold(&self) -> u8 {
        self.phase_threshold
    }

    pub fn material_scale(&self) -> Score {
        self.material_scale
    }

    #[inline(always)]
    pub fn weight(&self, square: Square) -> Score {
        self.weights[square.row() as usize][square.col() as usize]
    }

    /// Returns the score of the board from black's perspective. A finished
    /// game with a winner scores the win sentinel; a drawn one falls through
    /// to the heuristic.
    pub fn score(&self, board: &Board) -> Score {
        match board.winner() {
            Some(Color::Black) => return MAX_WIN,
            Some(Color::White) => return MIN_WIN,
            None => {}
        }

        let positional = self.positional_differential(board);
        let material = self
            .material_scale
            .saturating_mul(self.material_differential(board));

        let heuristic = match self.phase(board) {
            GamePhase::Opening => positional.saturating_sub(material),
            GamePhase::Endgame => positional.saturating_add(material),
        };
        // heuristic scores stay strictly between the win sentinels
        heuristic.clamp(MIN_WIN + 1, MAX_WIN - 1)
    }

    #[inline(always)]
    pub fn material_differential(&self, board: &Board) -> Score {
        let counts = board.piece_counts();
        Score::from(counts.black) - Score::from(counts.white)
    }

    pub fn positional_differential(&self, board: &Board) -> Score {
        board
            .cell_owners()
            .map(|(square, color)| match color {
                Color::Black => self.weight(square),
                Color::White => -self.weight(square),
            })
            .sum()
    }

    pub fn phase(&self, board: &Board) -> GamePhase {
        if board.piece_counts().total() <= self.phase_threshold {
            GamePhase::Opening
        } else {
            GamePhase::Endgame
        }
    }
}

impl Default for PositionalEvaluator {
    fn default() -> Self {
        Self::new(BASIS_WEIGHTS, DEFAULT_PHASE_THRESHOLD, 1)
    }
}
