//! Reversi-specific trait implementations for the alpha-beta search.

use log::debug;
use rayon::prelude::*;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::alpha_beta_searcher::{
    search_position, Evaluator, GameMove, GameState, MoveCollection, MoveGenerator,
    NoOpMoveOrderer, Score, SearchContext, SearchError, SearchResult,
};
use crate::board::error::BoardError;
use crate::board::square::Square;
use crate::board::{Board, MoveList};
use crate::evaluate::PositionalEvaluator;

use super::strategy::StrategyConfig;

impl GameState for Board {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.turn().maximize_score()
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        Board::is_terminal(self)
    }
}

impl GameMove for Square {
    type State = Board;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &Board) -> Result<Board, BoardError> {
        state.apply_move(*self)
    }

    /// Corners can never be flipped back, so taking one ends the scan.
    #[inline]
    fn is_dominant(&self, _state: &Board) -> bool {
        self.is_corner()
    }
}

impl MoveCollection<Square> for MoveList {}

#[derive(Clone, Copy, Default, Debug)]
pub struct ReversiMoveGenerator;

impl MoveGenerator<Board> for ReversiMoveGenerator {
    type Move = Square;
    type MoveList = MoveList;

    #[inline]
    fn generate_moves(&self, state: &Board) -> MoveList {
        state.legal_moves()
    }
}

impl Evaluator<Board> for PositionalEvaluator {
    #[inline]
    fn evaluate(&self, state: &Board) -> Score {
        self.score(state)
    }
}

/// Runs the search with the depth, evaluator and ordering chosen by
/// `config`. `context` only collects statistics; its depth is reset to the
/// configured one. Returns the root node: the chosen move and its backed-up
/// score.
pub fn search_root(
    context: &mut SearchContext,
    board: &Board,
    config: &StrategyConfig,
) -> Result<SearchResult<Square>, SearchError> {
    context.set_search_depth(config.max_depth());
    let move_generator = ReversiMoveGenerator;
    let evaluator = config.evaluator();

    if config.move_ordering() {
        let move_orderer = config.move_orderer();
        search_position(context, board, &move_generator, &evaluator, &move_orderer)
    } else {
        search_position(context, board, &move_generator, &evaluator, &NoOpMoveOrderer)
    }
}

/// Searches for the best move from the given position.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &Board,
    config: &StrategyConfig,
) -> Result<Square, SearchError> {
    search_root(context, board, config)?
        .into_best_move()
        .ok_or(SearchError::NoAvailableMoves)
}

/// Picks a move for the side to move with a fresh context sized by
/// `config`. Fails with `DepthTooLow` before looking at the board when the
/// configured depth is zero.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn choose_move(config: &StrategyConfig, board: &Board) -> Result<Square, SearchError> {
    let mut context = SearchContext::new(config.max_depth());
    let best_move = search_best_move(&mut context, board, config)?;
    debug!(
        "chose {} after {} positions (score {:?})",
        best_move,
        context.searched_position_count(),
        context.last_score()
    );
    Ok(best_move)
}

/// Static score of `board` for black under `config`'s evaluator.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn evaluate_position(config: &StrategyConfig, board: &Board) -> Score {
    config.evaluator().score(board)
}

/// Chooses a move for each board on the rayon pool. Every search owns its
/// context, so results match running `choose_move` on each board in turn.
pub fn choose_moves_parallel(
    config: &StrategyConfig,
    boards: &[Board],
) -> Vec<Result<Square, SearchError>> {
    boards
        .par_iter()
        .map(|board| choose_move(config, board))
        .collect()
}
