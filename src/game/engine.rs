use std::time::Duration;

use thiserror::Error;

use crate::alpha_beta_searcher::{Score, SearchContext, SearchError};
use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::square::Square;
use crate::board::Board;
use crate::reversi_search::{evaluate_position, search_best_move, StrategyConfig};

/// Core engine state and configuration
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    pub strategy: StrategyConfig,
    pub starting_position: Board,
}

/// Game state and runtime info
#[derive(Clone)]
struct GameRecord {
    board: Board,
    move_history: Vec<(Color, Square)>,
    last_score: Option<Score>,
}

impl GameRecord {
    fn new(starting_position: Board) -> Self {
        Self {
            board: starting_position,
            move_history: Vec::new(),
            last_score: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// Plays one game of Reversi: holds the position, answers move queries and
/// runs searches with the configured strategy.
pub struct Engine {
    record: GameRecord,
    strategy: StrategyConfig,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            record: GameRecord::new(config.starting_position),
            search_context: SearchContext::new(config.strategy.max_depth()),
            strategy: config.strategy,
        }
    }

    pub fn board(&self) -> &Board {
        &self.record.board
    }

    pub fn strategy(&self) -> &StrategyConfig {
        &self.strategy
    }

    pub fn valid_moves(&self) -> Vec<Square> {
        self.record.board.legal_moves().into_iter().collect()
    }

    pub fn is_game_over(&self) -> bool {
        self.record.board.is_terminal()
    }

    pub fn winner(&self) -> Option<Color> {
        self.record.board.winner()
    }

    pub fn apply_move(&mut self, square: Square) -> Result<(), EngineError> {
        let mover = self.record.board.turn();
        self.record.board = self
            .record
            .board
            .apply_move(square)
            .map_err(|error| EngineError::BoardError { error })?;

        self.record.move_history.push((mover, square));
        Ok(())
    }

    pub fn best_move(&mut self) -> Result<Square, EngineError> {
        let best_move =
            search_best_move(&mut self.search_context, &self.record.board, &self.strategy)
                .map_err(|error| EngineError::SearchError { error })?;
        self.record.last_score = self.search_context.last_score();

        Ok(best_move)
    }

    pub fn make_best_move(&mut self) -> Result<Square, EngineError> {
        let best_move = self.best_move()?;
        self.apply_move(best_move)?;
        Ok(best_move)
    }

    /// Static score of the current position for black.
    pub fn score(&self) -> Score {
        evaluate_position(&self.strategy, &self.record.board)
    }

    pub fn move_history(&self) -> &[(Color, Square)] {
        &self.record.move_history
    }

    pub fn last_move(&self) -> Option<(Color, Square)> {
        self.record.move_history.last().copied()
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.record.last_score,
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<Score>,
    pub last_search_duration: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_starts_from_opening() {
        let engine = Engine::new();
        assert_eq!(engine.board(), &Board::starting_position());
        assert_eq!(engine.valid_moves().len(), 4);
        assert!(!engine.is_game_over());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.last_move(), None);
    }

    #[test]
    fn test_apply_move_records_history() {
        let mut engine = Engine::new();
        engine.apply_move(Square::new(2, 3)).unwrap();
        engine.apply_move(Square::new(2, 2)).unwrap();

        assert_eq!(
            engine.move_history(),
            &[
                (Color::Black, Square::new(2, 3)),
                (Color::White, Square::new(2, 2))
            ]
        );
        assert_eq!(engine.board().turn(), Color::Black);
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut engine = Engine::new();
        let result = engine.apply_move(Square::new(0, 0));
        assert_eq!(
            result,
            Err(EngineError::BoardError {
                error: BoardError::IllegalMoveError {
                    square: Square::new(0, 0)
                }
            })
        );
        assert!(engine.move_history().is_empty());
    }

    #[test]
    fn test_make_best_move_updates_stats() {
        let mut engine = Engine::with_config(EngineConfig {
            strategy: StrategyConfig::group3(),
            starting_position: Board::starting_position(),
        });

        let best_move = engine.make_best_move().unwrap();
        assert_eq!(engine.last_move(), Some((Color::Black, best_move)));

        let stats = engine.search_stats();
        assert_eq!(stats.depth, 2);
        assert!(stats.positions_searched > 1);
        assert!(stats.last_score.is_some());
        assert!(stats.last_search_duration.is_some());
    }

    #[test]
    fn test_engine_plays_game_to_completion() {
        let mut engine = Engine::with_config(EngineConfig {
            strategy: StrategyConfig::group3().with_max_depth(1),
            starting_position: Board::starting_position(),
        });

        while !engine.is_game_over() {
            engine.make_best_move().unwrap();
            assert!(engine.move_history().len() <= 60);
        }

        assert!(engine.board().is_terminal());
        assert_eq!(
            engine.best_move(),
            Err(EngineError::SearchError {
                error: SearchError::NoAvailableMoves
            })
        );
    }

    #[test]
    fn test_zero_depth_surfaces_search_error() {
        let mut engine = Engine::with_config(EngineConfig {
            strategy: StrategyConfig::basis().with_max_depth(0),
            starting_position: Board::starting_position(),
        });
        assert_eq!(
            engine.best_move(),
            Err(EngineError::SearchError {
                error: SearchError::DepthTooLow
            })
        );
    }
}
