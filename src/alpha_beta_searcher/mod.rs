//! Game-agnostic fixed-depth alpha-beta search.
//!
//! The searcher only sees a game through the traits in `traits`: a state that
//! knows whose turn it is and whether play is over, moves that produce a
//! successor state, a move generator, an evaluator and an optional move
//! orderer. Reversi plugs into it from `reversi_search`.

mod score;
mod search;
mod traits;


pub use score::{Score, MAX_WIN, MIN_WIN, NO_MOVE_PENALTY};
pub use search::{alpha_beta_search, search_position, SearchContext, SearchError, SearchResult};
pub use traits::{
    Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer, NoOpMoveOrderer,
};
