//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

use super::score::Score;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Returns true if the player to move is the maximizing player.
    fn is_maximizing_player(&self) -> bool;

    /// Returns true if the game is over in this position.
    fn is_terminal(&self) -> bool;
}

/// Represents an action that turns one game state into its successor.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Returns the state reached by playing this move. The given state is left
    /// untouched so siblings can be explored from it.
    fn apply(&self, state: &Self::State) -> Result<Self::State, Self::Error>;

    /// Returns true if this move is assumed to dominate every alternative.
    /// Once a dominant move has been searched, the remaining candidates at
    /// that node are skipped. Default implementation returns false.
    fn is_dominant(&self, _state: &Self::State) -> bool {
        false
    }
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the current player, in a stable order.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    fn evaluate(&self, state: &S) -> Score;
}

/// Orders moves to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<S: GameState, M>: Clone + Send + Sync {
    /// Sorts moves in-place, placing "better" moves first.
    fn order_moves(&self, moves: &mut [M], state: &S);
}

/// A no-op move orderer that keeps the generator's order.
#[derive(Clone, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<S: GameState, M> MoveOrderer<S, M> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _moves: &mut [M], _state: &S) {}
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send> MoveCollection<M> for Vec<M> {}
