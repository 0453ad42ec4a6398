//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once alpha meets beta at a node, the remaining
//! candidates there cannot change the value backed up to the root, so they are skipped.
//!
//! The search is fixed-depth. The root sits at depth 0 and every recursive step adds one ply;
//! a node at `max_depth`, or a terminal node, is scored by the evaluator. Maximizing nodes raise
//! alpha and return it, minimizing nodes lower beta and return it. A candidate only replaces the
//! recorded best move when it strictly improves the bound, so among equal scores the first
//! candidate in search order wins.
//!
//! # Dominant Moves
//!
//! A move that reports `GameMove::is_dominant` ends the scan at its node as soon as it has been
//! searched, whether or not it improved the bound. This trades exactness for speed in games
//! where some moves are assumed to be always best (corners in Reversi).
//!
//! # Move Ordering
//!
//! Candidates are passed through a `MoveOrderer` before the scan. Ordering never changes the
//! backed-up value of a fully searched node, but it does decide which move is recorded first
//! on ties and which dominant move is met first.

use std::time::{Duration, Instant};

use log::{debug, trace};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::score::{Score, INFINITY, NEG_INFINITY, NO_MOVE_PENALTY};
use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("search generated a move the position rejected: {reason}")]
    InvalidMove { reason: String },
}

/// The best move found at one node together with the score backed up from
/// its subtree. `best_move` is `None` at leaves and at nodes without
/// candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<M> {
    best_move: Option<M>,
    score: Score,
}

impl<M> SearchResult<M> {
    pub fn new(best_move: Option<M>, score: Score) -> Self {
        Self { best_move, score }
    }

    fn leaf(score: Score) -> Self {
        Self::new(None, score)
    }

    pub fn best_move(&self) -> Option<&M> {
        self.best_move.as_ref()
    }

    pub fn into_best_move(self) -> Option<M> {
        self.best_move
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    evaluation_count: usize,
    cutoff_count: usize,
    dominant_move_count: usize,
    last_score: Option<Score>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: Score, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

/// Owns the depth limit of a search and the statistics of the last run.
/// Each caller keeps its own context, so searches on separate threads never
/// share mutable state.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig { depth },
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Nodes visited by the last search, the root included.
    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn evaluation_count(&self) -> usize {
        self.stats.evaluation_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    pub fn dominant_move_count(&self) -> usize {
        self.stats.dominant_move_count
    }

    pub fn last_score(&self) -> Option<Score> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

/// Searches for the best move from `state`.
///
/// # Returns
///
/// - `Ok(best_move)` - The move whose subtree produced the best bound
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If the position is terminal or has no legal moves
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(4);
/// let best_move = alpha_beta_search(
///     &mut context,
///     &board,
///     &move_gen,
///     &evaluator,
///     &move_orderer,
/// )?;
/// ```
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<S, G, E, O>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
) -> Result<G::Move, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    search_position(context, state, move_generator, evaluator, move_orderer)?
        .into_best_move()
        .ok_or(SearchError::NoAvailableMoves)
}

/// Runs the search from `state` with the full window and returns the root
/// node: the chosen move and its backed-up score.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn search_position<S, G, E, O>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
) -> Result<SearchResult<G::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let max_depth = context.search_depth();
    debug!("alpha-beta search depth: {}", max_depth);

    if max_depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();

    let mut minimax = Minimax {
        move_generator,
        evaluator,
        move_orderer,
        max_depth,
        stats: &mut context.stats,
    };
    let result = minimax.search(state, 0, NEG_INFINITY, INFINITY)?;

    let duration = start.elapsed();
    debug!(
        "search finished: score {}, {} positions, {} cutoffs, {} dominant moves in {:?}",
        result.score(),
        minimax.stats.position_count,
        minimax.stats.cutoff_count,
        minimax.stats.dominant_move_count,
        duration
    );
    context.stats.record_result(result.score(), duration);

    Ok(result)
}

/// One search run: the collaborators, the depth limit and the statistics it
/// writes to.
struct Minimax<'a, G, E, O> {
    move_generator: &'a G,
    evaluator: &'a E,
    move_orderer: &'a O,
    max_depth: u8,
    stats: &'a mut SearchStats,
}

impl<'a, G, E, O> Minimax<'a, G, E, O> {
    fn search<S>(
        &mut self,
        state: &S,
        depth: u8,
        alpha: Score,
        beta: Score,
    ) -> Result<SearchResult<G::Move>, SearchError>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
        O: MoveOrderer<S, G::Move>,
    {
        self.stats.position_count += 1;

        if depth == self.max_depth || state.is_terminal() {
            self.stats.evaluation_count += 1;
            return Ok(SearchResult::leaf(self.evaluator.evaluate(state)));
        }

        let maximizing_player = state.is_maximizing_player();
        self.expand(state, depth + 1, alpha, beta, maximizing_player)
    }

    /// Scans the candidates of an interior node. `depth` is the depth of the
    /// children.
    fn expand<S>(
        &mut self,
        state: &S,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing_player: bool,
    ) -> Result<SearchResult<G::Move>, SearchError>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
        O: MoveOrderer<S, G::Move>,
    {
        let mut candidates = self.move_generator.generate_moves(state);
        if candidates.is_empty() {
            let penalty = if maximizing_player {
                NO_MOVE_PENALTY
            } else {
                -NO_MOVE_PENALTY
            };
            return Ok(SearchResult::new(None, penalty));
        }

        self.move_orderer.order_moves(candidates.as_mut(), state);

        let mut best_move = None;
        for candidate in candidates.as_ref().iter() {
            let child = candidate
                .apply(state)
                .map_err(|error| SearchError::InvalidMove {
                    reason: format!("{:?}", error),
                })?;
            let score = self.search(&child, depth, alpha, beta)?.score();

            if update_bound(score, maximizing_player, &mut alpha, &mut beta) {
                best_move = Some(candidate.clone());
            }

            if candidate.is_dominant(state) {
                self.stats.dominant_move_count += 1;
                trace!("dominant move {:?} ends the scan at depth {}", candidate, depth);
                break;
            }

            if alpha >= beta {
                self.stats.cutoff_count += 1;
                trace!("cutoff at depth {}: alpha {} >= beta {}", depth, alpha, beta);
                break;
            }
        }

        let bound = if maximizing_player { alpha } else { beta };
        Ok(SearchResult::new(best_move, bound))
    }
}

/// Tightens the bound owned by the player to move. Returns true if the score
/// strictly improved it.
fn update_bound(
    score: Score,
    maximizing_player: bool,
    alpha: &mut Score,
    beta: &mut Score,
) -> bool {
    if maximizing_player && score > *alpha {
        *alpha = score;
        true
    } else if !maximizing_player && score < *beta {
        *beta = score;
        true
    } else {
        false
    }
}
