//! Quick search performance benchmark over reproducible positions.

use std::fmt;
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;

use crate::alpha_beta_searcher::{Score, SearchContext};
use crate::board::error::BoardError;
use crate::board::notation::to_notation;
use crate::board::square::Square;
use crate::board::Board;
use crate::reversi_search::{search_root, StrategyConfig};

use super::engine::EngineError;

const MIN_RANDOM_PLIES: usize = 4;
const MAX_RANDOM_PLIES: usize = 40;

/// Builds `count` positions by random play from the opening. The same seed
/// always yields the same positions. Every position returned is still in
/// play, so the side to move has at least one legal move.
pub fn random_positions(count: usize, seed: u64) -> Result<Vec<Board>, BoardError> {
    let rng = fastrand::Rng::with_seed(seed);
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        let plies = rng.usize(MIN_RANDOM_PLIES..=MAX_RANDOM_PLIES);
        let mut board = Board::starting_position();

        for _ in 0..plies {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let next = board.apply_move(moves[rng.usize(..moves.len())])?;
            if next.is_terminal() {
                break;
            }
            board = next;
        }

        positions.push(board);
    }

    Ok(positions)
}

pub struct PositionResult {
    pub notation: String,
    pub best_move: Option<Square>,
    pub score: Score,
    pub nodes_searched: usize,
    pub cutoffs: usize,
    pub time_taken: Duration,
}

impl PositionResult {
    pub fn nodes_per_second(&self) -> f64 {
        let seconds = self.time_taken.as_secs_f64();
        if seconds == 0.0 {
            0.0
        } else {
            self.nodes_searched as f64 / seconds
        }
    }
}

pub struct BenchmarkReport {
    pub depth: u8,
    pub parallel: bool,
    pub wall_time: Duration,
    pub results: Vec<PositionResult>,
}

impl BenchmarkReport {
    pub fn total_nodes(&self) -> usize {
        self.results.iter().map(|result| result.nodes_searched).sum()
    }

    pub fn total_cutoffs(&self) -> usize {
        self.results.iter().map(|result| result.cutoffs).sum()
    }

    /// Time spent inside the searches, summed over positions.
    pub fn search_time(&self) -> Duration {
        self.results.iter().map(|result| result.time_taken).sum()
    }

    pub fn average_nodes_per_second(&self) -> f64 {
        let seconds = self.wall_time.as_secs_f64();
        if seconds == 0.0 {
            0.0
        } else {
            self.total_nodes() as f64 / seconds
        }
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(
            f,
            "Alpha-Beta Search Benchmark (depth: {}, parallel: {})",
            self.depth, self.parallel
        )?;
        writeln!(f, "{}", "=".repeat(70))?;

        for result in &self.results {
            let best_move = result
                .best_move
                .map(|square| square.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(f, "\nPosition: {}", result.notation)?;
            writeln!(f, "  Best move: {} (score: {:+})", best_move, result.score)?;
            writeln!(
                f,
                "  Nodes: {:>10} | Cutoffs: {:>8} | Time: {:>6.3}s | Speed: {:>8.0}k nodes/s",
                format_number(result.nodes_searched),
                format_number(result.cutoffs),
                result.time_taken.as_secs_f64(),
                result.nodes_per_second() / 1000.0
            )?;
        }

        writeln!(f, "\n{}", "=".repeat(70))?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{}", "-".repeat(70))?;
        writeln!(f, "  Positions:      {:>12}", self.results.len())?;
        writeln!(f, "  Total nodes:    {:>12}", format_number(self.total_nodes()))?;
        writeln!(
            f,
            "  Total cutoffs:  {:>12}",
            format_number(self.total_cutoffs())
        )?;
        writeln!(
            f,
            "  Search time:    {:>12.3}s",
            self.search_time().as_secs_f64()
        )?;
        writeln!(f, "  Wall time:      {:>12.3}s", self.wall_time.as_secs_f64())?;
        writeln!(
            f,
            "  Avg speed:      {:>12.0}k nodes/s",
            self.average_nodes_per_second() / 1000.0
        )?;
        write!(f, "{}", "=".repeat(70))
    }
}

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn bench_position(config: &StrategyConfig, board: &Board) -> Result<PositionResult, EngineError> {
    let mut context = SearchContext::new(config.max_depth());

    let start = Instant::now();
    let result = search_root(&mut context, board, config)
        .map_err(|error| EngineError::SearchError { error })?;
    let time_taken = start.elapsed();

    Ok(PositionResult {
        notation: to_notation(board),
        best_move: result.best_move().copied(),
        score: result.score(),
        nodes_searched: context.searched_position_count(),
        cutoffs: context.cutoff_count(),
        time_taken,
    })
}

/// Searches `positions` random positions built from `seed` with `config`.
/// With `parallel` set the positions are spread over the rayon pool; each
/// search still runs on one thread with its own context.
pub fn run_search_benchmark(
    config: &StrategyConfig,
    positions: usize,
    seed: u64,
    parallel: bool,
) -> Result<BenchmarkReport, EngineError> {
    let boards =
        random_positions(positions, seed).map_err(|error| EngineError::BoardError { error })?;
    debug!(
        "benchmarking {} positions at depth {} (seed {})",
        boards.len(),
        config.max_depth(),
        seed
    );

    let start = Instant::now();
    let results: Result<Vec<PositionResult>, EngineError> = if parallel {
        boards
            .par_iter()
            .map(|board| bench_position(config, board))
            .collect()
    } else {
        boards
            .iter()
            .map(|board| bench_position(config, board))
            .collect()
    };
    let wall_time = start.elapsed();

    Ok(BenchmarkReport {
        depth: config.max_depth(),
        parallel,
        wall_time,
        results: results?,
    })
}
