//! Best move command - search for the best move from a position.

use reversi::board::Board;
use reversi::game::engine::{Engine, EngineConfig};
use structopt::StructOpt;

use super::util::StrategyArgs;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(flatten)]
    pub strategy: StrategyArgs,
    #[structopt(long, default_value = "8/8/8/3WB3/3BW3/8/8/8 b")]
    pub position: Board,
    /// Print the position and search statistics along with the move
    #[structopt(short, long)]
    pub verbose: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = EngineConfig {
            strategy: self.strategy.config(),
            starting_position: self.position,
        };
        let mut engine = Engine::with_config(config);

        if engine.valid_moves().is_empty() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.best_move() {
            Ok(best_move) => {
                if self.verbose {
                    let stats = engine.search_stats();
                    println!("{}", engine.board());
                    println!(
                        "depth {}: {} positions, {} cutoffs, score {:?} in {:?}",
                        stats.depth,
                        stats.positions_searched,
                        stats.cutoffs,
                        stats.last_score,
                        stats.last_search_duration
                    );
                }
                println!("{}", best_move);
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
