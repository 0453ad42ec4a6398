//! Evaluate command - print the static score of a position.

use reversi::board::Board;
use reversi::reversi_search::evaluate_position;
use structopt::StructOpt;

use super::util::StrategyArgs;
use super::Command;

#[derive(StructOpt)]
pub struct EvaluateArgs {
    #[structopt(flatten)]
    pub strategy: StrategyArgs,
    #[structopt(long, default_value = "8/8/8/3WB3/3BW3/8/8/8 b")]
    pub position: Board,
}

impl Command for EvaluateArgs {
    fn execute(self) {
        let config = self.strategy.config();
        let evaluator = config.evaluator();
        let board = &self.position;

        println!("{}", board);
        println!("phase:      {:?}", evaluator.phase(board));
        println!("positional: {:+}", evaluator.positional_differential(board));
        println!("material:   {:+}", evaluator.material_differential(board));
        println!("score:      {:+}", evaluate_position(&config, board));
    }
}
