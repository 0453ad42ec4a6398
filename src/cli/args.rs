//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    benchmark::BenchmarkArgs, best_move::BestMoveArgs, evaluate::EvaluateArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "reversi",
    about = "A Reversi move-selection engine using alpha-beta search over a positional evaluator"
)]
pub enum Reversi {
    #[structopt(
        name = "best-move",
        about = "Search for the best move from a position given in board notation with `--position` (default: the standard opening). The strategy is chosen with `--strategy basis|group3` (default: basis) and can be tuned with `--depth`, `--phase-threshold`, `--material-scale` and `--move-ordering`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "evaluate",
        about = "Print the static evaluation of a position given with `--position`, broken down into positional and material differentials and the game phase."
    )]
    Evaluate(EvaluateArgs),
    #[structopt(
        name = "benchmark",
        about = "Time the search over `--positions` (default: 8) positions built by seeded random play (`--seed`, default: 1). Add `--parallel` to search the positions on all cores."
    )]
    Benchmark(BenchmarkArgs),
}

impl crate::cli::commands::Command for Reversi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            BestMove(cmd),
            Evaluate(cmd),
            Benchmark(cmd),
        }
    }
}
