//! Benchmark command - quick search performance testing.

use reversi::game::benchmark::run_search_benchmark;
use structopt::StructOpt;

use super::util::StrategyArgs;
use super::Command;

#[derive(StructOpt)]
pub struct BenchmarkArgs {
    #[structopt(flatten)]
    pub strategy: StrategyArgs,
    #[structopt(long, default_value = "8")]
    pub positions: usize,
    #[structopt(long, default_value = "1")]
    pub seed: u64,
    #[structopt(short, long)]
    pub parallel: bool,
}

impl Command for BenchmarkArgs {
    fn execute(self) {
        let config = self.strategy.config();
        match run_search_benchmark(&config, self.positions, self.seed, self.parallel) {
            Ok(report) => println!("{}", report),
            Err(err) => eprintln!("Benchmark failed: {}", err),
        }
    }
}
