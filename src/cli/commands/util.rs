//! Shared utilities for CLI commands.

use reversi::alpha_beta_searcher::Score;
use reversi::evaluate::MAX_MATERIAL_SCALE;
use reversi::reversi_search::{Strategy, StrategyConfig};
use structopt::StructOpt;

/// Strategy selection shared by every command. Unset overrides keep the
/// named strategy's values.
#[derive(StructOpt)]
pub struct StrategyArgs {
    #[structopt(long, default_value = "basis")]
    pub strategy: Strategy,
    #[structopt(short, long)]
    pub depth: Option<u8>,
    #[structopt(long)]
    pub phase_threshold: Option<u8>,
    #[structopt(long, parse(try_from_str = parse_material_scale))]
    pub material_scale: Option<Score>,
    #[structopt(long)]
    pub move_ordering: Option<bool>,
}

impl StrategyArgs {
    pub fn config(&self) -> StrategyConfig {
        let mut config = self.strategy.config();
        if let Some(depth) = self.depth {
            config = config.with_max_depth(depth);
        }
        if let Some(phase_threshold) = self.phase_threshold {
            config = config.with_phase_threshold(phase_threshold);
        }
        if let Some(material_scale) = self.material_scale {
            config = config.with_material_scale(material_scale);
        }
        if let Some(move_ordering) = self.move_ordering {
            config = config.with_move_ordering(move_ordering);
        }
        config
    }
}

fn parse_material_scale(value: &str) -> Result<Score, String> {
    let scale: Score = value.parse().map_err(|error| format!("{}", error))?;
    if (0..=MAX_MATERIAL_SCALE).contains(&scale) {
        Ok(scale)
    } else {
        Err(format!(
            "material scale must be between 0 and {}",
            MAX_MATERIAL_SCALE
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_scale_range() {
        assert_eq!(parse_material_scale("0"), Ok(0));
        assert_eq!(parse_material_scale("64"), Ok(64));
        assert!(parse_material_scale("65").is_err());
        assert!(parse_material_scale("-1").is_err());
        assert!(parse_material_scale("1000000000").is_err());
        assert!(parse_material_scale("many").is_err());
    }

    #[test]
    fn test_flag_rejects_out_of_range_scale() {
        let parsed = StrategyArgs::from_iter_safe(&["reversi", "--material-scale", "400000000"]);
        assert!(parsed.is_err());

        let args = StrategyArgs::from_iter_safe(&["reversi", "--material-scale", "2"]).unwrap();
        assert_eq!(args.config().material_scale(), 2);
    }
}
