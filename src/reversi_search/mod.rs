//! Reversi-specific implementation of the alpha-beta search traits.

pub mod implementation;
mod move_orderer;
mod strategy;

#[cfg(test)]
mod tests;

pub use implementation::{
    choose_move, choose_moves_parallel, evaluate_position, search_best_move, search_root,
    ReversiMoveGenerator,
};
pub use move_orderer::PositionalMoveOrderer;
pub use strategy::{Strategy, StrategyConfig, UnknownStrategyError};
