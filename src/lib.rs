pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod reversi_search;
