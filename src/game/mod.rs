pub mod benchmark;
pub mod engine;
