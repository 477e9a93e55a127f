//! Per-game implementations of [Heuristic](crate::ai::minimax::Heuristic).
pub mod connect4;
