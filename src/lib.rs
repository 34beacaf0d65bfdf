//! Awale arbiter - referee for the 16-pit three-colour sowing game

pub mod arbiter;
pub mod bots;
pub mod core;
pub mod utils;

// Re-export commonly used items
pub use crate::arbiter::{Arbiter, MatchOptions, MatchReport};
pub use crate::core::{Board, Move, Player};
