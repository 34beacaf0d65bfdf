//! Core game representations and rules

pub mod board;
pub mod color;
pub mod display;
pub mod fen;
pub mod movegen;
pub mod moves;
pub mod outcome;
pub mod pit;
pub mod player;
pub mod rules;

pub use board::{Board, TOTAL_SEEDS};
pub use color::{Color, Seeds};
pub use moves::{Move, ParseMoveError};
pub use outcome::Verdict;
pub use pit::Pit;
pub use player::{Player, PlayerArray};
pub use rules::MoveReport;
