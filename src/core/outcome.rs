//! End-of-game detection and winner determination

use std::fmt;

use super::{board::Board, player::Player};

/// Score that wins outright
pub const WINNING_SCORE: u32 = 49;
/// Once both players reach this score the game stops
pub const SHARED_SCORE: u32 = 40;
/// The game stops when fewer seeds than this remain on the board
pub const MIN_SEEDS_ON_BOARD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(Player),
    Draw,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Winner(player) => write!(f, "{} WINS!", player),
            Verdict::Draw => write!(f, "DRAW!"),
        }
    }
}

impl Board {
    pub fn is_game_over(&self) -> bool {
        let (p1, p2) = (self.captured(Player::P1), self.captured(Player::P2));

        p1 >= WINNING_SCORE
            || p2 >= WINNING_SCORE
            || (p1 >= SHARED_SCORE && p2 >= SHARED_SCORE)
            || self.seeds_on_board() < MIN_SEEDS_ON_BOARD
    }

    /// Result by score. Meaningful whenever the game stops, whether or not
    /// `is_game_over` holds.
    pub fn verdict(&self) -> Verdict {
        let (p1, p2) = (self.captured(Player::P1), self.captured(Player::P2));

        if p1 >= WINNING_SCORE {
            Verdict::Winner(Player::P1)
        } else if p2 >= WINNING_SCORE {
            Verdict::Winner(Player::P2)
        } else if p1 > p2 {
            Verdict::Winner(Player::P1)
        } else if p2 > p1 {
            Verdict::Winner(Player::P2)
        } else {
            Verdict::Draw
        }
    }
}
