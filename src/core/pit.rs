use anyhow::{ensure, Result};
use std::fmt;

use super::player::Player;

pub const NUM_PITS: u8 = 16;

/// A pit on the ring, numbered 1 through 16. Odd pits belong to
/// `Player::P1`, even pits to `Player::P2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pit(u8);

impl Pit {
    pub fn new(number: u8) -> Result<Self> {
        ensure!(
            (1..=NUM_PITS).contains(&number),
            "Pit out of range: {}",
            number
        );
        Ok(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position, used for board storage
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Clockwise successor; 16 wraps to 1
    pub fn next(self) -> Self {
        Self(self.0 % NUM_PITS + 1)
    }

    /// Counter-clockwise predecessor; 1 wraps to 16
    pub fn prev(self) -> Self {
        if self.0 == 1 {
            Self(NUM_PITS)
        } else {
            Self(self.0 - 1)
        }
    }

    pub fn owner(self) -> Player {
        if self.0 % 2 == 1 {
            Player::P1
        } else {
            Player::P2
        }
    }

    pub fn belongs_to(self, player: Player) -> bool {
        self.owner() == player
    }

    pub fn all() -> impl Iterator<Item = Pit> {
        (1..=NUM_PITS).map(Pit)
    }

    pub fn owned_by(player: Player) -> impl Iterator<Item = Pit> {
        Self::all().filter(move |pit| pit.belongs_to(player))
    }
}

impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
