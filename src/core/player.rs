use anyhow::{anyhow, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::ops::{Index, IndexMut, Not};
use std::str::FromStr;

/// One of the two seats at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn all() -> [Player; 2] {
        [Player::P1, Player::P2]
    }

    /// Zero-based index, used for `PlayerArray` storage
    pub fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }

    pub fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid player index: {}", idx))
    }

    /// Seat number as it appears on the wire and in bot arguments
    pub fn number(self) -> u8 {
        match self {
            Player::P1 => 1,
            Player::P2 => 2,
        }
    }

    pub fn opponent(self) -> Self {
        !self
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl FromStr for Player {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Player::P1),
            "2" => Ok(Player::P2),
            other => Err(anyhow!("Invalid player number: {}", other)),
        }
    }
}

/// Array indexed by player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerArray<T> {
    pub values: [T; 2],
}

impl<T> PlayerArray<T> {
    pub fn new(p1: T, p2: T) -> Self {
        Self { values: [p1, p2] }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut()
    }

    /// Mutable access to both entries at once, mover first
    pub fn pair_mut(&mut self, first: Player) -> (&mut T, &mut T) {
        let [p1, p2] = &mut self.values;
        match first {
            Player::P1 => (p1, p2),
            Player::P2 => (p2, p1),
        }
    }
}

impl<T> Index<Player> for PlayerArray<T> {
    type Output = T;

    fn index(&self, index: Player) -> &Self::Output {
        &self.values[index.index()]
    }
}

impl<T> IndexMut<Player> for PlayerArray<T> {
    fn index_mut(&mut self, index: Player) -> &mut Self::Output {
        &mut self.values[index.index()]
    }
}
