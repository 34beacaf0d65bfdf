//! Seed colours and per-colour counts

use anyhow::{anyhow, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::ops::{Index, IndexMut};

pub const NUM_COLORS: usize = 3;

/// Colour of a seed. The discriminant order fixes the layout of `Seeds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Color {
    Red,
    Blue,
    Transparent,
}

impl Color {
    pub fn all() -> [Color; NUM_COLORS] {
        [Color::Red, Color::Blue, Color::Transparent]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid color index: {}", idx))
    }

    /// Letter used in move tokens
    pub fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Transparent => 'T',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'T' => Some(Color::Transparent),
            _ => None,
        }
    }
}

/// Seed counts of one pit, indexed by colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Seeds {
    pub counts: [u32; NUM_COLORS],
}

impl Seeds {
    pub const fn new(red: u32, blue: u32, transparent: u32) -> Self {
        Self { counts: [red, blue, transparent] }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Empty the pit, returning what it held
    pub fn clear(&mut self) -> u32 {
        let total = self.total();
        self.counts = [0; NUM_COLORS];
        total
    }

    /// Remove every seed of `color`, returning how many there were
    pub fn take(&mut self, color: Color) -> u32 {
        std::mem::take(&mut self.counts[color.index()])
    }
}

impl Index<Color> for Seeds {
    type Output = u32;

    fn index(&self, color: Color) -> &Self::Output {
        &self.counts[color.index()]
    }
}

impl IndexMut<Color> for Seeds {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.counts[color.index()]
    }
}
