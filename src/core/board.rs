//! Board state: sixteen pits of three-colour seeds plus both capture scores

use super::{
    color::{Color, Seeds},
    pit::{Pit, NUM_PITS},
    player::{Player, PlayerArray},
};

pub const SEEDS_PER_COLOR: u32 = 2;
/// Seeds in play at the start; the sum of all pits and both scores never changes.
pub const TOTAL_SEEDS: u32 = SEEDS_PER_COLOR * 3 * NUM_PITS as u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub pits: [Seeds; NUM_PITS as usize],
    pub captured: PlayerArray<u32>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            pits: [Seeds::new(SEEDS_PER_COLOR, SEEDS_PER_COLOR, SEEDS_PER_COLOR);
                NUM_PITS as usize],
            captured: PlayerArray::new(0, 0),
        }
    }

    /// A board with every pit empty and no captures
    pub fn empty() -> Self {
        Self {
            pits: [Seeds::default(); NUM_PITS as usize],
            captured: PlayerArray::new(0, 0),
        }
    }

    pub fn seeds(&self, pit: Pit) -> &Seeds {
        &self.pits[pit.index()]
    }

    pub fn seeds_mut(&mut self, pit: Pit) -> &mut Seeds {
        &mut self.pits[pit.index()]
    }

    pub fn count(&self, pit: Pit, color: Color) -> u32 {
        self.seeds(pit)[color]
    }

    pub fn set(&mut self, pit: Pit, seeds: Seeds) {
        self.pits[pit.index()] = seeds;
    }

    pub fn captured(&self, player: Player) -> u32 {
        self.captured[player]
    }

    pub fn add_captured(&mut self, player: Player, seeds: u32) {
        self.captured[player] += seeds;
    }

    pub fn seeds_on_board(&self) -> u32 {
        self.pits.iter().map(Seeds::total).sum()
    }

    /// Seeds on the board plus both scores
    pub fn seeds_in_play(&self) -> u32 {
        self.seeds_on_board() + self.captured.iter().sum::<u32>()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
