//! Move validation, sowing and captures

use anyhow::{ensure, Result};

use super::{
    board::Board,
    color::Color,
    moves::Move,
    pit::{Pit, NUM_PITS},
    player::Player,
};

/// What an accepted move did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Pit that received the final seed
    pub last: Pit,
    /// Pits emptied by the capture walk, starting at `last` and going backwards
    pub captured: Vec<Pit>,
    /// Seeds each captured pit held when it was taken, in walk order
    pub taken: Vec<u32>,
    /// Seeds added to the mover's score
    pub seeds: u32,
}

impl Board {
    /// Number of seeds `mv` would pick up, if it were legal for `player`
    pub fn check_move(&self, mv: &Move, player: Player) -> Result<u32> {
        let pit = mv.pit();
        ensure!(mv.routing() != Color::Transparent, "{} has no sowing colour", mv);
        ensure!(pit.belongs_to(player), "pit {} does not belong to {}", pit, player);

        let seeds = self.seeds(pit);
        let picked = match *mv {
            Move::Plain { color, .. } => seeds[color],
            Move::Transparent { designated, .. } => seeds[Color::Transparent] + seeds[designated],
        };
        ensure!(picked > 0, "no seeds to sow for {} in pit {}", mv, pit);

        Ok(picked)
    }

    pub fn is_legal(&self, mv: &Move, player: Player) -> bool {
        self.check_move(mv, player).is_ok()
    }

    /// Validate and play `mv` for `player`. A rejected move leaves the board untouched.
    pub fn apply(&mut self, mv: &Move, player: Player) -> Result<MoveReport> {
        self.check_move(mv, player)?;

        let source = mv.pit();
        let routing = mv.routing();
        let (transparent, colored, color) = match *mv {
            Move::Plain { color, .. } => (0, self.seeds_mut(source).take(color), color),
            Move::Transparent { designated, .. } => {
                let seeds = self.seeds_mut(source);
                (seeds.take(Color::Transparent), seeds.take(designated), designated)
            }
        };

        let sown = std::iter::repeat(Color::Transparent)
            .take(transparent as usize)
            .chain(std::iter::repeat(color).take(colored as usize));

        let mut current = source;
        for seed in sown {
            current = next_target(current, routing, player);
            self.seeds_mut(current)[seed] += 1;
        }

        let (captured, taken) = self.capture_from(current);
        let seeds = taken.iter().sum();
        self.add_captured(player, seeds);

        Ok(MoveReport {
            last: current,
            captured,
            taken,
            seeds,
        })
    }

    /// Walk backwards from `last`, taking every pit holding exactly two or three
    /// seeds. The mover's own pits are not exempt.
    fn capture_from(&mut self, last: Pit) -> (Vec<Pit>, Vec<u32>) {
        let mut captured = Vec::new();
        let mut taken = Vec::new();
        let mut current = last;

        for _ in 0..NUM_PITS {
            let total = self.seeds(current).total();
            if total != 2 && total != 3 {
                break;
            }
            taken.push(self.seeds_mut(current).clear());
            captured.push(current);
            current = current.prev();
        }

        (captured, taken)
    }
}

/// Next pit to receive a seed. Red routing visits every pit; blue routing
/// only the opponent's.
fn next_target(current: Pit, routing: Color, player: Player) -> Pit {
    let mut next = current.next();
    if routing == Color::Blue {
        while next.belongs_to(player) {
            next = next.next();
        }
    }
    next
}
