use colored::Colorize;
use std::fmt;

use super::{
    board::Board,
    color::{Color, Seeds},
    pit::Pit,
    player::Player,
};

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player{}", self.number())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "{}", "Red".bright_red()),
            Color::Blue => write!(f, "{}", "Blue".bright_blue()),
            Color::Transparent => write!(f, "{}", "Transparent".white()),
        }
    }
}

impl fmt::Display for Seeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format!("R{:<2}", self[Color::Red]).bright_red(),
            format!("B{:<2}", self[Color::Blue]).bright_blue(),
            format!("T{:<2}", self[Color::Transparent]).white()
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Score {}: {} | Score {}: {}",
            Player::P1,
            self.captured(Player::P1),
            Player::P2,
            self.captured(Player::P2)
        )?;

        // two bands of eight pits, 1..=8 above 9..=16
        let pits = Pit::all().collect::<Vec<_>>();
        for band in pits.chunks(8) {
            writeln!(f, "{}", "─".repeat(8 * 15))?;
            for pit in band {
                write!(f, "{:<15}", format!("Pit {:>2} ({})", pit, pit.owner().number()))?;
            }
            writeln!(f)?;
            for pit in band {
                write!(f, "{}  ", self.seeds(*pit))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "─".repeat(8 * 15))?;

        Ok(())
    }
}
