/// Configuration options for a match
use anyhow::{bail, Context, Result};
use std::time::Duration;

pub const DEFAULT_MOVE_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_MAX_MOVES: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Time a bot has to answer each turn
    pub move_timeout: Duration,
    /// Accepted moves after which the match stops and is scored
    pub max_moves: u32,
    /// Print the board to the transcript after every move
    pub show_board: bool,
}

impl MatchOptions {
    pub fn new(move_timeout: Duration, max_moves: u32, show_board: bool) -> Self {
        Self {
            move_timeout,
            max_moves,
            show_board,
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "timeout" => {
                let millis = value.parse().context("invalid timeout")?;
                self.move_timeout = Duration::from_millis(millis);
            }
            "maxmoves" => self.max_moves = value.parse().context("invalid maxmoves")?,
            "showboard" => self.show_board = value.parse().context("invalid showboard")?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }

    /// Apply a `name=value` override
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .split_once('=')
            .with_context(|| format!("expected name=value, got {}", assignment))?;
        self.set_option(name.trim(), value.trim())
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            move_timeout: DEFAULT_MOVE_TIMEOUT,
            max_moves: DEFAULT_MAX_MOVES,
            show_board: false,
        }
    }
}
