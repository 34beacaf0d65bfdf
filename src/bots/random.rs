//! Reference bot: plays a uniformly random legal move

use anyhow::{Context, Result};
use rand::{seq::SliceRandom, Rng};

use crate::{
    arbiter::protocol::{PASS_TOKENS, START},
    core::{Board, Move, Player},
};

pub struct RandomBot<R: Rng> {
    player: Player,
    board: Board,
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(player: Player, rng: R) -> Self {
        Self {
            player,
            board: Board::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handle one line from the arbiter. Returns the reply when the line
    /// hands the turn to this bot.
    pub fn handle(&mut self, line: &str) -> Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if line.eq_ignore_ascii_case(START) {
            self.board = Board::new();
            return match self.player {
                Player::P1 => self.play().map(Some),
                Player::P2 => Ok(None),
            };
        }

        let mv: Move = line
            .parse()
            .with_context(|| format!("Unreadable opponent move {}", line))?;
        self.board
            .apply(&mv, !self.player)
            .with_context(|| format!("Opponent move {} does not fit the board", line))?;

        self.play().map(Some)
    }

    fn play(&mut self) -> Result<String> {
        let moves = self.board.legal_moves(self.player);
        match moves.choose(&mut self.rng) {
            Some(mv) => {
                self.board
                    .apply(mv, self.player)
                    .with_context(|| format!("Own move {} does not fit the board", mv))?;
                Ok(mv.to_string())
            }
            None => Ok(PASS_TOKENS[0].to_string()),
        }
    }
}
