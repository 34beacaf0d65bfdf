//! Compact board notation: `r,b,t` for each pit from 1 to 16 joined by `/`,
//! then a space and both scores as `p1|p2`.

use anyhow::{anyhow, ensure, Context, Result};

use super::{
    board::Board,
    color::Seeds,
    pit::{Pit, NUM_PITS},
    player::Player,
};

impl Board {
    pub fn to_fen(&self) -> String {
        let pits = Pit::all()
            .map(|pit| {
                let seeds = self.seeds(pit);
                seeds
                    .counts
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{} {}|{}",
            pits,
            self.captured(Player::P1),
            self.captured(Player::P2)
        )
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = fen.split_whitespace();
        let pits = parts.next().context("Missing pits in board notation")?;
        let scores = parts.next().context("Missing scores in board notation")?;
        ensure!(parts.next().is_none(), "Trailing data in board notation");

        let mut board = Board::empty();

        let pit_fields = pits.split('/').collect::<Vec<_>>();
        ensure!(
            pit_fields.len() == NUM_PITS as usize,
            "Expected {} pits, found {}",
            NUM_PITS,
            pit_fields.len()
        );

        for (pit, field) in Pit::all().zip(pit_fields) {
            let counts = field
                .split(',')
                .map(|c| c.parse::<u32>().with_context(|| format!("Invalid seed count in pit {}", pit)))
                .collect::<Result<Vec<_>>>()?;
            let [red, blue, transparent]: [u32; 3] = counts
                .try_into()
                .map_err(|_| anyhow!("Pit {} needs exactly three counts", pit))?;
            board.set(pit, Seeds::new(red, blue, transparent));
        }

        let (p1, p2) = scores.split_once('|').context("Invalid scores")?;
        board.add_captured(Player::P1, p1.parse().context("Invalid score for Player1")?);
        board.add_captured(Player::P2, p2.parse().context("Invalid score for Player2")?);

        Ok(board)
    }
}
