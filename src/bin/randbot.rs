use anyhow::{Context, Result};
use awale::{bots::RandomBot, utils::make_rng, Player};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let player: Player = std::env::args()
        .nth(1)
        .context("usage: randbot <1|2>")?
        .parse()?;
    let seed = std::env::var("RANDBOT_SEED")
        .ok()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("invalid RANDBOT_SEED")?;

    let mut bot = RandomBot::new(player, make_rng(seed));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;

        match bot.handle(&line) {
            Ok(Some(reply)) => {
                writeln!(stdout, "{}", reply)?;
                stdout.flush()?;
            }
            Ok(None) => {}
            Err(err) => eprintln!("randbot {}: {:#}", player, err),
        }
    }

    Ok(())
}
