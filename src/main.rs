use anyhow::Result;
use awale::{
    arbiter::MatchOptions,
    core::PlayerArray,
    Arbiter,
};
use clap::Parser;
use std::{io, time::Duration};
use tracing::Level;

/// Referee a match between two bots speaking the line protocol
#[derive(Debug, Parser)]
#[command(name = "arbiter", version)]
struct Args {
    /// Command launching the first bot (odd pits); `1` is appended
    #[arg(long, env = "ARBITER_PLAYER1", default_value = "python python_version/bot.py")]
    player1: String,

    /// Command launching the second bot (even pits); `2` is appended
    #[arg(long, env = "ARBITER_PLAYER2", default_value = "c_version/bot")]
    player2: String,

    /// Time allowed per move, in milliseconds
    #[arg(long, default_value_t = 3000)]
    timeout_ms: u64,

    /// Moves after which the match is scored as it stands
    #[arg(long, default_value_t = 400)]
    max_moves: u32,

    /// Print the board after every move
    #[arg(long)]
    show_board: bool,

    /// Extra option overrides as name=value
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,

    /// Diagnostics written to stderr at this level and above
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .init();

    let mut options = MatchOptions::new(
        Duration::from_millis(args.timeout_ms),
        args.max_moves,
        args.show_board,
    );
    for assignment in &args.overrides {
        options.apply_override(assignment)?;
    }

    let commands = PlayerArray::new(args.player1, args.player2);
    let mut arbiter = Arbiter::launch(&commands, options, io::stdout().lock())?;
    arbiter.run()?;

    Ok(())
}
