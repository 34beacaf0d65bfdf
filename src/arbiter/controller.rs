//! Runs one match between two endpoints and writes the transcript

use anyhow::Result;
use std::{
    fmt,
    io::Write,
    time::{Duration, Instant},
};
use tracing::{debug, info, warn};

use super::{
    endpoint::{BotProcess, Endpoint, Response},
    options::MatchOptions,
    protocol::{parse_reply, Reply, START},
};
use crate::core::{Board, Move, MoveReport, Player, PlayerArray, Verdict};

/// Why a bot lost by forfeit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disqualification {
    Timeout,
    InvalidMove(String),
    StreamFailure(String),
}

impl fmt::Display for Disqualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disqualification::Timeout => write!(f, "timeout"),
            Disqualification::InvalidMove(token) => write!(f, "invalid move: {}", token),
            Disqualification::StreamFailure(err) => write!(f, "stream failure: {}", err),
        }
    }
}

/// How the match stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEnd {
    GameOver,
    Pass(Player),
    MoveCap,
    Disqualified(Player, Disqualification),
}

#[derive(Debug, Clone)]
pub struct PlayedMove {
    pub player: Player,
    pub mv: Move,
    /// Token as the bot sent it, trimmed
    pub token: String,
    /// Time the bot took to answer
    pub elapsed: Duration,
    pub report: MoveReport,
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub end: MatchEnd,
    pub verdict: Verdict,
    pub moves: u32,
    pub scores: PlayerArray<u32>,
    pub history: Vec<PlayedMove>,
    pub board: Board,
}

/// Referee for a single match. Owns both endpoints and the board.
pub struct Arbiter<E: Endpoint, W: Write> {
    options: MatchOptions,
    board: Board,
    bots: PlayerArray<E>,
    history: Vec<PlayedMove>,
    out: W,
}

impl<W: Write> Arbiter<BotProcess, W> {
    /// Launch both bot commands. A bot that did start is torn down if the
    /// other one fails.
    pub fn launch(commands: &PlayerArray<String>, options: MatchOptions, out: W) -> Result<Self> {
        let p1 = BotProcess::spawn(&commands[Player::P1], Player::P1)?;
        let p2 = BotProcess::spawn(&commands[Player::P2], Player::P2)?;
        Ok(Self::new(PlayerArray::new(p1, p2), options, out))
    }
}

impl<E: Endpoint, W: Write> Arbiter<E, W> {
    pub fn new(bots: PlayerArray<E>, options: MatchOptions, out: W) -> Self {
        Self {
            options,
            board: Board::new(),
            bots,
            history: Vec::new(),
            out,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bots(&self) -> &PlayerArray<E> {
        &self.bots
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Play the match to the end, write the result and destroy both endpoints.
    /// Bot failures end the match by disqualification; only transcript write
    /// failures are returned as errors.
    pub fn run(&mut self) -> Result<MatchReport> {
        let result = self.play().and_then(|end| self.finish(end));

        for bot in self.bots.iter_mut() {
            bot.destroy();
        }

        result
    }

    fn play(&mut self) -> Result<MatchEnd> {
        writeln!(self.out, "=== MATCH START ===")?;
        writeln!(
            self.out,
            "{} vs {}",
            self.bots[Player::P1].name(),
            self.bots[Player::P2].name()
        )?;
        writeln!(self.out)?;
        info!(
            timeout_ms = self.options.move_timeout.as_millis() as u64,
            max_moves = self.options.max_moves,
            "match started"
        );

        for player in Player::all() {
            if let Err(err) = self.bots[player].send(START) {
                return Ok(stream_failure(player, err));
            }
        }

        let mut current = Player::P1;

        while !self.board.is_game_over() && self.moves() < self.options.max_moves {
            let started = Instant::now();
            let line = match self.bots[current].recv(self.options.move_timeout) {
                Ok(Response::Line(line)) => line,
                Ok(Response::Timeout) => {
                    return Ok(MatchEnd::Disqualified(current, Disqualification::Timeout))
                }
                Err(err) => return Ok(stream_failure(current, err)),
            };
            let elapsed = started.elapsed();

            let (token, parsed) = match parse_reply(&line) {
                Reply::Pass(token) => {
                    writeln!(self.out, "{} -> {} (no move available)", current, token)?;
                    return Ok(MatchEnd::Pass(current));
                }
                Reply::Move(token, parsed) => (token, parsed),
            };
            writeln!(self.out, "{} -> {}", current, token)?;

            let played = parsed
                .map_err(anyhow::Error::from)
                .and_then(|mv| Ok((mv, self.board.apply(&mv, current)?)));
            let (mv, report) = match played {
                Ok(played) => played,
                Err(err) => {
                    debug!(player = %current, token = %token, "rejected move: {:#}", err);
                    return Ok(MatchEnd::Disqualified(
                        current,
                        Disqualification::InvalidMove(token),
                    ));
                }
            };

            debug!(
                player = %current,
                token = %token,
                last = %report.last,
                captured = report.seeds,
                elapsed_ms = elapsed.as_millis() as u64,
                board = %self.board.to_fen(),
                "move applied"
            );
            self.history.push(PlayedMove {
                player: current,
                mv,
                token: token.clone(),
                elapsed,
                report,
            });

            if self.options.show_board {
                write!(self.out, "{}", self.board)?;
            }

            if let Err(err) = self.bots[!current].send(&token) {
                return Ok(stream_failure(!current, err));
            }

            if self.board.is_game_over() {
                return Ok(MatchEnd::GameOver);
            }

            current = !current;
        }

        Ok(if self.board.is_game_over() {
            MatchEnd::GameOver
        } else {
            MatchEnd::MoveCap
        })
    }

    fn finish(&mut self, end: MatchEnd) -> Result<MatchReport> {
        let verdict = match &end {
            MatchEnd::Disqualified(player, reason) => {
                warn!(%player, %reason, "bot disqualified");
                writeln!(self.out, "RESULT {} disqualified ({})", player, reason)?;
                writeln!(self.out, "{} wins by disqualification!", !*player)?;
                Verdict::Winner(!*player)
            }
            _ => {
                let verdict = self.board.verdict();
                writeln!(self.out)?;
                writeln!(self.out, "=== MATCH END ===")?;
                writeln!(self.out, "Moves played: {}", self.moves())?;
                for player in Player::all() {
                    writeln!(self.out, "Score {}: {}", player, self.board.captured(player))?;
                }
                writeln!(self.out, "Final position: {}", self.board.to_fen())?;
                writeln!(self.out, "RESULT {}", verdict)?;
                verdict
            }
        };
        self.out.flush()?;

        info!(moves = self.moves(), ?end, ?verdict, "match finished");

        Ok(MatchReport {
            end,
            verdict,
            moves: self.moves(),
            scores: self.board.captured,
            history: self.history.clone(),
            board: self.board.clone(),
        })
    }

    fn moves(&self) -> u32 {
        self.history.len() as u32
    }
}

fn stream_failure(player: Player, err: anyhow::Error) -> MatchEnd {
    MatchEnd::Disqualified(player, Disqualification::StreamFailure(format!("{:#}", err)))
}
