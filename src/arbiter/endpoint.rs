//! Bot endpoints: a line-oriented channel to one bot, with a bounded read

use anyhow::{bail, Context, Result};
use std::{
    io::{BufRead, BufReader, Write},
    process::{Child, ChildStdin, Command, Stdio},
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};
use tracing::{debug, warn};

use crate::core::Player;

/// Outcome of waiting for a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Line(String),
    Timeout,
}

/// How long `destroy` waits for the reader thread to see end of stream
const READER_GRACE: Duration = Duration::from_millis(200);

/// What the match controller needs from a bot
pub trait Endpoint {
    /// Human-readable description for the transcript banner
    fn name(&self) -> &str;

    /// Write one line and flush it
    fn send(&mut self, line: &str) -> Result<()>;

    /// Wait up to `timeout` for one full line. Errors mean the stream is gone.
    fn recv(&mut self, timeout: Duration) -> Result<Response>;

    /// Release everything the endpoint holds. Safe to call more than once.
    fn destroy(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointState {
    Created,
    Running,
    Destroyed,
}

/// A bot running as a child process, talking over its stdin and stdout
pub struct BotProcess {
    name: String,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    lines: Option<Receiver<std::io::Result<String>>>,
    reader: Option<JoinHandle<()>>,
    state: EndpointState,
}

impl BotProcess {
    /// Launch `command` (split on whitespace) with the player number appended
    pub fn spawn(command: &str, player: Player) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .with_context(|| format!("Empty command for {}", player))?;

        let mut child = Command::new(program)
            .args(parts)
            .arg(player.number().to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to launch {} bot: {}", player, command))?;

        let stdin = child.stdin.take().context("Bot stdin not captured")?;
        let stdout = child.stdout.take().context("Bot stdout not captured")?;

        // One line in flight at most; the reader blocks until it is taken.
        let (tx, rx) = mpsc::sync_channel(1);
        let reader = thread::Builder::new()
            .name(format!("{}-reader", player))
            .spawn(move || {
                for line in BufReader::new(stdout).lines() {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            })
            .context("Failed to start bot reader thread")?;

        debug!(%player, pid = child.id(), command, "bot launched");

        Ok(Self {
            name: format!("{} ({})", player, command),
            child: Some(child),
            stdin: Some(stdin),
            lines: Some(rx),
            reader: Some(reader),
            state: EndpointState::Created,
        })
    }

    pub fn state(&self) -> EndpointState {
        self.state
    }

    /// Join the reader thread once the killed bot's stdout reaches end of
    /// stream. A pipe still held open by a descendant of the bot leaves the
    /// thread blocked; it is detached after `READER_GRACE`. Returns whether
    /// the thread was joined.
    fn stop_reader(&mut self) -> bool {
        let Some(reader) = self.reader.take() else {
            return true;
        };

        let deadline = Instant::now() + READER_GRACE;
        while !reader.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }

        if !reader.is_finished() {
            debug!(name = %self.name, "bot output still open, detaching reader");
            return false;
        }
        if reader.join().is_err() {
            warn!(name = %self.name, "bot reader panicked");
        }
        true
    }

    fn ensure_live(&mut self) -> Result<()> {
        if self.state == EndpointState::Destroyed {
            bail!("{} has been destroyed", self.name);
        }
        self.state = EndpointState::Running;
        Ok(())
    }
}

impl Endpoint for BotProcess {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&mut self, line: &str) -> Result<()> {
        self.ensure_live()?;
        let stdin = self.stdin.as_mut().context("Bot stdin closed")?;

        writeln!(stdin, "{}", line).context("Failed to write to bot")?;
        stdin.flush().context("Failed to flush bot input")?;
        Ok(())
    }

    fn recv(&mut self, timeout: Duration) -> Result<Response> {
        self.ensure_live()?;
        let lines = self.lines.as_ref().context("Bot output closed")?;

        match lines.recv_timeout(timeout) {
            Ok(Ok(line)) => Ok(Response::Line(line)),
            Ok(Err(err)) => Err(err).context("Failed to read from bot"),
            Err(RecvTimeoutError::Timeout) => Ok(Response::Timeout),
            Err(RecvTimeoutError::Disconnected) => bail!("bot closed its output"),
        }
    }

    fn destroy(&mut self) {
        if self.state == EndpointState::Destroyed {
            return;
        }
        self.state = EndpointState::Destroyed;

        // Dropping the receiver stops the reader once its pending read returns.
        self.lines = None;
        self.stdin = None;

        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.kill() {
                debug!(name = %self.name, %err, "bot already exited");
            }
            match child.wait() {
                Ok(status) => debug!(name = %self.name, %status, "bot stopped"),
                Err(err) => warn!(name = %self.name, %err, "failed to reap bot"),
            }
        }

        self.stop_reader();
    }
}

impl Drop for BotProcess {
    fn drop(&mut self) {
        self.destroy();
    }
}
