//! Line protocol between the arbiter and the bots

use crate::core::{Move, ParseMoveError};

/// Sent to both bots before the first move
pub const START: &str = "START";

/// Replies a bot sends when it has nothing to play
pub const PASS_TOKENS: [&str; 2] = ["NOMOVE", "PASS"];

/// A bot's reply to its turn, once trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Pass(String),
    Move(String, Result<Move, ParseMoveError>),
}

pub fn is_pass(token: &str) -> bool {
    PASS_TOKENS
        .iter()
        .any(|pass| token.eq_ignore_ascii_case(pass))
}

pub fn parse_reply(line: &str) -> Reply {
    let token = line.trim();
    if is_pass(token) {
        Reply::Pass(token.to_string())
    } else {
        Reply::Move(token.to_string(), token.parse())
    }
}
