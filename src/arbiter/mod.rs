//! Match refereeing: bot endpoints, the line protocol and the match loop

mod controller;
pub mod endpoint;
mod options;
pub mod protocol;

pub use controller::{Arbiter, Disqualification, MatchEnd, MatchReport, PlayedMove};
pub use endpoint::{BotProcess, Endpoint, EndpointState, Response};
pub use options::MatchOptions;
