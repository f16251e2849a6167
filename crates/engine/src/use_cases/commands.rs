//! Parsing of `room` content into commands.
//!
//! Matching is done on the lower-cased text. Chat keeps the original case.

use std::str::FromStr;

use pictureroom_domain::Direction;

const EXAMINE_PREFIX: &str = "/examine ";
const GO_PREFIX: &str = "/go ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `/look`
    Look,
    /// `/examine <item>`, item lower-cased.
    Examine(String),
    /// `/go <direction>`; `None` when the direction is missing or unknown.
    Go(Option<Direction>),
    /// Any other text starting with `/`.
    Unknown,
    /// Everything else, verbatim.
    Chat(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(content: &'a str) -> Self {
        let lower = content.to_lowercase();

        if lower == "/look" {
            return Command::Look;
        }
        if let Some(item) = lower.strip_prefix(EXAMINE_PREFIX) {
            return Command::Examine(item.to_string());
        }
        if lower == "/go" {
            return Command::Go(None);
        }
        if let Some(code) = lower.strip_prefix(GO_PREFIX) {
            return Command::Go(Direction::from_str(code).ok());
        }
        if lower.starts_with('/') {
            return Command::Unknown;
        }
        Command::Chat(content)
    }
}
