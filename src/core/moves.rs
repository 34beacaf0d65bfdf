//! Move tokens: `<pit>R`, `<pit>B`, `<pit>TR`, `<pit>TB`

use std::{fmt, str::FromStr};

use super::{color::Color, pit::Pit};

/// A sowing move. The pass sentinels are not moves; see `arbiter::protocol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Sow every seed of `color` from `pit`
    Plain { pit: Pit, color: Color },
    /// Sow every transparent seed of `pit`, then every seed of `designated`,
    /// routed as a `designated` move
    Transparent { pit: Pit, designated: Color },
}

impl Move {
    pub fn plain(pit: Pit, color: Color) -> Self {
        debug_assert!(color != Color::Transparent);
        Move::Plain { pit, color }
    }

    pub fn transparent(pit: Pit, designated: Color) -> Self {
        debug_assert!(designated != Color::Transparent);
        Move::Transparent { pit, designated }
    }

    pub fn pit(&self) -> Pit {
        match *self {
            Move::Plain { pit, .. } | Move::Transparent { pit, .. } => pit,
        }
    }

    /// Colour deciding where the sown seeds go
    pub fn routing(&self) -> Color {
        match *self {
            Move::Plain { color, .. } => color,
            Move::Transparent { designated, .. } => designated,
        }
    }

    /// Every move that can be played from `pit`, in token order R, B, TR, TB
    pub fn all_from(pit: Pit) -> [Move; 4] {
        [
            Move::plain(pit, Color::Red),
            Move::plain(pit, Color::Blue),
            Move::transparent(pit, Color::Red),
            Move::transparent(pit, Color::Blue),
        ]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Plain { pit, color } => write!(f, "{}{}", pit, color.to_char()),
            Move::Transparent { pit, designated } => {
                write!(f, "{}T{}", pit, designated.to_char())
            }
        }
    }
}

/// Why a token is not a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    Empty,
    MissingPit,
    PitOutOfRange(String),
    InvalidSuffix(String),
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::Empty => write!(f, "empty move token"),
            ParseMoveError::MissingPit => write!(f, "move token has no pit number"),
            ParseMoveError::PitOutOfRange(digits) => write!(f, "pit {} is not in 1..=16", digits),
            ParseMoveError::InvalidSuffix(suffix) => {
                write!(f, "expected R, B, TR or TB after the pit, found {:?}", suffix)
            }
        }
    }
}

impl std::error::Error for ParseMoveError {}

fn designated_color(c: char) -> Option<Color> {
    match Color::from_char(c)? {
        Color::Transparent => None,
        color => Some(color),
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        if token.is_empty() {
            return Err(ParseMoveError::Empty);
        }

        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (digits, suffix) = token.split_at(split);
        if digits.is_empty() {
            return Err(ParseMoveError::MissingPit);
        }

        let mut chars = suffix.chars();
        let invalid = || ParseMoveError::InvalidSuffix(suffix.to_string());
        let shape = match (chars.next(), chars.next(), chars.next()) {
            (Some('T'), Some(c), None) => designated_color(c).map(|d| (true, d)),
            (Some(c), None, None) => designated_color(c).map(|d| (false, d)),
            _ => None,
        };
        let (transparent, color) = shape.ok_or_else(invalid)?;

        let pit = digits
            .parse::<u8>()
            .ok()
            .and_then(|n| Pit::new(n).ok())
            .ok_or_else(|| ParseMoveError::PitOutOfRange(digits.to_string()))?;

        Ok(if transparent {
            Move::transparent(pit, color)
        } else {
            Move::plain(pit, color)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pit(n: u8) -> Pit {
        Pit::new(n).unwrap()
    }

    #[test]
    fn test_parse_plain_and_transparent() {
        assert_eq!("3R".parse::<Move>(), Ok(Move::plain(pit(3), Color::Red)));
        assert_eq!("16b".parse::<Move>(), Ok(Move::plain(pit(16), Color::Blue)));
        assert_eq!(
            " 4tr ".parse::<Move>(),
            Ok(Move::transparent(pit(4), Color::Red))
        );
        assert_eq!("5TB".parse::<Move>().unwrap().routing(), Color::Blue);
    }

    #[test]
    fn test_parse_errors_are_structured() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert_eq!("TR".parse::<Move>(), Err(ParseMoveError::MissingPit));
        assert_eq!(
            "17B".parse::<Move>(),
            Err(ParseMoveError::PitOutOfRange("17".to_string()))
        );
        assert_eq!(
            "3TT".parse::<Move>(),
            Err(ParseMoveError::InvalidSuffix("TT".to_string()))
        );
        assert_eq!(
            "9".parse::<Move>(),
            Err(ParseMoveError::InvalidSuffix(String::new()))
        );
    }

    #[test]
    fn test_render_is_canonical() {
        for p in Pit::all() {
            for mv in Move::all_from(p) {
                let token = mv.to_string();
                assert_eq!(token.parse::<Move>(), Ok(mv));
            }
        }
        assert_eq!(Move::transparent(pit(12), Color::Blue).to_string(), "12TB");
    }
}
