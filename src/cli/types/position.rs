//! Fantasy football position types and utilities.

use crate::error::FflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// Players returned by the stats API carry a free-form position string; this
/// enum is the canonical set the research views filter on.
///
/// # Examples
///
/// ```rust
/// use ffl_research::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// Whether a raw API position string names this position.
    ///
    /// Comparison goes through `FromStr` so spelling variants like
    /// "D/ST" and "dst" match.
    pub fn matches(&self, raw: &str) -> bool {
        Position::from_str(raw).map(|p| p == *self).unwrap_or(false)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "D/ST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DST),
            _ => Err(FflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// Position filter for the player views.
///
/// `All` is the unfiltered state; the stats API spells it "ALL" in the
/// `position` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionFilter {
    #[default]
    All,
    Only(Position),
}

impl PositionFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, PositionFilter::All)
    }

    /// Whether a player with this raw position string passes the filter.
    pub fn matches(&self, raw_position: &str) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(p) => p.matches(raw_position),
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFilter::All => write!(f, "ALL"),
            PositionFilter::Only(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for PositionFilter {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(PositionFilter::All)
        } else {
            Ok(PositionFilter::Only(s.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_round_trip() {
        assert_eq!("qb".parse::<Position>().unwrap(), Position::QB);
        assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DST);
        assert_eq!("DEF".parse::<Position>().unwrap(), Position::DST);
        assert_eq!(Position::DST.to_string(), "D/ST");
        assert!("LS".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_matches_spelling_variants() {
        assert!(Position::DST.matches("dst"));
        assert!(Position::DST.matches("D/ST"));
        assert!(!Position::DST.matches("QB"));
        assert!(!Position::QB.matches(""));
    }

    #[test]
    fn test_filter_all_accepts_everything() {
        let all: PositionFilter = "ALL".parse().unwrap();
        assert!(all.is_all());
        assert!(all.matches("QB"));
        assert!(all.matches("anything"));
        assert_eq!(all.to_string(), "ALL");
    }

    #[test]
    fn test_filter_all_is_case_insensitive() {
        assert!("all".parse::<PositionFilter>().unwrap().is_all());
        assert!("All".parse::<PositionFilter>().unwrap().is_all());
    }

    #[test]
    fn test_filter_only_matches_one_position() {
        let wr: PositionFilter = "WR".parse().unwrap();
        assert!(wr.matches("WR"));
        assert!(wr.matches("wr"));
        assert!(!wr.matches("RB"));
    }
}
