//! ID types for leagues, players, and stat categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for league IDs.
///
/// League IDs come from the stats backend as opaque strings (they key the
/// scoring-rules document), so the wrapper holds a `String` rather than a
/// numeric value.
///
/// # Examples
///
/// ```rust
/// use ffl_research::LeagueId;
///
/// let league_id = LeagueId::new("pride-of-akron");
/// assert_eq!(league_id.as_str(), "pride-of-akron");
/// assert_eq!(league_id.to_string(), "pride-of-akron");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for stat category IDs.
///
/// Stat IDs arrive as string keys in the `rawStats` and scoring-rule maps
/// and are parsed to `u16` at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatId(pub u16);

impl StatId {
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_round_trip() {
        let id: LeagueId = "12345".parse().unwrap();
        assert_eq!(id.as_str(), "12345");
        assert_eq!(id, LeagueId::new("12345"));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(4034).to_string(), "4034");
    }

    #[test]
    fn test_stat_id_ordering() {
        assert!(StatId::new(5) < StatId::new(11));
    }
}
