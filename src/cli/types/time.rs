//! Time-related types for fantasy football seasons and weeks.

use crate::error::FflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .map(Self)
            .map_err(|_| FflError::InvalidSeason {
                season: s.to_string(),
            })
    }
}

/// A scoring window: a single week number or the season total.
///
/// The stats API takes `week=total` for season aggregates, so the total case
/// is first-class rather than a magic week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Week {
    /// Season-to-date totals.
    #[default]
    Total,
    /// A single week (1..=18).
    Num(u16),
}

impl Week {
    pub fn new(week: u16) -> Self {
        Self::Num(week)
    }

    pub fn is_total(&self) -> bool {
        matches!(self, Week::Total)
    }

    /// The value sent in the `week` query parameter.
    pub fn as_param(&self) -> String {
        match self {
            Week::Total => "total".to_string(),
            Week::Num(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Week::Total => write!(f, "total"),
            Week::Num(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Week {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("total") {
            return Ok(Week::Total);
        }
        match s.parse::<u16>() {
            Ok(n) if n >= 1 => Ok(Week::Num(n)),
            _ => Err(FflError::InvalidWeek {
                week: s.to_string(),
            }),
        }
    }
}
