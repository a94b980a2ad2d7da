//! Type-safe wrappers and enums for fantasy football stats data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, StatId};
pub use position::{Position, PositionFilter};
pub use time::{Season, Week};
