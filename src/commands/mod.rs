//! Command implementations for the fantasy football research CLI

pub mod common;
pub mod league_data;
pub mod player_data;

use crate::cli::types::LeagueId;
use crate::storage::SessionStore;
use crate::LEAGUE_ID_ENV_VAR;

/// Resolve the league to score against: explicit flag, then environment,
/// then the stored active league. `None` means raw (unscored) display.
pub fn resolve_league_id(cli_arg: Option<LeagueId>, store: &SessionStore) -> Option<LeagueId> {
    cli_arg
        .or_else(|| std::env::var(LEAGUE_ID_ENV_VAR).ok().map(LeagueId::new))
        .or_else(|| store.active_league_id())
}
