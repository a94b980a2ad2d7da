//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, PositionFilter, Season, Week};

use crate::view::state::{SortColumn, ViewMode};

/// Common filtering arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// League ID (or set `FFL_RESEARCH_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Week number, or "total" for season-to-date.
    #[clap(long, short, default_value_t = Week::default())]
    pub week: Week,

    /// Filter by position (QB, RB, WR, TE, K, D/ST), or "ALL".
    #[clap(long, short, default_value_t = PositionFilter::default())]
    pub position: PositionFilter,

    /// Free-text search over player name and team.
    #[clap(long, short = 'q', default_value = "")]
    pub search: String,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch and cache the league list and scoring rules.
    ///
    /// Reads the cached list when it is under an hour old; `--refresh`
    /// forces a fresh discovery fetch.
    LeagueData {
        /// Force refresh from the backend, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Select the active league by id.
        #[clap(long)]
        set_active: Option<LeagueId>,

        /// Output the league list as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print cache status lines when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Get players with computed fantasy points.
    ///
    /// Fetches `/players` pages, recomputes totals against the active
    /// league's scoring rules, and renders the selected view.
    PlayerData {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Display mode: cards, research, or leaders.
        #[clap(long, default_value_t = ViewMode::default())]
        view: ViewMode,

        /// Sort column: name, team, position, points, rank,
        /// position-rank, or a stat name like passYds.
        #[clap(long)]
        sort: Option<SortColumn>,

        /// Sort ascending instead of descending.
        #[clap(long)]
        asc: bool,

        /// Number of 50-row pages to load.
        #[clap(long, default_value_t = 1)]
        pages: u32,

        /// Output results as JSON instead of rendered views.
        #[clap(long)]
        json: bool,

        /// Print request URLs for debugging.
        #[clap(long)]
        debug: bool,

        /// Force refresh of cached scoring rules.
        #[clap(long)]
        refresh: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "ffl-research", about = "Fantasy football stats research CLI")]
pub struct FflResearch {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the stats backend
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
