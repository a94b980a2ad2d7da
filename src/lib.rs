//! Fantasy Football Research CLI Library
//!
//! A Rust library for browsing fantasy football statistics: it fetches
//! player, league, and scoring-rule documents from a stats backend,
//! recomputes fantasy points per league, and renders sortable, filterable
//! player views.
//!
//! ## Features
//!
//! - **Player Data Retrieval**: Fetch per-week or season-total player stats
//! - **Fantasy Scoring**: Linear rates plus threshold bonuses per league
//! - **Research Views**: Card grid, dense stat table, and category leaders
//! - **Filter/Sort/Paginate**: Free-text and position filters, column
//!   sorting with direction toggling, 50-row load-more paging
//! - **Session Caching**: League list with a one-hour freshness window,
//!   two-tier scoring-rule cache
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_research::{commands::player_data::*, Season, Week};
//! use ffl_research::view::state::ViewMode;
//!
//! # async fn example() -> ffl_research::Result<()> {
//! // Render the research table for season-total RB stats
//! let params = PlayerDataParams {
//!     season: Season::default(),
//!     week: Week::Total,
//!     position: "RB".parse()?,
//!     view: ViewMode::Research,
//!     // ... other parameters
//! #   debug: false,
//! #   as_json: false,
//! #   league_id: None,
//! #   search: String::new(),
//! #   sort: None,
//! #   ascending: false,
//! #   pages: 1,
//! #   refresh: false,
//! };
//!
//! handle_player_data(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FFL_RESEARCH_LEAGUE_ID=my-league
//! ```
//!
//! Point at a self-hosted backend with `FFL_RESEARCH_API_URL`.

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod format;
pub mod scoring;
pub mod stats;
pub mod storage;
pub mod view;

// Re-export commonly used types
pub use api::types::{League, Player, RuleSet, ScoringRule};
pub use cli::types::{LeagueId, PlayerId, Position, PositionFilter, Season, StatId, Week};
pub use error::{FflError, Result};
pub use scoring::calculate_total_fantasy_points;

pub const LEAGUE_ID_ENV_VAR: &str = "FFL_RESEARCH_LEAGUE_ID";
