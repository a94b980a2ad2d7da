//! View pipeline: state store, filter/sort derivations, and renderers.
//!
//! Everything downstream of the fetch layer is a pure derivation over the
//! in-memory player list; the three display modes share one filtered and
//! sorted view and carry no mode-specific side data.

pub mod engine;
pub mod render;
pub mod state;

pub use engine::{filter_players, leaders_by_category, sort_players, visible_stat_columns};
pub use state::{
    Action, AppState, FetchMode, FetchOutcome, FetchPlan, FilterState, SortColumn, SortDirection,
    SortState, ViewMode, PAGE_SIZE,
};
