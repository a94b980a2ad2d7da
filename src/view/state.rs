//! View state store.
//!
//! All session state the views derive from lives in [`AppState`] and is
//! only changed through [`AppState::apply`] and the fetch lifecycle
//! methods. Fetches carry a generation number: a completion whose
//! generation no longer matches the store is stale and is discarded, so a
//! superseded request can never overwrite newer data. A busy flag drops
//! (never queues) a load-more issued while a fetch is in flight.

use std::str::FromStr;

use crate::api::types::Player;
use crate::cli::types::{LeagueId, PositionFilter, Season, StatId, Week};
use crate::error::FflError;
use crate::stats;

/// Fixed page size for player fetches.
pub const PAGE_SIZE: usize = 50;

/// Sentinel rank for unranked players; sorts after every real rank.
pub const RANK_SENTINEL: u32 = u32::MAX;

/// Display modes for the player list.
///
/// Transitions happen only by explicit selection; every mode re-derives
/// from the same filtered/sorted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Research,
    Leaders,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ViewMode::Cards => "cards",
            ViewMode::Research => "research",
            ViewMode::Leaders => "leaders",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ViewMode {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cards" => Ok(ViewMode::Cards),
            "research" | "table" => Ok(ViewMode::Research),
            "leaders" | "stats-leaders" => Ok(ViewMode::Leaders),
            _ => Err(FflError::InvalidViewMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Sortable columns of the player views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Team,
    Position,
    FantasyPoints,
    OverallRank,
    PositionRank,
    Stat(StatId),
}

impl FromStr for SortColumn {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => return Ok(SortColumn::Name),
            "team" => return Ok(SortColumn::Team),
            "position" | "pos" => return Ok(SortColumn::Position),
            "points" | "fantasy" | "fantasy-points" => return Ok(SortColumn::FantasyPoints),
            "rank" | "overall-rank" => return Ok(SortColumn::OverallRank),
            "position-rank" => return Ok(SortColumn::PositionRank),
            _ => {}
        }
        // Stat columns resolve by catalog name or numeric id.
        if let Some(id) = stats::stat_id_by_name(s) {
            return Ok(SortColumn::Stat(id));
        }
        if let Ok(n) = s.parse::<u16>() {
            return Ok(SortColumn::Stat(StatId::new(n)));
        }
        Err(FflError::UnknownColumn {
            column: s.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn descending(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::descending(SortColumn::FantasyPoints)
    }
}

/// Client-side filter state; drives the next fetch.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub season: Season,
    pub week: Week,
    pub position: PositionFilter,
    pub search: String,
    pub league_id: Option<LeagueId>,
}

/// Whether a fetch replaces the player list or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Replace,
    LoadMore,
}

/// Ticket for an admitted fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchPlan {
    pub generation: u64,
    /// Record count to request; grows by whole pages for load-more.
    pub limit: usize,
    pub mode: FetchMode,
}

/// What a completion did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The store moved on while this fetch was in flight.
    Stale,
}

/// UI-originated state transitions.
#[derive(Debug, Clone)]
pub enum Action {
    SetSearch(String),
    SetPosition(PositionFilter),
    SetWeek(Week),
    SetSeason(Season),
    SetLeague(Option<LeagueId>),
    SetView(ViewMode),
    /// Select a sort column; re-selecting the active column flips the
    /// direction, any other column resets to descending.
    SortBy(SortColumn),
}

/// The whole of the session's view state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub filter: FilterState,
    pub sort: SortState,
    pub view: ViewMode,
    pub players: Vec<Player>,
    pub has_more: bool,
    pub busy: bool,
    pub generation: u64,
}

impl AppState {
    pub fn new(filter: FilterState, sort: SortState, view: ViewMode) -> Self {
        Self {
            filter,
            sort,
            view,
            ..Self::default()
        }
    }

    /// Apply a UI action. The single mutation boundary for non-fetch state.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetSearch(search) => self.filter.search = search,
            Action::SetPosition(position) => self.filter.position = position,
            Action::SetWeek(week) => self.filter.week = week,
            Action::SetSeason(season) => self.filter.season = season,
            Action::SetLeague(league_id) => self.filter.league_id = league_id,
            Action::SetView(view) => self.view = view,
            Action::SortBy(column) => {
                if self.sort.column == column {
                    self.sort.direction = self.sort.direction.flipped();
                } else {
                    self.sort = SortState::descending(column);
                }
            }
        }
    }

    /// Admit a fetch, or drop it.
    ///
    /// Load-more is dropped while a fetch is in flight or when the last
    /// page came back short. Replace is always admitted and supersedes any
    /// in-flight fetch by bumping the generation.
    pub fn begin_fetch(&mut self, mode: FetchMode) -> Option<FetchPlan> {
        if mode == FetchMode::LoadMore && (self.busy || !self.has_more) {
            return None;
        }
        self.busy = true;
        self.generation += 1;
        let limit = match mode {
            FetchMode::Replace => PAGE_SIZE,
            // The players endpoint only takes a limit, so load-more grows
            // the request by a page and keeps the records already held.
            FetchMode::LoadMore => self.players.len() + PAGE_SIZE,
        };
        Some(FetchPlan {
            generation: self.generation,
            limit,
            mode,
        })
    }

    /// Fold a completed fetch into the store; stale completions are
    /// discarded untouched.
    pub fn complete_fetch(&mut self, plan: &FetchPlan, fetched: Vec<Player>) -> FetchOutcome {
        if plan.generation != self.generation {
            return FetchOutcome::Stale;
        }
        self.busy = false;
        self.has_more = fetched.len() >= plan.limit;
        match plan.mode {
            FetchMode::Replace => self.players = fetched,
            FetchMode::LoadMore => {
                let have = self.players.len();
                if fetched.len() > have {
                    self.players.extend(fetched.into_iter().skip(have));
                }
            }
        }
        FetchOutcome::Applied
    }

    /// Record a failed fetch; stale failures are ignored.
    pub fn fail_fetch(&mut self, generation: u64) {
        if generation == self.generation {
            self.busy = false;
        }
    }

    /// The filtered and sorted view the renderers consume.
    pub fn visible_players(&self) -> Vec<&Player> {
        let mut view = super::engine::filter_players(&self.players, &self.filter);
        super::engine::sort_players(&mut view, &self.sort);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(id: u64, name: &str) -> Player {
        serde_json::from_value(json!({"id": id, "name": name})).unwrap()
    }

    fn page(start: u64, count: usize) -> Vec<Player> {
        (start..start + count as u64)
            .map(|i| player(i, &format!("Player {}", i)))
            .collect()
    }

    #[test]
    fn test_sort_by_same_column_toggles_direction() {
        let mut state = AppState::default();
        state.apply(Action::SortBy(SortColumn::Name));
        assert_eq!(state.sort.column, SortColumn::Name);
        assert_eq!(state.sort.direction, SortDirection::Descending);

        state.apply(Action::SortBy(SortColumn::Name));
        assert_eq!(state.sort.direction, SortDirection::Ascending);

        // Third selection restores the original order.
        state.apply(Action::SortBy(SortColumn::Name));
        assert_eq!(state.sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_by_new_column_resets_to_descending() {
        let mut state = AppState::default();
        state.apply(Action::SortBy(SortColumn::Name));
        state.apply(Action::SortBy(SortColumn::Name));
        assert_eq!(state.sort.direction, SortDirection::Ascending);

        state.apply(Action::SortBy(SortColumn::Team));
        assert_eq!(state.sort.column, SortColumn::Team);
        assert_eq!(state.sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_view_mode_changes_only_by_selection() {
        let mut state = AppState::default();
        assert_eq!(state.view, ViewMode::Cards);
        state.apply(Action::SetView(ViewMode::Research));
        assert_eq!(state.view, ViewMode::Research);
    }

    #[test]
    fn test_replace_fetch_round_trip() {
        let mut state = AppState::default();
        let plan = state.begin_fetch(FetchMode::Replace).unwrap();
        assert!(state.busy);
        assert_eq!(plan.limit, PAGE_SIZE);

        let outcome = state.complete_fetch(&plan, page(0, PAGE_SIZE));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert!(!state.busy);
        assert!(state.has_more);
        assert_eq!(state.players.len(), PAGE_SIZE);
    }

    #[test]
    fn test_short_page_clears_has_more() {
        let mut state = AppState::default();
        let plan = state.begin_fetch(FetchMode::Replace).unwrap();
        state.complete_fetch(&plan, page(0, 12));
        assert!(!state.has_more);

        // And load-more is now dropped.
        assert!(state.begin_fetch(FetchMode::LoadMore).is_none());
    }

    #[test]
    fn test_load_more_appends_past_held_records() {
        let mut state = AppState::default();
        let plan = state.begin_fetch(FetchMode::Replace).unwrap();
        state.complete_fetch(&plan, page(0, PAGE_SIZE));

        let plan = state.begin_fetch(FetchMode::LoadMore).unwrap();
        assert_eq!(plan.limit, 2 * PAGE_SIZE);
        state.complete_fetch(&plan, page(0, 2 * PAGE_SIZE));

        assert_eq!(state.players.len(), 2 * PAGE_SIZE);
        assert_eq!(state.players[PAGE_SIZE].id.as_u64(), PAGE_SIZE as u64);
    }

    #[test]
    fn test_overlapping_load_more_is_dropped() {
        let mut state = AppState::default();
        let plan = state.begin_fetch(FetchMode::Replace).unwrap();
        state.complete_fetch(&plan, page(0, PAGE_SIZE));

        let first = state.begin_fetch(FetchMode::LoadMore);
        assert!(first.is_some());
        // Second load-more while the first is in flight: dropped, not queued.
        assert!(state.begin_fetch(FetchMode::LoadMore).is_none());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = AppState::default();
        let old_plan = state.begin_fetch(FetchMode::Replace).unwrap();

        // User changes the week; a new fetch supersedes the old one.
        state.apply(Action::SetWeek(Week::Num(4)));
        let new_plan = state.begin_fetch(FetchMode::Replace).unwrap();

        // The old response resolves last but must not win.
        let fresh = page(100, 8);
        assert_eq!(
            state.complete_fetch(&new_plan, fresh),
            FetchOutcome::Applied
        );
        assert_eq!(
            state.complete_fetch(&old_plan, page(0, PAGE_SIZE)),
            FetchOutcome::Stale
        );
        assert_eq!(state.players.len(), 8);
        assert_eq!(state.players[0].id.as_u64(), 100);
    }

    #[test]
    fn test_failed_fetch_clears_busy_only_for_current_generation() {
        let mut state = AppState::default();
        let old_plan = state.begin_fetch(FetchMode::Replace).unwrap();
        let new_plan = state.begin_fetch(FetchMode::Replace).unwrap();

        state.fail_fetch(old_plan.generation);
        assert!(state.busy);
        state.fail_fetch(new_plan.generation);
        assert!(!state.busy);
    }
}
