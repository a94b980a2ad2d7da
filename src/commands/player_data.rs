//! Player data retrieval and the display pipeline.
//!
//! Fetches player pages from the stats backend, recomputes fantasy points
//! against the active league's scoring rules, and renders the selected
//! view mode. Data flows one direction: remote JSON → scoring → filter/
//! sort/paginate → renderer; nothing is written back.

use crate::cli::types::{LeagueId, PositionFilter, Season, Week};
use crate::error::Result;
use crate::scoring::score_players;
use crate::view::render::{render_cards, render_leaders, render_research_table};
use crate::view::state::{
    AppState, FetchMode, FetchPlan, FilterState, SortColumn, SortDirection, SortState, ViewMode,
};

use super::common::CommandContext;
use crate::api::http::{get_players, PlayersRequest};

/// Configuration parameters for player data retrieval.
#[derive(Debug)]
pub struct PlayerDataParams {
    pub debug: bool,
    pub as_json: bool,
    pub league_id: Option<LeagueId>,
    pub season: Season,
    pub week: Week,
    pub position: PositionFilter,
    pub search: String,
    pub view: ViewMode,
    pub sort: Option<SortColumn>,
    pub ascending: bool,
    pub pages: u32,
    pub refresh: bool,
}

/// Retrieve, score, and display player data.
///
/// 1. **Context**: session store init, league resolution, scoring rules
///    (cache first, backend on miss; missing rules mean raw display).
/// 2. **Fetch**: one replace fetch plus `pages - 1` load-more rounds
///    through the state store, each admitted by the busy/has-more gate.
/// 3. **Scoring**: recompute every fantasy total under the league rules.
/// 4. **Display**: render the filtered/sorted view in the selected mode,
///    or dump the visible players as JSON.
///
/// # Errors
///
/// Returns an error only for local failures (session store IO); backend
/// failures degrade to an empty view with a warning line.
pub async fn handle_player_data(params: PlayerDataParams) -> Result<()> {
    let ctx = CommandContext::new(params.league_id, params.refresh, !params.as_json).await?;

    let sort = match params.sort {
        Some(column) => SortState::new(
            column,
            if params.ascending {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            },
        ),
        None => SortState::default(),
    };
    let filter = FilterState {
        season: params.season,
        week: params.week,
        position: params.position,
        search: params.search.clone(),
        league_id: ctx.league_id.clone(),
    };
    let mut state = AppState::new(filter, sort, params.view);

    if !params.as_json {
        println!(
            "Fetching player data for season {} week {}...",
            params.season, params.week
        );
    }

    if let Some(plan) = state.begin_fetch(FetchMode::Replace) {
        run_fetch(&mut state, &ctx, plan, params.debug).await;
    }
    for _ in 1..params.pages {
        let Some(plan) = state.begin_fetch(FetchMode::LoadMore) else {
            break;
        };
        run_fetch(&mut state, &ctx, plan, params.debug).await;
    }

    score_players(&mut state.players, ctx.rules.as_ref());

    let visible = state.visible_players();
    if !params.as_json {
        println!("✓ Found {} players", visible.len());
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    let show_fantasy = ctx.rules.is_some();
    let rendered = match state.view {
        ViewMode::Cards => render_cards(&visible, show_fantasy),
        ViewMode::Research => render_research_table(&visible, show_fantasy),
        ViewMode::Leaders => render_leaders(&visible),
    };
    println!("{}", rendered);

    Ok(())
}

/// Run one admitted fetch against the backend and fold the result into the
/// store. Failures degrade: the fetch is marked failed and the view simply
/// stays on whatever it already holds.
async fn run_fetch(state: &mut AppState, ctx: &CommandContext, plan: FetchPlan, debug: bool) {
    let request = PlayersRequest {
        season: state.filter.season,
        week: state.filter.week,
        position: state.filter.position,
        limit: plan.limit,
        debug,
    };
    match get_players(&ctx.client, &request).await {
        Ok(players) => {
            state.complete_fetch(&plan, players);
        }
        Err(e) => {
            println!("⚠ Could not fetch players: {}", e);
            state.fail_fetch(plan.generation);
        }
    }
}
