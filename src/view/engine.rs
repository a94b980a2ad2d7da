//! Pure derivations over the player list: filtering, sorting, column
//! visibility, and the leaders summary.

use std::cmp::Ordering;

use crate::api::types::Player;
use crate::cli::types::StatId;
use crate::stats;
use crate::view::state::{FilterState, SortColumn, SortDirection, SortState, RANK_SENTINEL};

/// Retain players matching the free-text search (name or team, case
/// insensitive) and the position filter. Never fails; an impossible query
/// just yields an empty list.
pub fn filter_players<'a>(players: &'a [Player], filter: &FilterState) -> Vec<&'a Player> {
    let needle = filter.search.trim().to_lowercase();
    players
        .iter()
        .filter(|p| {
            let text_ok = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.team.to_lowercase().contains(&needle);
            text_ok && filter.position.matches(&p.position)
        })
        .collect()
}

fn rank_value(rank: Option<u32>) -> u32 {
    rank.unwrap_or(RANK_SENTINEL)
}

fn compare(a: &Player, b: &Player, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Team => a.team.to_lowercase().cmp(&b.team.to_lowercase()),
        SortColumn::Position => a.position.to_lowercase().cmp(&b.position.to_lowercase()),
        SortColumn::FantasyPoints => {
            let av = a.fantasy_points.unwrap_or(0.0);
            let bv = b.fantasy_points.unwrap_or(0.0);
            av.partial_cmp(&bv).unwrap_or(Ordering::Equal)
        }
        SortColumn::OverallRank => rank_value(a.overall_rank).cmp(&rank_value(b.overall_rank)),
        SortColumn::PositionRank => rank_value(a.position_rank).cmp(&rank_value(b.position_rank)),
        SortColumn::Stat(id) => a
            .stat(id)
            .partial_cmp(&b.stat(id))
            .unwrap_or(Ordering::Equal),
    }
}

/// Stable-sort the view by the active column and direction.
pub fn sort_players(players: &mut [&Player], sort: &SortState) {
    players.sort_by(|a, b| {
        let ord = compare(a, b, sort.column);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Stat columns worth a column in the research table: catalog order,
/// dropping any stat every visible player has 0 for.
pub fn visible_stat_columns(players: &[&Player]) -> Vec<StatId> {
    stats::catalog_order()
        .filter(|&id| players.iter().any(|p| p.stat(id) != 0.0))
        .collect()
}

/// Top `top_n` players per visible stat category, by raw value.
///
/// Derived from the same filtered list as the other views; categories no
/// visible player scored in are omitted entirely.
pub fn leaders_by_category<'a>(
    players: &[&'a Player],
    top_n: usize,
) -> Vec<(StatId, Vec<&'a Player>)> {
    visible_stat_columns(players)
        .into_iter()
        .map(|id| {
            let mut ranked: Vec<&Player> = players
                .iter()
                .copied()
                .filter(|p| p.stat(id) != 0.0)
                .collect();
            ranked.sort_by(|a, b| {
                b.stat(id)
                    .partial_cmp(&a.stat(id))
                    .unwrap_or(Ordering::Equal)
            });
            ranked.truncate(top_n);
            (id, ranked)
        })
        .collect()
}
