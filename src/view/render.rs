//! Terminal renderers for the three display modes.
//!
//! Each renderer takes the already filtered and sorted view and returns a
//! string; printing is left to the command layer so tests can assert on
//! output without capturing stdout.

use crate::api::types::Player;
use crate::cli::types::StatId;
use crate::format::format_stat_value;
use crate::stats;
use crate::view::engine::{leaders_by_category, visible_stat_columns};

/// Shown for an empty view, whether genuinely empty or degraded after a
/// fetch failure (the warning line upstream is the differentiator).
pub const EMPTY_VIEW_MESSAGE: &str = "No players found.";

/// How many players each leaders category lists.
pub const LEADERS_PER_CATEGORY: usize = 5;

fn stat_label_or_id(id: StatId) -> String {
    stats::stat_label(id)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Stat {}", id))
}

/// Card grid: one block per player with identity, fantasy total, and the
/// player's own non-zero stat lines.
pub fn render_cards(players: &[&Player], show_fantasy: bool) -> String {
    if players.is_empty() {
        return EMPTY_VIEW_MESSAGE.to_string();
    }

    let mut out = String::new();
    for player in players {
        out.push_str(&format!(
            "{} · {} · {}\n",
            player.name,
            if player.team.is_empty() { "--" } else { &player.team },
            if player.position.is_empty() { "--" } else { &player.position },
        ));
        if let Some(rank) = player.overall_rank {
            out.push_str(&format!("  rank #{}", rank));
            if let Some(pos_rank) = player.position_rank {
                out.push_str(&format!(" ({} #{})", player.position, pos_rank));
            }
            out.push('\n');
        }
        if show_fantasy {
            let points = player.fantasy_points.unwrap_or(0.0);
            out.push_str(&format!("  {}\n", format_stat_value(points, true)));
        }
        for (&id, &value) in &player.raw_stats {
            if value == 0.0 {
                continue;
            }
            out.push_str(&format!(
                "  {}: {}\n",
                stat_label_or_id(id),
                format_stat_value(value, false)
            ));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// Dense research table: one row per player, one column per visible stat.
/// Columns every visible player has 0 for are dropped from header and body.
pub fn render_research_table(players: &[&Player], show_fantasy: bool) -> String {
    if players.is_empty() {
        return EMPTY_VIEW_MESSAGE.to_string();
    }

    let columns = visible_stat_columns(players);
    let mut out = String::new();

    out.push_str(&format!("{:<24} {:<5} {:<5}", "NAME", "TEAM", "POS"));
    if show_fantasy {
        out.push_str(&format!(" {:>9}", "PTS"));
    }
    for &id in &columns {
        out.push_str(&format!(" {:>9}", stat_label_or_id(id)));
    }
    out.push('\n');

    for player in players {
        out.push_str(&format!(
            "{:<24} {:<5} {:<5}",
            player.name, player.team, player.position
        ));
        if show_fantasy {
            let points = player.fantasy_points.unwrap_or(0.0);
            // Bare number in the dense grid; the suffix is card noise here.
            out.push_str(&format!(" {:>9}", format_stat_value(points, false)));
        }
        for &id in &columns {
            out.push_str(&format!(" {:>9}", format_stat_value(player.stat(id), false)));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// Leaders-by-category summary: top players per visible stat.
pub fn render_leaders(players: &[&Player]) -> String {
    if players.is_empty() {
        return EMPTY_VIEW_MESSAGE.to_string();
    }

    let mut out = String::new();
    for (id, leaders) in leaders_by_category(players, LEADERS_PER_CATEGORY) {
        out.push_str(&format!("{}\n", stat_label_or_id(id)));
        for (idx, player) in leaders.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} ({}) {}\n",
                idx + 1,
                player.name,
                if player.team.is_empty() { "--" } else { &player.team },
                format_stat_value(player.stat(id), false)
            ));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(name: &str, team: &str, position: &str, stats: serde_json::Value) -> Player {
        serde_json::from_value(json!({
            "id": 1, "name": name, "team": team, "position": position,
            "rawStats": stats
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_views_share_the_empty_message() {
        assert_eq!(render_cards(&[], true), EMPTY_VIEW_MESSAGE);
        assert_eq!(render_research_table(&[], false), EMPTY_VIEW_MESSAGE);
        assert_eq!(render_leaders(&[]), EMPTY_VIEW_MESSAGE);
    }

    #[test]
    fn test_cards_show_fantasy_total_with_suffix() {
        let mut p = player("Josh Allen", "BUF", "QB", json!({"5": 287.0}));
        p.fantasy_points = Some(24.3);
        let out = render_cards(&[&p], true);
        assert!(out.contains("Josh Allen · BUF · QB"));
        assert!(out.contains("24.3 pts"));
        assert!(out.contains("Pass Yds: 287"));
    }

    #[test]
    fn test_cards_raw_mode_has_no_points_line() {
        let p = player("Josh Allen", "BUF", "QB", json!({"5": 287.0}));
        let out = render_cards(&[&p], false);
        assert!(!out.contains("pts"));
        assert!(out.contains("Pass Yds: 287"));
    }

    #[test]
    fn test_table_hides_all_zero_columns() {
        let a = player("A", "BUF", "QB", json!({"5": 310.0, "20": 0.0}));
        let b = player("B", "MIA", "QB", json!({"5": 220.0}));
        let out = render_research_table(&[&a, &b], false);
        assert!(out.contains("Pass Yds"));
        assert!(!out.contains("Rec"));
    }

    #[test]
    fn test_table_header_and_rows_align_on_columns() {
        let a = player("A", "BUF", "QB", json!({"5": 310.0}));
        let out = render_research_table(&[&a], true);
        let mut lines = out.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("NAME"));
        assert!(header.contains("PTS"));
        assert!(header.contains("Pass Yds"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("A"));
        assert!(row.contains("310"));
    }

    #[test]
    fn test_leaders_lists_categories_with_values() {
        let a = player("A", "BUF", "RB", json!({"11": 140.0}));
        let b = player("B", "PHI", "RB", json!({"11": 120.0}));
        let out = render_leaders(&[&a, &b]);
        assert!(out.contains("Rush Yds"));
        assert!(out.contains("1. A (BUF) 140"));
        assert!(out.contains("2. B (PHI) 120"));
    }
}
