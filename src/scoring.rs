//! Fantasy-point computation.
//!
//! Pure functions from a player's raw-stat map plus a league's scoring rules
//! to a point total. No I/O, no caching; callers hold the rule set.

use std::collections::BTreeMap;

use crate::api::types::{Player, RuleSet};
use crate::cli::types::StatId;

/// Round to two decimal places, half-up on the cent boundary.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute a player's total fantasy points under a league's rules.
///
/// Every stat present in both the raw map and the rule set contributes
/// `raw * rate`, plus `floor(raw / target) * bonus` for each bonus
/// threshold the raw value reaches. Bonuses are independent and uncapped.
/// A stat with no rule, or a rule with rate 0, contributes nothing; a
/// missing rule set yields 0.0 rather than an error.
pub fn calculate_total_fantasy_points(
    raw_stats: &BTreeMap<StatId, f64>,
    rules: Option<&RuleSet>,
) -> f64 {
    let Some(rules) = rules else {
        return 0.0;
    };

    let mut total = 0.0;
    for (stat_id, &raw) in raw_stats {
        if raw == 0.0 {
            continue;
        }
        let Some(rule) = rules.get(stat_id) else {
            continue;
        };
        // Rate 0 disables the stat outright, bonuses included.
        if rule.points == 0.0 {
            continue;
        }

        total += raw * rule.points;

        for slot in &rule.bonuses {
            let bonus = &slot.bonus;
            if bonus.target > 0.0 && raw >= bonus.target {
                total += (raw / bonus.target).floor() * bonus.points;
            }
        }
    }

    round_to_cents(total)
}

/// Recompute fantasy totals for a batch of players against one rule set.
///
/// With rules present every player's `fantasy_points` is overwritten with
/// the locally computed total; with `None` the players keep whatever the
/// backend sent (raw display mode leaves them untouched).
pub fn score_players(players: &mut [Player], rules: Option<&RuleSet>) {
    let Some(rules) = rules else {
        return;
    };
    for player in players.iter_mut() {
        player.fantasy_points = Some(calculate_total_fantasy_points(
            &player.raw_stats,
            Some(rules),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Bonus, BonusSlot, ScoringRule};

    fn rule(points: f64, bonuses: &[(f64, f64)]) -> ScoringRule {
        ScoringRule {
            points,
            bonuses: bonuses
                .iter()
                .map(|&(target, points)| BonusSlot {
                    bonus: Bonus { target, points },
                })
                .collect(),
        }
    }

    fn raw(entries: &[(u16, f64)]) -> BTreeMap<StatId, f64> {
        entries
            .iter()
            .map(|&(id, v)| (StatId::new(id), v))
            .collect()
    }

    #[test]
    fn test_linear_rate_no_bonuses() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(11), rule(2.0, &[]));

        let total = calculate_total_fantasy_points(&raw(&[(11, 10.0)]), Some(&rules));
        assert_eq!(total, 20.0);
    }

    #[test]
    fn test_bonus_granted_per_multiple_of_target() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(5), rule(0.1, &[(100.0, 3.0)]));

        // base 25.0 + floor(250/100) * 3 = 31.0
        let total = calculate_total_fantasy_points(&raw(&[(5, 250.0)]), Some(&rules));
        assert_eq!(total, 31.0);
    }

    #[test]
    fn test_stat_absent_from_rules_contributes_zero() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(5), rule(0.1, &[]));

        let total = calculate_total_fantasy_points(&raw(&[(99, 5000.0)]), Some(&rules));
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_rate_zero_disables_stat_and_its_bonuses() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(5), rule(0.0, &[(100.0, 3.0)]));

        let total = calculate_total_fantasy_points(&raw(&[(5, 500.0)]), Some(&rules));
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_missing_rules_yield_zero() {
        let total = calculate_total_fantasy_points(&raw(&[(5, 310.0)]), None);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_zero_raw_value_skipped() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(4), rule(-2.0, &[]));

        let total = calculate_total_fantasy_points(&raw(&[(4, 0.0)]), Some(&rules));
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_negative_rates_accumulate() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(4), rule(-2.0, &[]));
        rules.insert(StatId::new(3), rule(4.0, &[]));

        let total =
            calculate_total_fantasy_points(&raw(&[(4, 2.0), (3, 3.0)]), Some(&rules));
        assert_eq!(total, 8.0);
    }

    #[test]
    fn test_total_rounds_half_up_on_cents() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(5), rule(0.035, &[]));

        // 3 * 0.035 = 0.105 -> 0.11
        let total = calculate_total_fantasy_points(&raw(&[(5, 3.0)]), Some(&rules));
        assert_eq!(total, 0.11);
    }

    #[test]
    fn test_wire_scenario_310_passing_yards() {
        // rules = {"5": {points: "0.1", bonuses: [{bonus: {target: "300",
        // points: "3"}}]}}, rawStats = {"5": 310} -> 34.0
        let doc: RuleSet = serde_json::from_value(serde_json::json!({
            "5": {"points": "0.1", "bonuses": [{"bonus": {"target": "300", "points": "3"}}]}
        }))
        .map(|m: std::collections::BTreeMap<String, ScoringRule>| {
            m.into_iter()
                .map(|(k, v)| (StatId::new(k.parse().unwrap()), v))
                .collect()
        })
        .unwrap();

        let total = calculate_total_fantasy_points(&raw(&[(5, 310.0)]), Some(&doc));
        assert_eq!(total, 34.0);
    }

    #[test]
    fn test_total_invariant_under_reordering() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(5), rule(0.04, &[(300.0, 3.0)]));
        rules.insert(StatId::new(3), rule(4.0, &[]));
        rules.insert(StatId::new(4), rule(-2.0, &[]));

        let forward = raw(&[(3, 2.0), (4, 1.0), (5, 325.0)]);
        let reversed: BTreeMap<StatId, f64> =
            forward.iter().rev().map(|(k, v)| (*k, *v)).collect();

        assert_eq!(
            calculate_total_fantasy_points(&forward, Some(&rules)),
            calculate_total_fantasy_points(&reversed, Some(&rules)),
        );
    }

    #[test]
    fn test_score_players_overwrites_backend_totals() {
        let mut rules = RuleSet::new();
        rules.insert(StatId::new(20), rule(1.0, &[]));

        let mut players: Vec<Player> = vec![serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Receiver",
            "rawStats": {"20": 8.0},
            "fantasyPoints": 99.9
        }))
        .unwrap()];

        score_players(&mut players, Some(&rules));
        assert_eq!(players[0].fantasy_points, Some(8.0));

        // Without rules the backend value survives.
        players[0].fantasy_points = Some(99.9);
        score_players(&mut players, None);
        assert_eq!(players[0].fantasy_points, Some(99.9));
    }
}
