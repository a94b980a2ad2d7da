//! Static stat catalog: stat IDs, API keys, and display labels.
//!
//! The stats backend identifies every counted statistic by a numeric ID and
//! spells it two ways in documents: a camelCase key (`"passYds"`) and a
//! human label (`"Pass Yds"`). Lookups by name go through an index built
//! once at first use instead of scanning the catalog per lookup.

use crate::cli::types::StatId;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One catalog row: (stat id, API key, display label).
pub const STAT_CATALOG: &[(u16, &str, &str)] = &[
    (1, "passAtt", "Pass Att"),
    (2, "passCmp", "Pass Cmp"),
    (3, "passTD", "Pass TD"),
    (4, "passInt", "Pass Int"),
    (5, "passYds", "Pass Yds"),
    (10, "rushAtt", "Rush Att"),
    (11, "rushYds", "Rush Yds"),
    (12, "rushTD", "Rush TD"),
    (20, "rec", "Rec"),
    (21, "recYds", "Rec Yds"),
    (22, "recTD", "Rec TD"),
    (23, "targets", "Targets"),
    (30, "fumLost", "Fum Lost"),
    (31, "twoPt", "2PT"),
    (40, "fgMade", "FG Made"),
    (41, "fgAtt", "FG Att"),
    (42, "xpMade", "XP Made"),
    (50, "sacks", "Sacks"),
    (51, "defInt", "Def Int"),
    (52, "defTD", "Def TD"),
];

/// Name → ID index over both the API key and the display label,
/// lowercased. Built once.
static NAME_INDEX: LazyLock<HashMap<String, StatId>> = LazyLock::new(|| {
    let mut idx = HashMap::with_capacity(STAT_CATALOG.len() * 2);
    for &(id, key, label) in STAT_CATALOG {
        idx.insert(key.to_lowercase(), StatId::new(id));
        idx.insert(label.to_lowercase(), StatId::new(id));
    }
    idx
});

/// Display label for a stat id, if the catalog knows it.
pub fn stat_label(id: StatId) -> Option<&'static str> {
    STAT_CATALOG
        .iter()
        .find(|(cat_id, _, _)| *cat_id == id.as_u16())
        .map(|(_, _, label)| *label)
}

/// API key for a stat id, if the catalog knows it.
pub fn stat_key(id: StatId) -> Option<&'static str> {
    STAT_CATALOG
        .iter()
        .find(|(cat_id, _, _)| *cat_id == id.as_u16())
        .map(|(_, key, _)| *key)
}

/// Resolve a stat name (API key or display label, any case) to its ID.
pub fn stat_id_by_name(name: &str) -> Option<StatId> {
    NAME_INDEX.get(&name.to_lowercase()).copied()
}

/// All catalog stat ids in display order.
pub fn catalog_order() -> impl Iterator<Item = StatId> {
    STAT_CATALOG.iter().map(|&(id, _, _)| StatId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key_and_label() {
        assert_eq!(stat_id_by_name("passYds"), Some(StatId::new(5)));
        assert_eq!(stat_id_by_name("pass yds"), Some(StatId::new(5)));
        assert_eq!(stat_id_by_name("PASSYDS"), Some(StatId::new(5)));
        assert_eq!(stat_id_by_name("rec"), Some(StatId::new(20)));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(stat_id_by_name("dunks"), None);
    }

    #[test]
    fn test_label_and_key_round_trip() {
        for id in catalog_order() {
            let key = stat_key(id).unwrap();
            let label = stat_label(id).unwrap();
            assert_eq!(stat_id_by_name(key), Some(id));
            assert_eq!(stat_id_by_name(label), Some(id));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &(id, _, _) in STAT_CATALOG {
            assert!(seen.insert(id), "duplicate stat id {}", id);
        }
    }
}
