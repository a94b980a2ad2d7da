//! Two-tier cache for per-league scoring rules.
//!
//! Rules change rarely but are read on every scored command, so lookups go
//! memory first (LRU) and fall back to a disk file under the session tree,
//! promoting hits back into memory. Refreshing a league overwrites both
//! tiers.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Mutex;

use std::collections::BTreeMap;

use lru::LruCache;

use crate::api::types::{RuleSet, ScoringRule};
use crate::cli::types::{LeagueId, StatId};
use crate::storage::{session_dir, try_read_to_string, write_string};

/// Leagues kept in the memory tier.
const MEMORY_CAPACITY: usize = 16;

pub struct RulesCache {
    memory: Mutex<LruCache<LeagueId, RuleSet>>,
    root: PathBuf,
}

impl RulesCache {
    /// Cache rooted at the default session directory.
    pub fn new() -> Self {
        Self::with_path(session_dir())
    }

    /// Cache rooted at an explicit directory (tests use a tempdir).
    pub fn with_path(root: impl Into<PathBuf>) -> Self {
        Self {
            memory: Mutex::new(LruCache::new(
                NonZeroUsize::new(MEMORY_CAPACITY).expect("capacity is non-zero"),
            )),
            root: root.into(),
        }
    }

    fn file_path(&self, league_id: &LeagueId) -> PathBuf {
        self.root
            .join(format!("scoring-rules_{}.json", league_id.as_str()))
    }

    /// Rules for a league: memory first, then disk with promotion.
    pub fn get(&self, league_id: &LeagueId) -> Option<RuleSet> {
        if let Some(rules) = self.memory.lock().unwrap().get(league_id) {
            return Some(rules.clone());
        }

        let raw = try_read_to_string(&self.file_path(league_id))?;
        // Stat ids go to disk as string keys; a corrupt file reads as a miss.
        let parsed: BTreeMap<String, ScoringRule> = serde_json::from_str(&raw).ok()?;
        let rules: RuleSet = parsed
            .into_iter()
            .map(|(k, v)| k.parse::<u16>().map(|kk| (StatId::new(kk), v)))
            .collect::<Result<_, _>>()
            .ok()?;
        self.memory
            .lock()
            .unwrap()
            .put(league_id.clone(), rules.clone());
        Some(rules)
    }

    /// Store rules in both tiers; the disk write is best-effort.
    pub fn put(&self, league_id: &LeagueId, rules: &RuleSet) {
        self.memory
            .lock()
            .unwrap()
            .put(league_id.clone(), rules.clone());

        let by_string_key: BTreeMap<String, &ScoringRule> = rules
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        if let Ok(raw) = serde_json::to_string_pretty(&by_string_key) {
            let _ = write_string(&self.file_path(league_id), &raw);
        }
    }

    /// Drop a league from both tiers (used on refresh).
    pub fn invalidate(&self, league_id: &LeagueId) {
        self.memory.lock().unwrap().pop(league_id);
        let path = self.file_path(league_id);
        if path.exists() {
            let _ = std::fs::remove_file(path);
        }
    }
}

impl Default for RulesCache {
    fn default() -> Self {
        Self::new()
    }
}
