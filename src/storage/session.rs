//! The session's named key-value surface.
//!
//! Four keys survive from the original front end: the cached league list
//! (fresh for one hour), the active league id, the signed-in user id, and
//! a legacy all-scoring-rules blob that is cleared on every init so stale
//! rule sets can never shadow a fresh fetch.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::types::League;
use crate::cli::types::LeagueId;
use crate::storage::{session_dir, try_read_to_string, write_string};

/// Freshness window for the cached league list.
pub const LEAGUES_TTL_SECS: u64 = 3600;

const USER_LEAGUES_KEY: &str = "user_leagues";
const ACTIVE_LEAGUE_KEY: &str = "active_league_id";
const USER_ID_KEY: &str = "user_id";
const LEGACY_RULES_KEY: &str = "all_scoring_rules";

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// League list with its fetch timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedLeagues {
    pub fetched_at: u64,
    pub leagues: Vec<League>,
}

impl CachedLeagues {
    /// Whether the cache is still inside the freshness window at `now`.
    pub fn is_fresh(&self, now: u64) -> bool {
        now.saturating_sub(self.fetched_at) < LEAGUES_TTL_SECS
    }
}

/// File-backed session store.
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Open the store at the default session directory.
    pub fn new() -> Result<Self> {
        Self::with_path(session_dir())
    }

    /// Open the store at an explicit root (tests use a tempdir).
    pub fn with_path(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("creating session dir {}", root.display()))?;
        Ok(Self { root })
    }

    /// Session init: drop the legacy scoring-rules blob.
    pub fn init(&self) -> Result<()> {
        let path = self.key_path(LEGACY_RULES_KEY);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("clearing {}", path.display()))?;
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let raw = try_read_to_string(&self.key_path(key))?;
        serde_json::from_str(&raw).ok()
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string_pretty(value).context("serializing session value")?;
        write_string(&self.key_path(key), &raw)
            .with_context(|| format!("writing session key {}", key))?;
        Ok(())
    }

    /// Cached leagues if present and still fresh.
    pub fn leagues(&self) -> Option<Vec<League>> {
        let cached: CachedLeagues = self.read_json(USER_LEAGUES_KEY)?;
        cached.is_fresh(now_secs()).then_some(cached.leagues)
    }

    /// The raw cached entry, fresh or not.
    pub fn cached_leagues(&self) -> Option<CachedLeagues> {
        self.read_json(USER_LEAGUES_KEY)
    }

    /// Store the league list stamped with the current time.
    pub fn save_leagues(&self, leagues: &[League]) -> Result<()> {
        self.write_json(
            USER_LEAGUES_KEY,
            &CachedLeagues {
                fetched_at: now_secs(),
                leagues: leagues.to_vec(),
            },
        )
    }

    pub fn active_league_id(&self) -> Option<LeagueId> {
        self.read_json(ACTIVE_LEAGUE_KEY)
    }

    pub fn set_active_league_id(&self, league_id: &LeagueId) -> Result<()> {
        self.write_json(ACTIVE_LEAGUE_KEY, league_id)
    }

    pub fn user_id(&self) -> Option<String> {
        self.read_json(USER_ID_KEY)
    }

    pub fn set_user_id(&self, user_id: &str) -> Result<()> {
        self.write_json(USER_ID_KEY, &user_id)
    }

    /// Root directory, for sibling caches that share the session tree.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
