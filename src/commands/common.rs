//! Shared command context: HTTP client, session store, and the active
//! league's scoring rules.

use reqwest::Client;

use crate::api::http::get_scoring_rules;
use crate::api::types::RuleSet;
use crate::cli::types::LeagueId;
use crate::error::Result;
use crate::storage::{RulesCache, SessionStore};

use super::resolve_league_id;

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub client: Client,
    pub store: SessionStore,
    pub league_id: Option<LeagueId>,
    pub rules: Option<RuleSet>,
}

impl CommandContext {
    /// Initialize the store, resolve the league, and load its rules.
    ///
    /// A missing league or a failed rules fetch is not an error: the
    /// context comes back with `rules: None` and the views fall back to
    /// raw stat display.
    pub async fn new(
        league_id: Option<LeagueId>,
        refresh: bool,
        verbose: bool,
    ) -> Result<Self> {
        let store = SessionStore::new()?;
        store.init()?;
        let client = Client::new();

        let league_id = resolve_league_id(league_id, &store);
        let rules = match &league_id {
            Some(id) => load_league_rules(&client, id, refresh, verbose).await,
            None => {
                if verbose {
                    println!("⚠ No active league; displaying raw stats");
                }
                None
            }
        };

        Ok(Self {
            client,
            store,
            league_id,
            rules,
        })
    }
}

/// Load one league's scoring rules through the two-tier cache, fetching
/// from the backend on a miss. Degrades to `None` on any failure.
pub async fn load_league_rules(
    client: &Client,
    league_id: &LeagueId,
    refresh: bool,
    verbose: bool,
) -> Option<RuleSet> {
    let cache = RulesCache::new();
    if refresh {
        cache.invalidate(league_id);
    } else if let Some(rules) = cache.get(league_id) {
        if verbose {
            println!("✓ Scoring rules for {} loaded (from cache)", league_id);
        }
        return Some(rules);
    }

    match get_scoring_rules(client).await {
        Ok(mut all) => match all.remove(league_id) {
            Some(rules) => {
                cache.put(league_id, &rules);
                if verbose {
                    println!("✓ Scoring rules for {} fetched", league_id);
                }
                Some(rules)
            }
            None => {
                println!("⚠ No scoring rules for league {}; displaying raw stats", league_id);
                None
            }
        },
        Err(e) => {
            println!("⚠ Could not fetch scoring rules: {}; displaying raw stats", e);
            None
        }
    }
}
