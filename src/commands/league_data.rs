//! League discovery: fetch, cache, and select the user's leagues.
//!
//! The league list is fetched once per session and cached with a one-hour
//! freshness window; the per-league scoring rules that ride along in the
//! discovery document are written through to the rules cache so the next
//! player-data command starts warm.

use reqwest::Client;

use crate::api::http::get_league_data;
use crate::api::types::League;
use crate::cli::types::LeagueId;
use crate::error::Result;
use crate::storage::{RulesCache, SessionStore};

/// Fetch (or read cached) league data, optionally select the active
/// league, and print the league list.
pub async fn handle_league_data(
    refresh: bool,
    set_active: Option<LeagueId>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let store = SessionStore::new()?;
    store.init()?;
    let client = Client::new();

    let cached = if refresh { None } else { store.leagues() };

    let mut needs_import = false;
    let mut default_league_id = None;

    let leagues: Vec<League> = match cached {
        Some(leagues) => {
            if verbose {
                println!("✓ League list loaded (from cache)");
            }
            leagues
        }
        None => {
            println!("Fetching league data...");
            match get_league_data(&client).await {
                Ok(doc) => {
                    let rules_cache = RulesCache::new();
                    for (id, rules) in &doc.scoring_rules {
                        rules_cache.put(id, rules);
                    }
                    store.save_leagues(&doc.leagues)?;
                    needs_import = doc.needs_import;
                    default_league_id = doc.default_league_id.clone();
                    if verbose {
                        println!("✓ League list fetched and cached");
                    }
                    doc.leagues
                }
                // Malformed or unreachable league data degrades to an
                // empty set rather than failing the command.
                Err(e) => {
                    println!("⚠ Could not fetch league data: {}", e);
                    Vec::new()
                }
            }
        }
    };

    // Adopt the backend's default league when nothing is selected yet.
    if store.active_league_id().is_none() {
        if let Some(default_id) = &default_league_id {
            store.set_active_league_id(default_id)?;
            if verbose {
                println!("✓ Active league defaulted to {}", default_id);
            }
        }
    }

    if let Some(league_id) = set_active {
        if leagues.iter().any(|l| l.id == league_id) {
            store.set_active_league_id(&league_id)?;
            println!("✓ Active league set to {}", league_id);
        } else {
            println!("⚠ Unknown league {}; active league unchanged", league_id);
        }
    }

    if needs_import {
        println!("⚠ This account still needs a league import on the backend");
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&leagues)?);
        return Ok(());
    }

    if leagues.is_empty() {
        println!("No leagues found.");
        return Ok(());
    }

    let active = store.active_league_id();
    for league in &leagues {
        let marker = if Some(&league.id) == active.as_ref() {
            "*"
        } else {
            " "
        };
        println!("{} {}  {}", marker, league.id, league.name);
    }

    Ok(())
}
