//! HTTP client functions for the stats backend.
//!
//! All three endpoints are plain GETs returning JSON documents; see
//! [`crate::api::types`] for the shapes. Requests never write back.

use reqwest::Client;

use crate::api::types::{LeagueDiscovery, LeagueRules, Player, PlayersResponse, ScoringRulesDoc};
use crate::cli::types::{PositionFilter, Season, Week};
use crate::error::{FflError, Result};

/// Default base path for the stats backend.
pub const STATS_BASE_URL: &str = "https://stats.ffl-research.app/api/v1";

/// Environment variable overriding the base URL (self-hosted backends).
pub const BASE_URL_ENV_VAR: &str = "FFL_RESEARCH_API_URL";

/// Base URL from the environment, or the hosted default.
pub fn base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| STATS_BASE_URL.to_string())
}

/// Parameters for a players fetch.
#[derive(Debug, Clone)]
pub struct PlayersRequest {
    pub season: Season,
    pub week: Week,
    pub position: PositionFilter,
    pub limit: usize,
    pub debug: bool,
}

/// Fetch a page of players for a season/week window.
///
/// The `success: false` envelope is treated the same as a missing body:
/// the caller gets [`FflError::NoData`] and degrades to an empty view.
pub async fn get_players(client: &Client, request: &PlayersRequest) -> Result<Vec<Player>> {
    let url = format!("{}/players", base_url());
    let params = [
        ("year", request.season.to_string()),
        ("week", request.week.as_param()),
        ("position", request.position.to_string()),
        ("limit", request.limit.to_string()),
    ];

    let builder = client.get(&url).query(&params);

    if request.debug {
        if let Some(clone) = builder.try_clone() {
            let req = clone.build()?;
            eprintln!("URL => {}", req.url());
        }
    }

    let resp = builder
        .send()
        .await?
        .error_for_status()?
        .json::<PlayersResponse>()
        .await?;

    if !resp.success {
        return Err(FflError::NoData);
    }
    Ok(resp.data)
}

/// Fetch the per-league scoring rules, keyed by league id.
pub async fn get_scoring_rules(client: &Client) -> Result<LeagueRules> {
    let url = format!("{}/scoring-rules", base_url());

    let doc = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<ScoringRulesDoc>()
        .await?;

    Ok(doc.0)
}

/// Fetch the league/rules discovery document.
pub async fn get_league_data(client: &Client) -> Result<LeagueDiscovery> {
    let url = format!("{}/league-data", base_url());

    let doc = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<LeagueDiscovery>()
        .await?;

    Ok(doc)
}
