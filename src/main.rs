//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ffl_research::{
    cli::{Commands, FflResearch, GetCmd},
    commands::{
        league_data::handle_league_data,
        player_data::{handle_player_data, PlayerDataParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FflResearch::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::LeagueData {
                refresh,
                set_active,
                json,
                verbose,
            } => handle_league_data(refresh, set_active, json, verbose).await?,

            GetCmd::PlayerData {
                filters,
                view,
                sort,
                asc,
                pages,
                json,
                debug,
                refresh,
            } => {
                handle_player_data(PlayerDataParams {
                    debug,
                    as_json: json,
                    league_id: filters.league_id,
                    season: filters.season,
                    week: filters.week,
                    position: filters.position,
                    search: filters.search,
                    view,
                    sort,
                    ascending: asc,
                    pages,
                    refresh,
                })
                .await?
            }
        },
    }

    Ok(())
}
