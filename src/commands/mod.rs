//! Command handlers behind `sleeper-ffl get ...`.

pub mod draft_data;
pub mod league_data;
pub mod player_data;
pub mod user_data;


use serde::Serialize;

use crate::{cli::GetCmd, LeagueId, Result, SleeperClient, SleeperError, LEAGUE_ID_ENV_VAR};

/// Use the given league ID, else `SLEEPER_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|s| LeagueId::new(s.trim()))
        })
        .ok_or_else(|| SleeperError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Pretty JSON for stdout; an absent result renders as `null`.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

/// Run one `get` subcommand against `client` and print its result.
pub async fn handle_get(client: &mut SleeperClient, cmd: GetCmd) -> Result<()> {
    match cmd {
        GetCmd::NflState => print_json(client.nfl_state()),
        GetCmd::League { league_id } => league_data::handle_league(client, league_id).await,
        GetCmd::LeagueHistory { league_id } => {
            league_data::handle_league_history(client, league_id).await
        }
        GetCmd::Users { league_id } => league_data::handle_users(client, league_id).await,
        GetCmd::Rosters { league_id } => league_data::handle_rosters(client, league_id).await,
        GetCmd::Transactions {
            league_id,
            week,
            season,
        } => league_data::handle_transactions(client, league_id, week, season).await,
        GetCmd::Matchups {
            league_id,
            week,
            season,
        } => league_data::handle_matchups(client, league_id, week, season).await,
        GetCmd::Drafts { league_id } => draft_data::handle_league_drafts(client, league_id).await,
        GetCmd::User { user_id } => user_data::handle_user(client, &user_id).await,
        GetCmd::UserLeagues {
            user_id,
            season,
            all,
        } => user_data::handle_user_leagues(client, &user_id, season, all).await,
        GetCmd::UserDrafts { user_id, season } => {
            user_data::handle_user_drafts(client, &user_id, season).await
        }
        GetCmd::Draft { draft_id } => draft_data::handle_draft(client, &draft_id).await,
        GetCmd::DraftPicks { draft_id } => draft_data::handle_draft_picks(client, &draft_id).await,
        GetCmd::Players {
            path,
            no_save,
            refresh,
        } => player_data::handle_players(client, path, no_save, refresh).await,
    }
}
