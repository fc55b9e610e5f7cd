//! League command implementations

use crate::{LeagueId, Result, Season, SleeperClient, Week};

use super::{print_json, resolve_league_id};

pub async fn handle_league(client: &mut SleeperClient, league_id: Option<LeagueId>) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    print_json(&client.league(&league_id).await?)
}

pub async fn handle_league_history(
    client: &mut SleeperClient,
    league_id: Option<LeagueId>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    print_json(&client.league_history(&league_id).await?)
}

pub async fn handle_users(client: &mut SleeperClient, league_id: Option<LeagueId>) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    print_json(&client.league_users(&league_id).await?)
}

pub async fn handle_rosters(client: &mut SleeperClient, league_id: Option<LeagueId>) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    print_json(&client.league_rosters(&league_id).await?)
}

/// One week, the weeks a season has had so far, or all 18 weeks.
pub async fn handle_transactions(
    client: &mut SleeperClient,
    league_id: Option<LeagueId>,
    week: Option<Week>,
    season: Option<Season>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    match (week, season) {
        (Some(week), _) => print_json(&client.transactions(&league_id, week).await?),
        (None, Some(season)) => {
            print_json(&client.season_transactions_for(&league_id, season).await?)
        }
        (None, None) => print_json(&client.season_transactions(&league_id).await?),
    }
}

/// One week, or every week with matchups keyed by week number.
pub async fn handle_matchups(
    client: &mut SleeperClient,
    league_id: Option<LeagueId>,
    week: Option<Week>,
    season: Option<Season>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    match (week, season) {
        (Some(week), _) => print_json(&client.matchups(&league_id, week).await?),
        (None, Some(season)) => print_json(&client.season_matchups_for(&league_id, season).await?),
        (None, None) => print_json(&client.season_matchups(&league_id).await?),
    }
}
