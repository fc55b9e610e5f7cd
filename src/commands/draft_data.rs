//! Draft command implementations

use crate::{DraftId, LeagueId, Result, SleeperClient};

use super::{print_json, resolve_league_id};

pub async fn handle_league_drafts(
    client: &mut SleeperClient,
    league_id: Option<LeagueId>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    print_json(&client.league_drafts(&league_id).await?)
}

pub async fn handle_draft(client: &mut SleeperClient, draft_id: &DraftId) -> Result<()> {
    print_json(&client.draft(draft_id).await?)
}

pub async fn handle_draft_picks(client: &mut SleeperClient, draft_id: &DraftId) -> Result<()> {
    print_json(&client.draft_picks(draft_id).await?)
}
