//! User command implementations

use crate::{Result, Season, SleeperClient, UserId};

use super::print_json;

pub async fn handle_user(client: &mut SleeperClient, user_id: &UserId) -> Result<()> {
    print_json(&client.user(user_id).await?)
}

pub async fn handle_user_leagues(
    client: &mut SleeperClient,
    user_id: &UserId,
    season: Option<Season>,
    all: bool,
) -> Result<()> {
    if all {
        print_json(&client.all_user_leagues(user_id).await?)
    } else {
        print_json(&client.user_leagues(user_id, season).await?)
    }
}

pub async fn handle_user_drafts(
    client: &mut SleeperClient,
    user_id: &UserId,
    season: Option<Season>,
) -> Result<()> {
    print_json(&client.user_drafts(user_id, season).await?)
}
