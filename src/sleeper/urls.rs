//! URL templates for the Sleeper resources this client reads.

use crate::{DraftId, LeagueId, Season, UserId, Week};

/// Builds resource URLs under a base (the public API, or a mock server in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn nfl_state(&self) -> String {
        format!("{}/state/nfl", self.base)
    }

    pub fn league(&self, league_id: &LeagueId) -> String {
        format!("{}/league/{}", self.base, league_id)
    }

    pub fn league_users(&self, league_id: &LeagueId) -> String {
        format!("{}/league/{}/users", self.base, league_id)
    }

    pub fn league_rosters(&self, league_id: &LeagueId) -> String {
        format!("{}/league/{}/rosters", self.base, league_id)
    }

    pub fn transactions(&self, league_id: &LeagueId, week: Week) -> String {
        format!("{}/league/{}/transactions/{}", self.base, league_id, week)
    }

    pub fn matchups(&self, league_id: &LeagueId, week: Week) -> String {
        format!("{}/league/{}/matchups/{}", self.base, league_id, week)
    }

    pub fn league_drafts(&self, league_id: &LeagueId) -> String {
        format!("{}/league/{}/drafts", self.base, league_id)
    }

    pub fn user(&self, user_id: &UserId) -> String {
        format!("{}/user/{}", self.base, user_id)
    }

    pub fn user_leagues(&self, user_id: &UserId, season: Season) -> String {
        format!("{}/user/{}/leagues/nfl/{}", self.base, user_id, season)
    }

    pub fn user_drafts(&self, user_id: &UserId, season: Season) -> String {
        format!("{}/user/{}/drafts/nfl/{}", self.base, user_id, season)
    }

    pub fn draft(&self, draft_id: &DraftId) -> String {
        format!("{}/draft/{}", self.base, draft_id)
    }

    pub fn draft_picks(&self, draft_id: &DraftId) -> String {
        format!("{}/draft/{}/picks", self.base, draft_id)
    }

    pub fn players(&self) -> String {
        format!("{}/players/nfl", self.base)
    }
}
