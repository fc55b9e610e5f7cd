//! Sleeper API client: resource accessors over the resilient call core.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::core::{ApiSession, CallLedger, HttpTransport, RetryPolicy, Transport};
use crate::sleeper::state::SeasonState;
use crate::sleeper::urls::Endpoints;
use crate::{DraftId, LeagueId, Result, Season, SleeperError, UserId, Week};

/// Read-only client for the Sleeper fantasy football API.
///
/// Every method takes `&mut self`: the client owns its call ledger, and one
/// instance serves one caller at a time. Use separate instances for
/// parallel work.
///
/// Accessors return `Ok(None)` when the resource is missing, empty, or the
/// request failed after retries; see [`ApiSession::call`].
pub struct SleeperClient {
    pub(super) session: ApiSession,
    pub(super) endpoints: Endpoints,
    state: SeasonState,
    raw_state: Value,
}

impl SleeperClient {
    /// Build a client against the real network and load the NFL state.
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent, config.timeout)?;
        Self::with_transport(config, Box::new(transport)).await
    }

    /// Build a client over any transport and load the NFL state.
    ///
    /// Fails with [`SleeperError::Construction`] if the state cannot be
    /// loaded, whatever `raise_errors` says.
    pub async fn with_transport(
        config: ClientConfig,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        let mut session = ApiSession::new(
            transport,
            RetryPolicy::new(config.retry.clone()),
            config.error_policy(),
            config.throttle,
        );
        let endpoints = Endpoints::new(config.base_url.as_str());

        let raw_state = match session.call(&endpoints.nfl_state(), true).await {
            Ok(Some(value)) => value,
            Ok(None) => return Err(SleeperError::construction("state endpoint returned nothing")),
            Err(e) => return Err(SleeperError::construction(e.to_string())),
        };
        let state = SeasonState::from_value(&raw_state)?;

        Ok(Self {
            session,
            endpoints,
            state,
            raw_state,
        })
    }

    /// Season snapshot taken at construction.
    pub fn state(&self) -> &SeasonState {
        &self.state
    }

    /// The `/state/nfl` body exactly as received at construction.
    pub fn nfl_state(&self) -> &Value {
        &self.raw_state
    }

    pub fn ledger(&self) -> &CallLedger {
        self.session.ledger()
    }

    pub async fn league(&mut self, league_id: &LeagueId) -> Result<Option<Value>> {
        let url = self.endpoints.league(league_id);
        self.session.call(&url, true).await
    }

    pub async fn league_users(&mut self, league_id: &LeagueId) -> Result<Option<Value>> {
        let url = self.endpoints.league_users(league_id);
        self.session.call(&url, true).await
    }

    pub async fn league_rosters(&mut self, league_id: &LeagueId) -> Result<Option<Value>> {
        let url = self.endpoints.league_rosters(league_id);
        self.session.call(&url, true).await
    }

    /// Weeks without transactions are routine, so empty results log at info.
    pub async fn transactions(
        &mut self,
        league_id: &LeagueId,
        week: Week,
    ) -> Result<Option<Value>> {
        let url = self.endpoints.transactions(league_id, week);
        self.session.call(&url, false).await
    }

    pub async fn matchups(&mut self, league_id: &LeagueId, week: Week) -> Result<Option<Value>> {
        let url = self.endpoints.matchups(league_id, week);
        self.session.call(&url, true).await
    }

    pub async fn league_drafts(&mut self, league_id: &LeagueId) -> Result<Option<Value>> {
        let url = self.endpoints.league_drafts(league_id);
        self.session.call(&url, true).await
    }

    pub async fn user(&mut self, user_id: &UserId) -> Result<Option<Value>> {
        let url = self.endpoints.user(user_id);
        self.session.call(&url, true).await
    }

    /// Leagues a user played in during `season` (default: the current season).
    pub async fn user_leagues(
        &mut self,
        user_id: &UserId,
        season: Option<Season>,
    ) -> Result<Option<Value>> {
        let season = season.unwrap_or(self.state.current_season);
        let url = self.endpoints.user_leagues(user_id, season);
        self.session.call(&url, false).await
    }

    /// Drafts a user took part in during `season` (default: the current season).
    pub async fn user_drafts(
        &mut self,
        user_id: &UserId,
        season: Option<Season>,
    ) -> Result<Option<Value>> {
        let season = season.unwrap_or(self.state.current_season);
        let url = self.endpoints.user_drafts(user_id, season);
        self.session.call(&url, true).await
    }

    pub async fn draft(&mut self, draft_id: &DraftId) -> Result<Option<Value>> {
        let url = self.endpoints.draft(draft_id);
        self.session.call(&url, true).await
    }

    pub async fn draft_picks(&mut self, draft_id: &DraftId) -> Result<Option<Value>> {
        let url = self.endpoints.draft_picks(draft_id);
        self.session.call(&url, true).await
    }

    /// Full NFL player roster straight from the API (large; see [`players`](Self::players)).
    pub async fn fetch_players(&mut self) -> Result<Option<Value>> {
        let url = self.endpoints.players();
        self.session.call(&url, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ScriptedTransport;
    use crate::core::RetryConfig;
    use crate::sleeper::state::SeasonPhase;
    use serde_json::json;
    use std::time::Duration;

    const BASE: &str = "http://sleeper.test/v1";

    fn config() -> ClientConfig {
        ClientConfig::default()
            .base_url(BASE)
            .retry(RetryConfig::default().initial_backoff(Duration::ZERO))
    }

    fn state_body() -> Value {
        json!({
            "season": "2023",
            "leg": 10,
            "league_create_season": "2023",
            "season_type": "regular"
        })
    }

    #[tokio::test]
    async fn test_construction_loads_state_once() {
        let transport = ScriptedTransport::new();
        transport.respond_json(&format!("{BASE}/state/nfl"), state_body());

        let client = SleeperClient::with_transport(config(), Box::new(transport.clone()))
            .await
            .unwrap();

        assert_eq!(client.state().current_season, Season::new(2023));
        assert_eq!(client.state().season_phase, SeasonPhase::Regular);
        assert_eq!(client.nfl_state(), &state_body());
        assert_eq!(client.ledger().total_attempts(), 1);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_construction_fails_on_missing_state() {
        let transport = ScriptedTransport::new();
        transport.respond(&format!("{BASE}/state/nfl"), 500, "");

        let result = SleeperClient::with_transport(config(), Box::new(transport.clone())).await;

        assert!(matches!(result, Err(SleeperError::Construction { .. })));
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_construction_fails_on_bad_state_even_without_raising() {
        for body in ["[1, 2]", "not json", "null"] {
            let transport = ScriptedTransport::new();
            transport.respond(&format!("{BASE}/state/nfl"), 200, body);

            let result = SleeperClient::with_transport(
                config().raise_errors(false),
                Box::new(transport),
            )
            .await;

            assert!(
                matches!(result, Err(SleeperError::Construction { .. })),
                "body {body}"
            );
        }
    }

    #[tokio::test]
    async fn test_user_leagues_defaults_to_current_season() {
        let transport = ScriptedTransport::new();
        transport.respond_json(&format!("{BASE}/state/nfl"), state_body());
        transport.respond_json(
            &format!("{BASE}/user/42/leagues/nfl/2023"),
            json!([{"league_id": "1"}]),
        );
        let mut client = SleeperClient::with_transport(config(), Box::new(transport.clone()))
            .await
            .unwrap();

        let leagues = client.user_leagues(&UserId::new("42"), None).await.unwrap();
        assert_eq!(leagues, Some(json!([{"league_id": "1"}])));

        let older = client
            .user_leagues(&UserId::new("42"), Some(Season::new(2019)))
            .await
            .unwrap();
        assert_eq!(older, None);
        assert_eq!(transport.hits(&format!("{BASE}/user/42/leagues/nfl/2019")), 1);
    }

    #[tokio::test]
    async fn test_accessors_hit_expected_urls() {
        let transport = ScriptedTransport::new();
        transport.respond_json(&format!("{BASE}/state/nfl"), state_body());
        transport.respond_json(&format!("{BASE}/draft/d1/picks"), json!([{"pick_no": 1}]));
        let mut client = SleeperClient::with_transport(config(), Box::new(transport.clone()))
            .await
            .unwrap();

        let picks = client.draft_picks(&DraftId::new("d1")).await.unwrap();
        assert_eq!(picks, Some(json!([{"pick_no": 1}])));

        let users = client.league_users(&LeagueId::new("9")).await.unwrap();
        assert_eq!(users, None);
        assert_eq!(transport.hits(&format!("{BASE}/league/9/users")), 1);
        assert!(client.ledger().has_ever_failed());
    }
}
