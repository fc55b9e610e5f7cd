//! Multi-request aggregations built on the single-resource accessors.
//!
//! All of them issue their requests one after another and degrade to partial
//! or empty results when a step comes back absent. Only errors the call core
//! escalates (decode failures when raising) and out-of-range seasons abort.

use std::collections::{BTreeMap, HashSet};

use serde_json::Value;
use tracing::error;

use crate::core::events;
use crate::sleeper::client::SleeperClient;
use crate::{LeagueId, Result, Season, UserId, Week};

/// Append an array's items, or the value itself when it is not an array.
fn extend_flat(acc: &mut Vec<Value>, value: Value) {
    match value {
        Value::Array(items) => acc.extend(items),
        other => acc.push(other),
    }
}

/// Read `previous_league_id` from a league record.
///
/// Missing or null means "no predecessor". Anything but a string or number is malformed.
fn previous_league_id(record: &Value) -> std::result::Result<LeagueId, &'static str> {
    let Some(fields) = record.as_object() else {
        return Err("league record is not a JSON object");
    };
    match fields.get("previous_league_id") {
        None | Some(Value::Null) => Ok(LeagueId::new("")),
        Some(Value::String(id)) => Ok(LeagueId::new(id.as_str())),
        Some(Value::Number(id)) => Ok(LeagueId::new(id.to_string())),
        Some(_) => Err("previous_league_id is not a string"),
    }
}

fn all_weeks() -> impl Iterator<Item = Week> {
    (1..=Week::MAX.as_u16()).map(Week::new)
}

fn weeks_through(last: Week) -> impl Iterator<Item = Week> {
    (1..=last.as_u16()).map(Week::new)
}

impl SleeperClient {
    /// Follow `previous_league_id` back from `league_id`, newest first.
    ///
    /// Stops at an empty or `"0"` id, an absent fetch, a malformed record
    /// (kept, then logged), or an id already visited.
    pub async fn league_history(&mut self, league_id: &LeagueId) -> Result<Vec<Value>> {
        let mut history = Vec::new();
        let mut visited = HashSet::new();
        let mut next = league_id.clone();

        while !next.is_terminal() {
            let url = self.endpoints.league(&next);
            if !visited.insert(next.clone()) {
                error!(
                    url = %url,
                    cause = "previous_league_id cycle",
                    "stopping league history walk"
                );
                break;
            }

            let Some(record) = self.session.call(&url, true).await? else {
                break;
            };
            let previous = previous_league_id(&record);
            history.push(record);

            match previous {
                Ok(id) => next = id,
                Err(cause) => {
                    error!(url = %url, status = 200u16, cause, "malformed league record");
                    break;
                }
            }
        }

        Ok(history)
    }

    /// Every transaction in weeks 1 through 18, in week order.
    pub async fn season_transactions(&mut self, league_id: &LeagueId) -> Result<Vec<Value>> {
        self.transactions_over(league_id, all_weeks()).await
    }

    /// Transactions for the weeks `season` can have so far.
    pub async fn season_transactions_for(
        &mut self,
        league_id: &LeagueId,
        season: Season,
    ) -> Result<Vec<Value>> {
        let last = self.state().week_count_for_season(season)?;
        self.transactions_over(league_id, weeks_through(last)).await
    }

    /// Matchups keyed by week for weeks 1 through 18; empty weeks are left out.
    pub async fn season_matchups(&mut self, league_id: &LeagueId) -> Result<BTreeMap<Week, Value>> {
        self.matchups_over(league_id, all_weeks()).await
    }

    /// Matchups keyed by week for the weeks `season` can have so far.
    pub async fn season_matchups_for(
        &mut self,
        league_id: &LeagueId,
        season: Season,
    ) -> Result<BTreeMap<Week, Value>> {
        let last = self.state().week_count_for_season(season)?;
        self.matchups_over(league_id, weeks_through(last)).await
    }

    /// A user's leagues from 2017 through the league creation season.
    pub async fn all_user_leagues(&mut self, user_id: &UserId) -> Result<Vec<Value>> {
        let seasons: Vec<Season> = self.state().seasons().collect();
        let mut leagues = Vec::new();

        for season in seasons {
            if let Some(data) = self.user_leagues(user_id, Some(season)).await? {
                extend_flat(&mut leagues, data);
            }
        }

        if leagues.is_empty() {
            events::missing("all_user_leagues", &[user_id.as_str()], "User has no leagues!");
        }
        Ok(leagues)
    }

    async fn transactions_over(
        &mut self,
        league_id: &LeagueId,
        weeks: impl Iterator<Item = Week>,
    ) -> Result<Vec<Value>> {
        let mut transactions = Vec::new();
        for week in weeks {
            if let Some(data) = self.transactions(league_id, week).await? {
                extend_flat(&mut transactions, data);
            }
        }
        Ok(transactions)
    }

    async fn matchups_over(
        &mut self,
        league_id: &LeagueId,
        weeks: impl Iterator<Item = Week>,
    ) -> Result<BTreeMap<Week, Value>> {
        let mut by_week = BTreeMap::new();
        for week in weeks {
            if let Some(data) = self.matchups(league_id, week).await? {
                by_week.insert(week, data);
            }
        }
        Ok(by_week)
    }
}
