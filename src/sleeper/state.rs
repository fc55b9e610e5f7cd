//! NFL season/state snapshot and the week bounds derived from it.
//!
//! The snapshot is fetched once when a client is built and never refreshed,
//! so a client kept alive across a week boundary keeps reporting the old week.

use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cli::types::time::{EIGHTEEN_WEEK_ERA, FIRST_SEASON};
use crate::{Result, Season, SleeperError, Week};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonPhase {
    Pre,
    Regular,
    Post,
    #[serde(other)]
    Off,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

fn de_flexible_u16<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::Text(s) => s.trim().parse().map_err(D::Error::custom)?,
    };
    u16::try_from(n).map_err(D::Error::custom)
}

fn de_season<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Season, D::Error> {
    de_flexible_u16(deserializer).map(Season)
}

fn de_week<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Week, D::Error> {
    de_flexible_u16(deserializer).map(Week)
}

/// Snapshot of `/state/nfl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonState {
    #[serde(rename = "season", deserialize_with = "de_season")]
    pub current_season: Season,
    #[serde(rename = "leg", deserialize_with = "de_week")]
    pub current_week: Week,
    #[serde(deserialize_with = "de_season")]
    pub league_create_season: Season,
    #[serde(rename = "season_type")]
    pub season_phase: SeasonPhase,
}

impl SeasonState {
    /// Decode the state endpoint's body; anything unusable is a construction failure.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(SleeperError::construction(format!(
                "expected a JSON object, got {}",
                value
            )));
        }
        Self::deserialize(value).map_err(|e| SleeperError::construction(e.to_string()))
    }

    /// Number of weeks of data a season can have.
    ///
    /// Seasons before 2021 had 17 weeks, later ones 18. The current season
    /// (and a just-created league season already in its regular phase) is
    /// only known through the current week.
    pub fn week_count_for_season(&self, season: Season) -> Result<Week> {
        if season > self.league_create_season {
            return Err(SleeperError::OutOfRange {
                season: season.as_u16(),
                league_create_season: self.league_create_season.as_u16(),
            });
        }

        let week = if season == self.current_season
            || (season == self.league_create_season && self.season_phase == SeasonPhase::Regular)
        {
            self.current_week
        } else if EIGHTEEN_WEEK_ERA <= season && season < self.current_season {
            Week::MAX
        } else if season < EIGHTEEN_WEEK_ERA {
            Week::new(17)
        } else {
            Week::new(1)
        };
        Ok(week)
    }

    /// Every season from the platform's first through the league creation season.
    pub fn seasons(&self) -> impl Iterator<Item = Season> {
        (FIRST_SEASON.as_u16()..=self.league_create_season.as_u16()).map(Season::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(current: u16, week: u16, create: u16, phase: SeasonPhase) -> SeasonState {
        SeasonState {
            current_season: Season::new(current),
            current_week: Week::new(week),
            league_create_season: Season::new(create),
            season_phase: phase,
        }
    }

    #[test]
    fn test_week_counts_mid_season() {
        let s = state(2023, 10, 2023, SeasonPhase::Regular);

        assert_eq!(s.week_count_for_season(Season::new(2023)).unwrap(), Week::new(10));
        assert_eq!(s.week_count_for_season(Season::new(2022)).unwrap(), Week::new(18));
        assert_eq!(s.week_count_for_season(Season::new(2021)).unwrap(), Week::new(18));
        assert_eq!(s.week_count_for_season(Season::new(2020)).unwrap(), Week::new(17));
        assert_eq!(s.week_count_for_season(Season::new(2017)).unwrap(), Week::new(17));
    }

    #[test]
    fn test_future_season_is_out_of_range() {
        let s = state(2023, 10, 2023, SeasonPhase::Regular);

        match s.week_count_for_season(Season::new(2024)) {
            Err(SleeperError::OutOfRange {
                season,
                league_create_season,
            }) => {
                assert_eq!(season, 2024);
                assert_eq!(league_create_season, 2023);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_create_season_ahead_of_current() {
        // Offseason: leagues for next year can already be created.
        let pre = state(2023, 0, 2024, SeasonPhase::Pre);
        assert_eq!(pre.week_count_for_season(Season::new(2024)).unwrap(), Week::new(1));
        assert_eq!(pre.week_count_for_season(Season::new(2023)).unwrap(), Week::new(0));

        let regular = state(2023, 3, 2024, SeasonPhase::Regular);
        assert_eq!(
            regular.week_count_for_season(Season::new(2024)).unwrap(),
            Week::new(3)
        );
    }

    #[test]
    fn test_from_value_accepts_sleeper_shape() {
        let value = json!({
            "week": 10,
            "leg": 10,
            "season": "2023",
            "season_type": "regular",
            "league_season": "2023",
            "previous_season": "2022",
            "season_start_date": "2023-09-07",
            "display_week": 10,
            "league_create_season": "2023"
        });

        let s = SeasonState::from_value(&value).unwrap();
        assert_eq!(s, state(2023, 10, 2023, SeasonPhase::Regular));
    }

    #[test]
    fn test_from_value_accepts_numeric_seasons_and_off_phase() {
        let value = json!({
            "season": 2024,
            "leg": "1",
            "league_create_season": 2025,
            "season_type": "off"
        });

        let s = SeasonState::from_value(&value).unwrap();
        assert_eq!(s.current_season, Season::new(2024));
        assert_eq!(s.current_week, Week::new(1));
        assert_eq!(s.season_phase, SeasonPhase::Off);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        for value in [json!(null), json!([]), json!("2023")] {
            match SeasonState::from_value(&value) {
                Err(SleeperError::Construction { .. }) => (),
                other => panic!("Expected Construction error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_value_rejects_missing_fields() {
        let value = json!({"season": "2023", "season_type": "regular"});
        assert!(matches!(
            SeasonState::from_value(&value),
            Err(SleeperError::Construction { .. })
        ));
    }

    #[test]
    fn test_seasons_range() {
        let s = state(2023, 10, 2023, SeasonPhase::Regular);
        let seasons: Vec<u16> = s.seasons().map(|s| s.as_u16()).collect();
        assert_eq!(seasons, (2017..=2023).collect::<Vec<_>>());
    }
}
