//! Time-related types for NFL seasons and weeks.

use crate::error::{Result, SleeperError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season the Sleeper platform has data for.
pub const FIRST_SEASON: Season = Season(2017);

/// First season played on the 18-week schedule.
pub const EIGHTEEN_WEEK_ERA: Season = Season(2021);

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The following season.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(SleeperError::InvalidSeason)
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    /// Longest regular season the league has played.
    pub const MAX: Week = Week(18);

    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim().parse().map(Self).map_err(SleeperError::InvalidWeek)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse() {
        let season: Season = "2023".parse().unwrap();
        assert_eq!(season.as_u16(), 2023);
        assert_eq!(season.next(), Season::new(2024));
    }

    #[test]
    fn test_season_parse_invalid() {
        match "twenty".parse::<Season>() {
            Err(SleeperError::InvalidSeason(_)) => (),
            other => panic!("Expected InvalidSeason, got {:?}", other),
        }
    }

    #[test]
    fn test_week_parse_and_display() {
        let week: Week = "7".parse().unwrap();
        assert_eq!(week.to_string(), "7");
        assert!("x".parse::<Week>().is_err());
        assert_eq!(Week::default(), Week::new(1));
    }

    #[test]
    fn test_season_ordering() {
        assert!(FIRST_SEASON < EIGHTEEN_WEEK_ERA);
        assert!(Season::new(2020) < EIGHTEEN_WEEK_ERA);
    }
}
