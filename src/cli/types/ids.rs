//! ID types for Sleeper resources.
//!
//! Sleeper identifiers are numeric strings too large for `u32`, so they are
//! kept as strings and only ever substituted into URL paths.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for Sleeper league IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sleeper_ffl::LeagueId;
    ///
    /// let league_id = LeagueId::new("784512346781234560");
    /// assert_eq!(league_id.as_str(), "784512346781234560");
    /// assert!(!league_id.is_terminal());
    /// assert!(LeagueId::new("0").is_terminal());
    /// ```
    LeagueId
);

string_id!(
    /// Sleeper user ID (or username; the user endpoints accept both).
    UserId
);

string_id!(DraftId);

impl LeagueId {
    /// Sentinel the API uses for "no previous league".
    pub const NONE_SENTINEL: &'static str = "0";

    /// True when this id ends a `previous_league_id` chain.
    pub fn is_terminal(&self) -> bool {
        self.0.is_empty() || self.0 == Self::NONE_SENTINEL
    }
}
