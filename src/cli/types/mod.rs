//! Type-safe wrappers for Sleeper identifiers and NFL time units.

pub mod ids;
pub mod time;

pub use ids::{DraftId, LeagueId, UserId};
pub use time::{Season, Week};
