//! Sleeper Fantasy Football API Library
//!
//! A read-only Rust client for the public [Sleeper](https://docs.sleeper.app/) API,
//! covering leagues, users, drafts and the NFL player roster.
//!
//! ## Features
//!
//! - **Resilient Calls**: Every request goes through one session that retries
//!   transient failures, throttles, counts attempts and logs exactly one event
//! - **Absent vs. Error**: Missing or empty resources come back as `None`;
//!   only undecodable responses (and invalid seasons) are errors
//! - **League History**: Walk a league back through its previous seasons
//! - **Season Aggregation**: Collect transactions and matchups across weeks,
//!   or a user's leagues across every season since 2017
//! - **Player Cache**: Keep the large player roster on disk for a day
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::{ClientConfig, LeagueId, SleeperClient};
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let mut client = SleeperClient::new(ClientConfig::default()).await?;
//!
//! let history = client
//!     .league_history(&LeagueId::new("289646328504385536"))
//!     .await?;
//! println!("{} seasons of history", history.len());
//! println!("{} requests made", client.ledger().total_attempts());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default league ID for the CLI:
//! ```bash
//! export SLEEPER_LEAGUE_ID=289646328504385536
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{DraftId, LeagueId, Season, UserId, Week};
pub use config::{ClientConfig, LogConfig, SLEEPER_BASE_URL};
pub use crate::core::{CallLedger, RequestOutcome, RetryConfig, TransportError};
pub use error::{Result, SleeperError};
pub use sleeper::{PlayersOptions, SeasonPhase, SeasonState, SleeperClient};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
