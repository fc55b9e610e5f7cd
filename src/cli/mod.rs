//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DraftId, LeagueId, Season, UserId, Week};

use crate::config::{ClientConfig, LogConfig, SLEEPER_BASE_URL};

/// Client and logging options shared by every command
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Return nothing instead of failing when a response is not valid JSON.
    #[clap(long, global = true)]
    pub no_raise: bool,

    /// Physical attempts per request, including the first.
    #[clap(long, global = true, default_value_t = 3)]
    pub max_attempts: u32,

    /// Seconds to wait before every request.
    #[clap(long, global = true, default_value_t = 0.0)]
    pub throttle: f64,

    /// Log filter, e.g. `info` or `sleeper_ffl=debug` (RUST_LOG overrides).
    #[clap(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Append logs to this file instead of stderr.
    #[clap(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// API root, for mirrors and testing.
    #[clap(long, global = true, default_value = SLEEPER_BASE_URL, hide = true)]
    pub base_url: String,
}

impl GlobalOpts {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .base_url(self.base_url.as_str())
            .raise_errors(!self.no_raise)
            .max_attempts(self.max_attempts)
            .throttle_secs(self.throttle)
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            file: self.log_file.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Current NFL season, week and phase.
    NflState,

    /// A single league.
    League {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// A league and every previous season of it, newest first.
    LeagueHistory {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// Users in a league.
    Users {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// Rosters in a league.
    Rosters {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// Transactions for one week, or the whole season when no week is given.
    Transactions {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Single week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Only walk the weeks this season has had so far.
        #[clap(long, short, conflicts_with = "week")]
        season: Option<Season>,
    },

    /// Matchups for one week, or every week keyed by week number.
    Matchups {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Single week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Only walk the weeks this season has had so far.
        #[clap(long, short, conflicts_with = "week")]
        season: Option<Season>,
    },

    /// Drafts for a league.
    Drafts {
        /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// A user by ID or username.
    User {
        user_id: UserId,
    },

    /// A user's leagues for one season (default: current), or all of them.
    UserLeagues {
        user_id: UserId,

        /// Season year (e.g. 2023).
        #[clap(long, short)]
        season: Option<Season>,

        /// Every season since 2017.
        #[clap(long, conflicts_with = "season")]
        all: bool,
    },

    /// A user's drafts for one season (default: current).
    UserDrafts {
        user_id: UserId,

        /// Season year (e.g. 2023).
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// A single draft.
    Draft {
        draft_id: DraftId,
    },

    /// Every pick in a draft.
    DraftPicks {
        draft_id: DraftId,
    },

    /// The full NFL player roster (cached locally for a day).
    Players {
        /// Cache file (default: ~/.cache/sleeper-ffl/players.json).
        #[clap(long)]
        path: Option<PathBuf>,

        /// Skip the local cache entirely.
        #[clap(long)]
        no_save: bool,

        /// Refetch even if the cache is fresh.
        #[clap(long)]
        refresh: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper Fantasy Football CLI")]
pub struct Sleeper {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Sleeper
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
