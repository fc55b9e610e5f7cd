//! Sleeper fantasy football resources.
//!
//! - `client`: construction, season state and single-resource accessors
//! - `traverse`: league history, week-range and season-range aggregations
//! - `players`: player roster with a local file cache
//! - `state`: NFL state snapshot and week bounds
//! - `urls`: resource URL templates

pub mod client;
pub mod players;
pub mod state;
pub mod traverse;
pub mod urls;

pub use client::SleeperClient;
pub use players::PlayersOptions;
pub use state::{SeasonPhase, SeasonState};
pub use urls::Endpoints;
