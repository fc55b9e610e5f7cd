//! Error types for the Sleeper API client

use thiserror::Error;

use crate::core::transport::TransportError;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to {url} failed with status {status} after retries")]
    Status { url: String, status: u16 },

    #[error("Request to {url} got no response after retries: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("The {season} season has not started yet (league creation season is {league_create_season})")]
    OutOfRange {
        season: u16,
        league_create_season: u16,
    },

    #[error("Failed to get NFL state: {message}")]
    Construction { message: String },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Invalid season: {0}")]
    InvalidSeason(#[source] std::num::ParseIntError),

    #[error("Invalid week: {0}")]
    InvalidWeek(#[source] std::num::ParseIntError),
}

impl SleeperError {
    /// Build a construction failure from any displayable cause.
    pub fn construction(message: impl Into<String>) -> Self {
        SleeperError::Construction {
            message: message.into(),
        }
    }
}
