//! Full NFL player roster with a local one-day file cache.

use std::path::PathBuf;
use std::time::SystemTime;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::cache::{
    is_fresh, players_cache_path, try_read_to_string, write_string, PLAYERS_MAX_AGE,
};
use crate::sleeper::client::SleeperClient;
use crate::Result;

#[derive(Debug, Clone)]
pub struct PlayersOptions {
    pub path: PathBuf,
    /// Read from and write to `path`; when false the API is always hit.
    pub save_local: bool,
    /// Ignore a fresh cache and fetch anyway.
    pub force_update: bool,
}

impl Default for PlayersOptions {
    fn default() -> Self {
        Self {
            path: players_cache_path(),
            save_local: true,
            force_update: false,
        }
    }
}

impl SleeperClient {
    /// The player roster, reusing the cached file unless it is a day old.
    ///
    /// A failed cache write is logged and the fetched data is still returned.
    pub async fn players(&mut self, opts: &PlayersOptions) -> Result<Option<Value>> {
        if !opts.save_local {
            return self.fetch_players().await;
        }

        if !opts.force_update && is_fresh(&opts.path, PLAYERS_MAX_AGE, SystemTime::now()) {
            if let Some(s) = try_read_to_string(&opts.path) {
                match serde_json::from_str::<Value>(&s) {
                    Ok(cached) => {
                        debug!(path = %opts.path.display(), "using cached player roster");
                        return Ok(Some(cached));
                    }
                    Err(e) => {
                        warn!(
                            path = %opts.path.display(),
                            cause = %e,
                            "discarding unreadable player cache"
                        );
                    }
                }
            }
        }

        let data = self.fetch_players().await?;
        if let Some(players) = &data {
            let written = serde_json::to_string_pretty(players)
                .map_err(std::io::Error::from)
                .and_then(|json| write_string(&opts.path, &json));
            if let Err(e) = written {
                warn!(path = %opts.path.display(), cause = %e, "could not write player cache");
            }
        }
        Ok(data)
    }
}
