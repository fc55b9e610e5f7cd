//! Player roster command implementation

use std::path::PathBuf;

use crate::{PlayersOptions, Result, SleeperClient};

use super::print_json;

/// Print the player roster, going through the local cache unless `no_save`.
pub async fn handle_players(
    client: &mut SleeperClient,
    path: Option<PathBuf>,
    no_save: bool,
    refresh: bool,
) -> Result<()> {
    let defaults = PlayersOptions::default();
    let opts = PlayersOptions {
        path: path.unwrap_or(defaults.path),
        save_local: !no_save,
        force_update: refresh,
    };

    let players = client.players(&opts).await?;
    if opts.save_local {
        eprintln!("Player cache: {}", opts.path.display()); // tarpaulin::skip
    }
    print_json(&players)
}
