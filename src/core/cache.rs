//! File system helpers for locally cached API payloads.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

/// How long a cached player roster stays usable.
pub const PLAYERS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Path: ~/.cache/sleeper-ffl/players.json
pub fn players_cache_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("sleeper-ffl").join("players.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// True when `path` exists and was modified less than `max_age` before `now`.
///
/// A modification time in the future counts as fresh.
pub fn is_fresh(path: &Path, max_age: Duration, now: SystemTime) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };
    match now.duration_since(modified) {
        Ok(age) => age < max_age,
        Err(_) => true,
    }
}
