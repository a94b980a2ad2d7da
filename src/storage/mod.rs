//! Session storage for the research CLI
//!
//! Re-expresses the key-value surface the views depend on as files under
//! the user cache directory, organized into:
//! - `session`: the named keys (cached leagues with TTL, active league,
//!   user id, legacy scoring-rules blob)
//! - `rules_cache`: memory + disk cache for per-league scoring rules

pub mod rules_cache;
pub mod session;

pub use rules_cache::RulesCache;
pub use session::{CachedLeagues, SessionStore, LEAGUES_TTL_SECS};

use std::path::PathBuf;

/// Root directory for all session files: `~/.cache/ffl-research`.
pub fn session_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("ffl-research")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &std::path::Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &std::path::Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}
