//! Error types for the fantasy football research CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid week: {week} (expected a week number or \"total\")")]
    InvalidWeek { week: String },

    #[error("Invalid season year: {season}")]
    InvalidSeason { season: String },

    #[error("Unknown sort column: {column}")]
    UnknownColumn { column: String },

    #[error("Invalid view mode: {mode} (expected cards, research, or leaders)")]
    InvalidViewMode { mode: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Stats API returned no data")]
    NoData,
}

impl From<anyhow::Error> for FflError {
    fn from(err: anyhow::Error) -> Self {
        FflError::Cache {
            message: err.to_string(),
        }
    }
}
