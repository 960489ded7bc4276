//! Error types for the leaderboard and its file store

use std::path::PathBuf;

use thiserror::Error;

/// Why a leaderboard file was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptReason {
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),

    #[error("rank is not a number: {0:?}")]
    InvalidRank(String),

    #[error("rank {0} is outside 1..=8")]
    RankOutOfRange(usize),

    #[error("rank {0} appears more than once")]
    DuplicateRank(usize),

    #[error("initials must be exactly 3 letters: {0:?}")]
    InvalidInitials(String),

    #[error("score is not a non-negative integer: {0:?}")]
    InvalidScore(String),

    #[error("expected 8 entries, found {0}")]
    EntryCount(usize),

    #[error("slot {slot} scores higher than the slot above it")]
    Unsorted { slot: usize },

    #[error("file is not valid UTF-8")]
    NotUtf8,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("leaderboard file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("leaderboard file {} is corrupt at line {line}: {reason}", path.display())]
    Corrupt {
        path: PathBuf,
        line: usize,
        reason: CorruptReason,
    },

    #[error("leaderboard file {} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write leaderboard file {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not restore default leaderboard at {}: {cause}", path.display())]
    FatalRecovery {
        path: PathBuf,
        cause: Box<StoreError>,
    },
}

impl StoreError {
    /// True for failures the leaderboard recovers from by wiping to defaults
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::Corrupt { .. })
    }
}

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("an initials entry is already in progress")]
    EntryInProgress,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type Result<T> = std::result::Result<T, LeaderboardError>;
