//! Leaderboard persistence
//!
//! Features:
//! - Plain-text `rank:initials:score` line format
//! - Atomic replace (temp file → rename)
//! - Corruption detection, with reset to defaults handled by the caller

pub mod format;
pub mod store;

pub use format::{ParseError, parse, serialize};
pub use store::FileStore;
