//! Runner Leaderboard - high score table for an endless runner
//!
//! Core modules:
//! - `highscores`: Ranked eight-slot table and score insertion
//! - `persistence`: Text file format, atomic save, corruption detection
//! - `board`: Leaderboard state machine (initials entry, host events)
//! - `display`: Render snapshot for an external view
//! - `settings`: Construction-time configuration

pub mod board;
pub mod display;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod settings;

pub use board::{BoardPhase, Leaderboard, LeaderboardEvent, RunOutcome, TickInput};
pub use error::{LeaderboardError, StoreError};
pub use highscores::{Entry, Initials, NUM_SLOTS, Table};
pub use settings::LeaderboardSettings;
