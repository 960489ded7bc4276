//! Leaderboard: ranked table, initials entry and host signalling
//!
//! The host reports finished runs, calls `tick` once per frame while the
//! board is on screen, draws `render()`, and drains events after each call.

pub mod input;
pub mod session;
pub mod tick;

pub use input::AxisDebounce;
pub use session::{Confirm, EditSession};
pub use tick::{TickInput, tick};

use serde::Serialize;

use crate::display::{BoardView, DisplayCell, RowView};
use crate::error::{Result, StoreError, StoreResult};
use crate::highscores::{Entry, Initials, Table};
use crate::persistence::FileStore;
use crate::settings::LeaderboardSettings;

pub(crate) const MSG_HIGH_SCORE: &str = "HIGH SCORE! ENTER YOUR INITIALS";
pub(crate) const MSG_DID_NOT_QUALIFY: &str = "YOU LOSE. PRESS ANY KEY.";
pub(crate) const MSG_PRESS_ANY_KEY: &str = "PRESS ANY KEY";

/// What the leaderboard panel is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoardPhase {
    /// Not on screen
    Hidden,
    /// Player is typing initials into a new slot
    Editing,
    /// On screen, waiting for any input to continue
    AwaitingContinue,
}

/// Signals for the host, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LeaderboardEvent {
    /// Run made the board; initials entry opened on `slot`
    Qualified { slot: usize },
    /// Run did not beat the last place
    NotQualified { score: u64 },
    /// A character was committed; editing moved to `char_pos`
    EntryAdvanced { slot: usize, char_pos: usize },
    /// All three initials entered and the table handed to the store
    SessionComplete { slot: usize },
    /// Player pressed something on the results screen
    ContinueRequested,
    /// A save failed; the in-memory table is still correct
    SaveFailed { reason: String },
    /// Board left the screen
    Closed,
}

/// Result of reporting a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Qualified { slot: usize },
    NotQualified,
}

/// High score leaderboard with its file store
#[derive(Debug)]
pub struct Leaderboard {
    settings: LeaderboardSettings,
    store: FileStore,
    table: Table,
    session: Option<EditSession>,
    phase: BoardPhase,
    message: &'static str,
    axis: AxisDebounce,
    events: Vec<LeaderboardEvent>,
    /// Table differs from what was last saved
    dirty: bool,
}

impl Leaderboard {
    /// Load the saved table, reverting to defaults if it is missing or corrupt
    ///
    /// A file that exists but cannot be read is reported, never overwritten.
    /// Otherwise fails only if the defaults cannot be written and read back.
    pub fn open(settings: LeaderboardSettings) -> Result<Self> {
        settings.validate()?;
        let store = FileStore::new(settings.data_path.clone());
        let table = match store.load() {
            Ok(table) => table,
            Err(err) => {
                match &err {
                    StoreError::NotFound { .. } => {
                        log::warn!("Leaderboard data not found. Reverting to default. ({err})");
                    }
                    StoreError::Corrupt { .. } => {
                        log::warn!("Leaderboard data is corrupted. Reverting to default. ({err})");
                    }
                    _ => {
                        log::error!("Leaderboard data could not be read: {err}");
                        return Err(err.into());
                    }
                }
                store.wipe()?
            }
        };

        let axis = AxisDebounce::new(settings.axis_deadzone, settings.axis_delta_threshold);
        Ok(Self {
            settings,
            store,
            table,
            session: None,
            phase: BoardPhase::Hidden,
            message: "",
            axis,
            events: Vec::new(),
            dirty: false,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Slot `score` would take, without changing anything
    pub fn submit(&self, score: u64) -> Option<usize> {
        self.table.rank_for(score)
    }

    /// Record a finished run and put the board on screen
    ///
    /// A qualifying score shifts the lower entries down, drops the last one and
    /// opens initials entry on the new slot.
    pub fn report_run_ended(&mut self, score: u64) -> Result<RunOutcome> {
        if self.session.is_some() {
            return Err(crate::error::LeaderboardError::EntryInProgress);
        }

        let Some(slot) = self.submit(score) else {
            log::info!("Score {} did not make the leaderboard", score);
            self.phase = BoardPhase::AwaitingContinue;
            self.message = MSG_DID_NOT_QUALIFY;
            self.events.push(LeaderboardEvent::NotQualified { score });
            return Ok(RunOutcome::NotQualified);
        };

        log::info!("Score {} qualifies for slot {}", score, slot);
        let entry = Entry::new(Initials::PLACEHOLDER, score);
        self.table.insert_at(slot, entry);
        self.dirty = true;
        self.session = Some(EditSession::new(slot, &entry.initials));
        self.phase = BoardPhase::Editing;
        self.message = MSG_HIGH_SCORE;
        self.events.push(LeaderboardEvent::Qualified { slot });
        Ok(RunOutcome::Qualified { slot })
    }

    /// Advance one frame; see [`tick::tick`]
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        tick::tick(self, input, dt);
    }

    /// Take the board off screen and save any unsaved changes
    ///
    /// An unfinished entry is abandoned and saved with whatever initials it has.
    pub fn close(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            log::info!(
                "Initials entry for slot {} abandoned at position {}",
                session.slot(),
                session.char_pos()
            );
        }
        self.phase = BoardPhase::Hidden;
        self.message = "";
        let saved = self.persist();
        self.events.push(LeaderboardEvent::Closed);
        saved.map_err(Into::into)
    }

    /// Everything the host needs to process since the last drain
    pub fn drain_events(&mut self) -> Vec<LeaderboardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot for the view
    pub fn render(&self) -> BoardView {
        let rows = std::array::from_fn(|slot| {
            let entry = &self.table.entries()[slot];
            let mut initials: [DisplayCell; 3] =
                std::array::from_fn(|pos| DisplayCell::shown(entry.initials.char_at(pos)));
            if let Some(session) = self.session.as_ref().filter(|s| s.slot() == slot) {
                initials[session.char_pos()] = DisplayCell {
                    text: session.candidate().to_string(),
                    visible: session.blink_visible(),
                };
            }
            RowView {
                initials,
                score: DisplayCell::shown(entry.score.to_string()),
            }
        });
        BoardView {
            visible: self.phase != BoardPhase::Hidden,
            message: self.message.to_string(),
            rows,
        }
    }

    /// Save if the table changed since the last successful save
    fn persist(&mut self) -> StoreResult<()> {
        if !self.dirty {
            log::debug!("Leaderboard unchanged, skipping save");
            return Ok(());
        }
        self.store.save(&self.table)?;
        self.dirty = false;
        Ok(())
    }
}
