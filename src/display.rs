//! Render snapshot for an external leaderboard view
//!
//! The view binds each cell's text and visibility to its own widgets.

use serde::Serialize;

use crate::highscores::NUM_SLOTS;

/// One text widget: its content and whether it is shown this frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
    pub text: String,
    pub visible: bool,
}

impl DisplayCell {
    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub initials: [DisplayCell; 3],
    pub score: DisplayCell,
}

impl RowView {
    /// Initials as shown, hidden cells included
    pub fn initials_text(&self) -> String {
        self.initials.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Whole leaderboard as the view should draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Leaderboard panel shown at all
    pub visible: bool,
    /// Context line under the table
    pub message: String,
    pub rows: [RowView; NUM_SLOTS],
}
