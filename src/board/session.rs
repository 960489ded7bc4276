//! Initials entry session state

use serde::Serialize;

use crate::highscores::{ALPHABET, Initials};

/// What a confirm did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// Moved on to this character position
    Advanced(usize),
    /// All three characters committed
    Complete,
}

/// An in-progress initials entry for one slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditSession {
    slot: usize,
    char_pos: usize,
    /// Index into `ALPHABET` of the letter under the cursor
    cursor: usize,
    blink_visible: bool,
    blink_timer: f32,
}

impl EditSession {
    /// Start editing `slot` at the first character, cursor on its current letter
    pub fn new(slot: usize, initials: &Initials) -> Self {
        Self {
            slot,
            char_pos: 0,
            cursor: initials.letter_index(0),
            blink_visible: true,
            blink_timer: 0.0,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn char_pos(&self) -> usize {
        self.char_pos
    }

    /// Letter the cursor is on
    pub fn candidate(&self) -> char {
        ALPHABET[self.cursor] as char
    }

    pub fn blink_visible(&self) -> bool {
        self.blink_visible
    }

    /// Accumulate frame time and toggle the cursor for each elapsed interval
    pub fn advance_blink(&mut self, dt: f32, interval: f32) {
        if interval <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.blink_timer += dt;
        if self.blink_timer < interval {
            return;
        }
        // One step regardless of frame length; repeated subtraction stalls once
        // the timer is large enough that `timer - interval == timer`
        let toggles = (self.blink_timer / interval).floor();
        self.blink_timer = self.blink_timer.rem_euclid(interval);
        if toggles % 2.0 == 1.0 {
            self.blink_visible = !self.blink_visible;
        }
    }

    /// Move the cursor one letter, wrapping at both ends
    pub fn step_cursor(&mut self, direction: i32) {
        let len = ALPHABET.len() as i32;
        self.cursor = (self.cursor as i32 + direction).rem_euclid(len) as usize;
    }

    /// Write the candidate into `initials` at the current position and move on
    pub fn confirm(&mut self, initials: &mut Initials) -> Confirm {
        initials.set_letter(self.char_pos, self.cursor);
        self.char_pos += 1;
        self.blink_visible = true;
        self.blink_timer = 0.0;
        if self.char_pos > 2 {
            return Confirm::Complete;
        }
        self.cursor = initials.letter_index(self.char_pos);
        Confirm::Advanced(self.char_pos)
    }
}
