//! High score leaderboard table
//!
//! Fixed eight-slot table, always full, sorted by score descending.

use std::fmt;

use serde::{Serialize, Serializer};

/// Number of slots on the leaderboard
pub const NUM_SLOTS: usize = 8;

/// Letters available for initials, in cursor order
pub const ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Three uppercase letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Initials([u8; 3]);

impl Initials {
    /// Initials written into a freshly won slot
    pub const PLACEHOLDER: Initials = Initials(*b"AAA");

    /// Parse exactly three ASCII letters (case-insensitive, stored uppercase)
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    pub fn as_str(&self) -> &str {
        // Only ever holds ASCII uppercase
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Letter at position 0..=2
    pub fn char_at(&self, pos: usize) -> char {
        self.0[pos] as char
    }

    /// Alphabet index of the letter at `pos`
    pub fn letter_index(&self, pos: usize) -> usize {
        (self.0[pos] - b'A') as usize
    }

    /// Replace the letter at `pos` with `ALPHABET[letter]`
    pub fn set_letter(&mut self, pos: usize, letter: usize) {
        self.0[pos] = ALPHABET[letter % ALPHABET.len()];
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Initials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single high score entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub initials: Initials,
    pub score: u64,
}

impl Entry {
    pub fn new(initials: Initials, score: u64) -> Self {
        Self { initials, score }
    }
}

/// Shipped standings, also used whenever the saved file is missing or corrupt
pub const DEFAULT_ENTRIES: [(&str, u64); NUM_SLOTS] = [
    ("HAM", 150_000),
    ("BUR", 120_000),
    ("TJX", 100_000),
    ("WAS", 80_000),
    ("ADA", 70_000),
    ("JQA", 50_000),
    ("MAD", 40_000),
    ("PEG", 1),
];

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    entries: [Entry; NUM_SLOTS],
}

impl Table {
    /// Build a table from ranked entries; `Err(slot)` names the first slot
    /// that outscores the one above it
    pub fn from_entries(entries: [Entry; NUM_SLOTS]) -> Result<Self, usize> {
        if let Some(slot) = (1..NUM_SLOTS).find(|&i| entries[i].score > entries[i - 1].score) {
            return Err(slot);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry; NUM_SLOTS] {
        &self.entries
    }

    pub fn get(&self, slot: usize) -> Option<&Entry> {
        self.entries.get(slot)
    }

    pub fn lowest_score(&self) -> u64 {
        self.entries[NUM_SLOTS - 1].score
    }

    /// Get the slot a score would take (0-indexed, None if it doesn't beat the last place)
    ///
    /// Ties never displace: an equal score lands below the existing entry.
    pub fn rank_for(&self, score: u64) -> Option<usize> {
        if score <= self.lowest_score() {
            return None;
        }
        let mut slot = NUM_SLOTS - 1;
        while slot > 0 && score > self.entries[slot - 1].score {
            slot -= 1;
        }
        Some(slot)
    }

    /// Shift `[slot, NUM_SLOTS - 2]` down one, drop the last entry and write `entry` at `slot`
    ///
    /// Callers pass the slot returned by `rank_for(entry.score)`.
    pub(crate) fn insert_at(&mut self, slot: usize, entry: Entry) {
        debug_assert_eq!(self.rank_for(entry.score), Some(slot));
        self.entries.copy_within(slot..NUM_SLOTS - 1, slot + 1);
        self.entries[slot] = entry;
    }

    /// Overwrite the initials of a slot (scores are never edited)
    pub(crate) fn set_initials(&mut self, slot: usize, initials: Initials) {
        self.entries[slot].initials = initials;
    }

    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].score >= w[1].score)
    }
}

impl Default for Table {
    fn default() -> Self {
        let entries = DEFAULT_ENTRIES.map(|(initials, score)| {
            Entry::new(Initials::parse(initials).unwrap_or(Initials::PLACEHOLDER), score)
        });
        Self { entries }
    }
}
