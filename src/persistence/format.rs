//! Line format: `rank:initials:score`, one entry per line, rank 1 first

use crate::error::CorruptReason;
use crate::highscores::{Entry, Initials, NUM_SLOTS, Table};

/// Field separator within a line
pub const SEPARATOR: char = ':';

/// A parse failure with its 1-based line number (0 for whole-file problems)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub reason: CorruptReason,
}

impl ParseError {
    fn at(line: usize, reason: CorruptReason) -> Self {
        Self { line, reason }
    }
}

/// Parse one line into its destination slot and entry
pub fn parse_line(line: &str) -> Result<(usize, Entry), CorruptReason> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    let &[rank, initials, score] = fields.as_slice() else {
        return Err(CorruptReason::FieldCount(fields.len()));
    };

    let rank: usize = rank
        .parse()
        .map_err(|_| CorruptReason::InvalidRank(rank.to_string()))?;
    if !(1..=NUM_SLOTS).contains(&rank) {
        return Err(CorruptReason::RankOutOfRange(rank));
    }

    let initials = Initials::parse(initials)
        .ok_or_else(|| CorruptReason::InvalidInitials(initials.to_string()))?;

    // u64::from_str accepts a leading '+', the format does not
    if score.is_empty() || !score.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CorruptReason::InvalidScore(score.to_string()));
    }
    let score: u64 = score
        .parse()
        .map_err(|_| CorruptReason::InvalidScore(score.to_string()))?;

    Ok((rank - 1, Entry::new(initials, score)))
}

/// Parse a whole file into a table
pub fn parse(text: &str) -> Result<Table, ParseError> {
    let mut slots: [Option<Entry>; NUM_SLOTS] = [None; NUM_SLOTS];
    let mut count = 0;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let (slot, entry) = parse_line(line).map_err(|reason| ParseError::at(line_no, reason))?;
        if slots[slot].is_some() {
            return Err(ParseError::at(line_no, CorruptReason::DuplicateRank(slot + 1)));
        }
        slots[slot] = Some(entry);
        count += 1;
    }

    if count != NUM_SLOTS {
        return Err(ParseError::at(0, CorruptReason::EntryCount(count)));
    }
    // Every rank appeared exactly once, so every slot is filled
    let entries = slots.map(|slot| slot.unwrap_or(Entry::new(Initials::PLACEHOLDER, 0)));
    Table::from_entries(entries).map_err(|slot| ParseError::at(0, CorruptReason::Unsorted { slot }))
}

/// Serialize all slots in ascending rank order
pub fn serialize(table: &Table) -> String {
    table
        .entries()
        .iter()
        .enumerate()
        .map(|(slot, entry)| {
            format!("{}{SEPARATOR}{}{SEPARATOR}{}\n", slot + 1, entry.initials, entry.score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_TEXT: &str = "1:HAM:150000\n2:BUR:120000\n3:TJX:100000\n4:WAS:80000\n\
                                5:ADA:70000\n6:JQA:50000\n7:MAD:40000\n8:PEG:1\n";

    #[test]
    fn test_serialize_default_matches_documented_file() {
        assert_eq!(serialize(&Table::default()), DEFAULT_TEXT);
    }

    #[test]
    fn test_parse_default_file() {
        assert_eq!(parse(DEFAULT_TEXT).unwrap(), Table::default());
    }

    #[test]
    fn test_parse_uses_rank_field_for_slot() {
        // Same content, lines listed out of order
        let shuffled: String = DEFAULT_TEXT.lines().rev().map(|l| format!("{l}\n")).collect();
        assert_eq!(parse(&shuffled).unwrap(), Table::default());
    }

    #[test]
    fn test_parse_tolerates_crlf() {
        let crlf = DEFAULT_TEXT.replace('\n', "\r\n");
        assert_eq!(parse(&crlf).unwrap(), Table::default());
    }

    #[test]
    fn test_parse_line_missing_field() {
        assert_eq!(parse_line("4:WAS"), Err(CorruptReason::FieldCount(2)));
        assert_eq!(parse_line(""), Err(CorruptReason::FieldCount(1)));
        assert_eq!(parse_line("1:A:B:C"), Err(CorruptReason::FieldCount(4)));
    }

    #[test]
    fn test_parse_line_bad_rank() {
        assert_eq!(parse_line("x:HAM:1"), Err(CorruptReason::InvalidRank("x".into())));
        assert_eq!(parse_line("0:HAM:1"), Err(CorruptReason::RankOutOfRange(0)));
        assert_eq!(parse_line("9:HAM:1"), Err(CorruptReason::RankOutOfRange(9)));
        assert_eq!(parse_line("-1:HAM:1"), Err(CorruptReason::InvalidRank("-1".into())));
    }

    #[test]
    fn test_parse_line_bad_initials() {
        assert_eq!(parse_line("3:TJ:100000"), Err(CorruptReason::InvalidInitials("TJ".into())));
        assert_eq!(parse_line("3:T1X:100000"), Err(CorruptReason::InvalidInitials("T1X".into())));
    }

    #[test]
    fn test_parse_line_bad_score() {
        for bad in ["abc", "-5", "+5", "", " 5", "18446744073709551616"] {
            assert_eq!(
                parse_line(&format!("1:HAM:{bad}")),
                Err(CorruptReason::InvalidScore(bad.into())),
                "score {bad:?}"
            );
        }
        assert_eq!(parse_line("1:HAM:18446744073709551615").unwrap().1.score, u64::MAX);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let text = DEFAULT_TEXT.replace("5:ADA:70000", "5:ADA:seventy");
        let err = parse(&text).unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(err.reason, CorruptReason::InvalidScore("seventy".into()));
    }

    #[test]
    fn test_parse_rejects_missing_and_duplicate_ranks() {
        let short: String = DEFAULT_TEXT.lines().take(7).map(|l| format!("{l}\n")).collect();
        assert_eq!(parse(&short).unwrap_err().reason, CorruptReason::EntryCount(7));

        let dup = DEFAULT_TEXT.replace("8:PEG:1", "7:PEG:1");
        let err = parse(&dup).unwrap_err();
        assert_eq!(err.line, 8);
        assert_eq!(err.reason, CorruptReason::DuplicateRank(7));

        assert_eq!(parse("").unwrap_err().reason, CorruptReason::EntryCount(0));
    }

    #[test]
    fn test_parse_rejects_unsorted_scores() {
        let text = DEFAULT_TEXT.replace("8:PEG:1", "8:PEG:999999");
        assert_eq!(parse(&text).unwrap_err().reason, CorruptReason::Unsorted { slot: 7 });
    }
}
