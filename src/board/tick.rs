//! Per-frame leaderboard update
//!
//! Everything time-based (blink, debounce) is driven from here, one call per frame.

use super::session::Confirm;
use super::{BoardPhase, Leaderboard, LeaderboardEvent, MSG_PRESS_ANY_KEY};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw vertical axis, -1..=1 (+1 moves the cursor toward Z)
    pub axis: f32,
    /// Any key/button went down this tick
    pub any_key: bool,
}

/// Advance the leaderboard by one frame of `dt` seconds
pub fn tick(board: &mut Leaderboard, input: &TickInput, dt: f32) {
    // Sample every tick so a direction held before editing starts doesn't fire
    let pulse = board.axis.sample(input.axis);

    match board.phase {
        BoardPhase::Hidden => {}
        BoardPhase::AwaitingContinue => {
            if input.any_key {
                board.events.push(LeaderboardEvent::ContinueRequested);
            }
        }
        BoardPhase::Editing => edit(board, pulse, input.any_key, dt),
    }
}

fn edit(board: &mut Leaderboard, pulse: Option<i32>, any_key: bool, dt: f32) {
    let Some(session) = board.session.as_mut() else {
        board.phase = BoardPhase::AwaitingContinue;
        return;
    };

    session.advance_blink(dt, board.settings.blink_interval_secs);

    // A directional pulse consumes the tick; confirm only counts otherwise
    if let Some(direction) = pulse {
        session.step_cursor(direction);
        return;
    }
    if !any_key {
        return;
    }

    let slot = session.slot();
    let Some(entry) = board.table.get(slot) else {
        return;
    };
    let mut initials = entry.initials;
    let confirm = session.confirm(&mut initials);
    board.table.set_initials(slot, initials);
    board.dirty = true;

    match confirm {
        Confirm::Advanced(char_pos) => {
            log::debug!("Slot {} initials now {}, editing position {}", slot, initials, char_pos);
            board.events.push(LeaderboardEvent::EntryAdvanced { slot, char_pos });
        }
        Confirm::Complete => {
            log::info!("Initials {} entered for slot {}", initials, slot);
            board.session = None;
            board.phase = BoardPhase::AwaitingContinue;
            board.message = MSG_PRESS_ANY_KEY;
            if let Err(err) = board.persist() {
                log::warn!("High score kept in memory only: {err}");
                board.events.push(LeaderboardEvent::SaveFailed {
                    reason: err.to_string(),
                });
            }
            board.events.push(LeaderboardEvent::SessionComplete { slot });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::open_in;
    use tempfile::TempDir;

    const DT: f32 = 1.0 / 60.0;

    fn press(board: &mut Leaderboard) {
        tick(board, &TickInput { axis: 0.0, any_key: true }, DT);
    }

    fn axis(board: &mut Leaderboard, value: f32) {
        tick(board, &TickInput { axis: value, any_key: false }, DT);
    }

    #[test]
    fn test_three_confirms_commit_placeholder() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        board.report_run_ended(90_000).unwrap();
        board.drain_events();

        press(&mut board);
        press(&mut board);
        assert_eq!(board.phase(), BoardPhase::Editing);
        press(&mut board);

        assert_eq!(board.phase(), BoardPhase::AwaitingContinue);
        assert!(board.session().is_none());
        assert_eq!(board.table().entries()[3].initials.as_str(), "AAA");
        assert_eq!(
            board.drain_events(),
            [
                LeaderboardEvent::EntryAdvanced { slot: 3, char_pos: 1 },
                LeaderboardEvent::EntryAdvanced { slot: 3, char_pos: 2 },
                LeaderboardEvent::SessionComplete { slot: 3 },
            ]
        );
        let saved = std::fs::read_to_string(board.store().path()).unwrap();
        assert!(saved.contains("4:AAA:90000\n"));
    }

    #[test]
    fn test_up_then_confirm_commits_b() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        board.report_run_ended(150_001).unwrap();

        axis(&mut board, 1.0);
        assert_eq!(board.render().rows[0].initials[0].text, "B");
        // Still in the entry, nothing committed yet
        assert_eq!(board.table().entries()[0].initials.as_str(), "AAA");
        axis(&mut board, 0.0);
        press(&mut board);
        assert_eq!(board.table().entries()[0].initials.as_str(), "BAA");
        assert_eq!(board.session().unwrap().char_pos(), 1);
    }

    #[test]
    fn test_held_axis_steps_once() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        board.report_run_ended(150_001).unwrap();

        axis(&mut board, 1.0);
        axis(&mut board, 1.0);
        axis(&mut board, 1.0);
        assert_eq!(board.session().unwrap().candidate(), 'B');
        axis(&mut board, 0.0);
        axis(&mut board, 1.0);
        assert_eq!(board.session().unwrap().candidate(), 'C');
    }

    #[test]
    fn test_axis_takes_priority_over_confirm() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        board.report_run_ended(150_001).unwrap();

        tick(&mut board, &TickInput { axis: -1.0, any_key: true }, DT);
        let session = board.session().unwrap();
        assert_eq!(session.char_pos(), 0);
        assert_eq!(session.candidate(), 'Z');
    }

    #[test]
    fn test_full_entry_spells_name() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        board.report_run_ended(100_500).unwrap();

        // K = A + 10
        for _ in 0..10 {
            axis(&mut board, 1.0);
            axis(&mut board, 0.0);
        }
        press(&mut board);
        // Y = A - 2
        for _ in 0..2 {
            axis(&mut board, -1.0);
            axis(&mut board, 0.0);
        }
        press(&mut board);
        axis(&mut board, 1.0);
        axis(&mut board, 0.0);
        press(&mut board);

        assert_eq!(board.table().entries()[2].initials.as_str(), "KYB");
        assert_eq!(board.table().entries()[3].initials.as_str(), "TJX");
        let reloaded = board.store().load().unwrap();
        assert_eq!(&reloaded, board.table());
    }

    #[test]
    fn test_blink_hides_only_the_edited_cell() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        board.report_run_ended(150_001).unwrap();

        tick(&mut board, &TickInput::default(), 0.31);
        let view = board.render();
        assert!(!view.rows[0].initials[0].visible);
        assert!(view.rows[0].initials[1].visible);
        assert!(view.rows[1].initials[0].visible);

        // Advancing restarts the cursor visible on the next position
        press(&mut board);
        let view = board.render();
        assert!(view.rows[0].initials[0].visible);
        assert!(view.rows[0].initials[1].visible);
        tick(&mut board, &TickInput::default(), 0.2);
        assert!(board.render().rows[0].initials[1].visible);
    }

    #[test]
    fn test_any_key_while_awaiting_requests_continue() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        assert_eq!(board.report_run_ended(1).unwrap(), crate::board::RunOutcome::NotQualified);
        board.drain_events();

        axis(&mut board, 1.0);
        assert!(board.drain_events().is_empty());
        press(&mut board);
        assert_eq!(board.drain_events(), [LeaderboardEvent::ContinueRequested]);
        assert_eq!(board.table(), &crate::highscores::Table::default());
    }

    #[test]
    fn test_hidden_ignores_input() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        press(&mut board);
        axis(&mut board, 1.0);
        assert!(board.drain_events().is_empty());
        assert_eq!(board.phase(), BoardPhase::Hidden);
    }

    #[test]
    fn test_held_direction_before_entry_does_not_fire() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        axis(&mut board, 1.0);
        board.report_run_ended(150_001).unwrap();
        axis(&mut board, 1.0);
        assert_eq!(board.session().unwrap().candidate(), 'A');
    }

    #[test]
    fn test_save_failure_keeps_table_and_warns() {
        let dir = TempDir::new().unwrap();
        let mut board = open_in(&dir);
        board.report_run_ended(90_000).unwrap();
        board.drain_events();

        // Pull the directory out from under the store
        std::fs::remove_dir_all(dir.path()).unwrap();
        press(&mut board);
        press(&mut board);
        press(&mut board);

        let events = board.drain_events();
        assert!(matches!(events[2], LeaderboardEvent::SaveFailed { .. }));
        assert_eq!(events[3], LeaderboardEvent::SessionComplete { slot: 3 });
        assert_eq!(board.table().entries()[3].score, 90_000);
        assert!(board.table().is_sorted());
        assert!(board.has_unsaved_changes());

        // Storage comes back; close reconciles
        std::fs::create_dir_all(dir.path()).unwrap();
        board.close().unwrap();
        assert!(!board.has_unsaved_changes());
        assert_eq!(&board.store().load().unwrap(), board.table());
    }
}
