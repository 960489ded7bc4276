//! Runner Leaderboard demo host
//!
//! Plays a few simulated runs against the leaderboard with scripted input at
//! a fixed 60 Hz frame rate, then prints the final board.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use runner_leaderboard::{
    BoardPhase, Leaderboard, LeaderboardEvent, LeaderboardSettings, RunOutcome, TickInput,
};

/// Frame time the demo drives the board with
const FRAME_DT: f32 = 1.0 / 60.0;
/// Safety cap on frames spent on one results screen
const MAX_FRAMES_PER_RUN: u32 = 60 * 120;
const DEMO_SEED: u64 = 0x5eed_1ead;
const RUNS: usize = 3;

fn main() {
    env_logger::init();
    log::info!("Runner Leaderboard demo starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match LeaderboardSettings::load_json(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load settings from {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => LeaderboardSettings::default(),
    };

    if let Some(dir) = settings.data_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            log::error!("Could not create {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    let mut board = match Leaderboard::open(settings) {
        Ok(board) => board,
        Err(e) => {
            log::error!("Leaderboard unavailable: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = Pcg32::seed_from_u64(DEMO_SEED);
    for run in 1..=RUNS {
        let score = rng.random_range(0..200_000u64);
        println!("Run {run}: scored {score}");
        play_results_screen(&mut board, &mut rng, score);
    }

    match serde_json::to_string_pretty(&board.render()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not serialize board: {}", e),
    }
    for (rank, entry) in board.table().entries().iter().enumerate() {
        println!("{:>2}. {} {:>8}", rank + 1, entry.initials, entry.score);
    }
}

/// Drive one results screen from game over until the player continues
fn play_results_screen(board: &mut Leaderboard, rng: &mut Pcg32, score: u64) {
    match board.report_run_ended(score) {
        Ok(RunOutcome::Qualified { slot }) => println!("  High score! Slot {}", slot + 1),
        Ok(RunOutcome::NotQualified) => println!("  Did not qualify"),
        Err(e) => {
            log::warn!("Run not recorded: {}", e);
            return;
        }
    }

    let mut frames = 0;
    // Alternate between a held axis and neutral so each press registers
    let mut held = 0.0f32;
    loop {
        let input = if board.phase() == BoardPhase::Editing && held == 0.0 && rng.random_bool(0.3) {
            held = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            TickInput { axis: held, any_key: false }
        } else {
            held = 0.0;
            TickInput {
                axis: 0.0,
                any_key: rng.random_bool(0.05),
            }
        };
        board.tick(&input, FRAME_DT);

        let mut done = false;
        for event in board.drain_events() {
            println!("  {event:?}");
            if event == LeaderboardEvent::ContinueRequested {
                done = true;
            }
        }
        frames += 1;
        if done || frames >= MAX_FRAMES_PER_RUN {
            break;
        }
    }

    if let Err(e) = board.close() {
        log::warn!("Leaderboard not saved: {}", e);
    }
    for event in board.drain_events() {
        println!("  {event:?}");
    }
}
