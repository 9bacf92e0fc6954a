//! Hoppy Bunny entry point
//!
//! Runs a seeded session on the headless host with the autopilot tapping.
//!
//! Usage: `hoppy-bunny [tuning.json] [settings.json]`
//! Environment: `HOPPY_MODE` (classic|leveled), `HOPPY_SEED`,
//! `HOPPY_FRAMES`, `HOPPY_RUNS`, `RUST_LOG`.

use hoppy_bunny::audio::AudioManager;
use hoppy_bunny::consts::FIXED_DT;
use hoppy_bunny::game::{FrameInput, TouchPhase};
use hoppy_bunny::platform::{Autopilot, HeadlessHost};
use hoppy_bunny::{Game, GameMode, Settings, Tuning};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();
    log::info!("Hoppy Bunny (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let tuning = match args.first() {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            let mode = std::env::var("HOPPY_MODE")
                .ok()
                .and_then(|m| GameMode::from_str(&m))
                .unwrap_or_default();
            Tuning::for_mode(mode)
        }
    };
    let settings = args.get(1).map(Settings::load).unwrap_or_default();

    let seed: u64 = env_or("HOPPY_SEED", 0xB0B);
    let max_frames: u64 = env_or("HOPPY_FRAMES", 60 * 60 * 5);
    let max_runs: u32 = env_or("HOPPY_RUNS", 3);

    let mut game = Game::new(tuning, settings, seed, HeadlessHost::new(), AudioManager::default());
    let pilot = Autopilot::default();
    let mut pending_release = false;

    for _ in 0..max_frames {
        let mut input = FrameInput::default();
        if pending_release {
            input.restart_touch = Some(TouchPhase::Ended);
            pending_release = false;
        } else if !game.state().is_active() {
            if game.runs() >= max_runs {
                break;
            }
            input.restart_touch = Some(TouchPhase::Began);
            pending_release = true;
        } else {
            input.tap = pilot.should_tap(game.state(), game.tuning());
        }
        game.frame(&input, FIXED_DT);
    }

    let state = game.state();
    log::info!(
        "Stopped after {} runs; last run score {} ({:?}, tier {})",
        game.runs(),
        state.score,
        state.phase,
        state.tier.as_str()
    );

    println!("\nLeaderboard ({} mode):", game.tuning().mode.as_str());
    if game.highscores().is_empty() {
        println!("  (no goals cleared)");
    }
    for (i, entry) in game.highscores().entries.iter().enumerate() {
        println!("  #{:<2} {:>4}  {}", i + 1, entry.score, entry.tier.as_str());
    }
}
