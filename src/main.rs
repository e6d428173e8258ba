//! Gapwing headless demo entry point
//!
//! Stands in for a real shell: no window, no keyboard, just the sim core
//! driven by a tiny autopilot that only ever looks at snapshots - the same
//! read-only view a renderer would get.

use std::time::{SystemTime, UNIX_EPOCH};

use gapwing::Tuning;
use gapwing::consts::TICK_INTERVAL_MS;
use gapwing::sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// Games to play before exiting
const DEMO_RUNS: u32 = 3;
/// Safety cap so a lucky autopilot cannot spin forever
const MAX_TICKS_PER_RUN: u64 = 50_000;

fn main() {
    env_logger::init();

    let seed = std::env::var("GAPWING_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let tuning = Tuning::load("gapwing_tuning.json");
    let mut state = GameState::with_tuning(seed, tuning);
    log::info!(
        "Gapwing demo starting with seed {seed} (nominal cadence {TICK_INTERVAL_MS}ms, demo runs uncapped)"
    );

    let mut runs = 0;
    while runs < DEMO_RUNS {
        let snap = state.snapshot();
        let mut input = TickInput::default();

        match snap.phase {
            GamePhase::Playing => {
                input.flap = autopilot(&snap);
                if state.time_ticks >= MAX_TICKS_PER_RUN {
                    log::info!("Run {} hit the tick cap, stopping", runs + 1);
                    break;
                }
            }
            GamePhase::GameOver => {
                log::info!("Run {} over: score {}", runs + 1, snap.score);
                runs += 1;
                if runs == DEMO_RUNS {
                    break;
                }
                input.restart = true;
            }
        }

        tick(&mut state, &input);
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Snapshot serialization failed: {e}"),
    }
}

/// Flap whenever the body has sunk below the center of the next gap.
///
/// Obstacles come top-then-bottom per pair, oldest first; the next hazard is
/// the first pair whose trailing edge is still ahead of the body.
fn autopilot(snap: &Snapshot) -> bool {
    let body = snap.body;
    let next_gap_center = snap
        .obstacles
        .chunks_exact(2)
        .find(|pair| pair[0].right() > body.min.x)
        .map(|pair| (pair[0].bottom() + pair[1].min.y) / 2.0);

    match next_gap_center {
        Some(center) => body.center().y > center,
        None => false,
    }
}
