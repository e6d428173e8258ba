//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step. The host drains whatever
//! input it has decoded into a [`TickInput`] and hands it over, so commands
//! land atomically between ticks and no tick ever observes a half-applied
//! command.

use super::collision::judge;
use super::state::{GamePhase, GameState};

/// One-shot command flags for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Apply an upward impulse (honored only while playing)
    pub flap: bool,
    /// Start a fresh run (honored only after game over)
    pub restart: bool,
}

/// Advance the game state by one tick.
///
/// While playing: integrate the body, march the pipes, recycle and refill,
/// then judge collisions and passes. A collision freezes everything at this
/// tick's values and flips the phase to game over. After game over the only
/// command that still lands is `restart`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
            log::info!("Restarted (seed {})", state.seed);
        }
        return;
    }

    state.time_ticks += 1;

    if input.flap {
        state.bird.flap(&state.tuning);
    }

    state.bird.integrate(&state.tuning);
    state.pipes.advance(state.tuning.pipe_speed);
    state.pipes.recycle_and_refill(&state.tuning, &mut state.rng);

    let body = state.bird.rect(&state.tuning);
    let outcome = judge(&body, &mut state.pipes);

    state.score += outcome.passes;
    if outcome.collided {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
    }
}
