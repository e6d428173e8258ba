//! Game state and core simulation types
//!
//! All state that must be persisted for replay/determinism lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pipes::PipeField;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended on a collision; waiting for a restart command
    GameOver,
}

/// The player's body. Horizontal position is fixed - the world scrolls past.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge of the bounding box
    pub y: f32,
    /// Vertical velocity in units per tick (positive = down)
    pub vel: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            y: tuning.bird_start_y,
            vel: 0.0,
        }
    }

    /// Kick the body upward. The impulse replaces the current velocity
    /// outright rather than adding to it.
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vel = tuning.flap_impulse;
    }

    /// One step of constant-acceleration integration, then clamp into the
    /// playfield. The clamp replaces the position only; velocity keeps
    /// accumulating, so a grounded body stays pinned until the next flap.
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.vel += tuning.gravity;
        self.y += self.vel;
        self.y = self.y.clamp(0.0, tuning.bird_floor());
    }

    /// Bounding box for collision and rendering
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(tuning.bird_x, self.y, tuning.bird_size, tuning.bird_size)
    }
}

/// Read-only view of one completed tick, for rendering or replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub body: Rect,
    /// Every pipe rect in spawn order (top then bottom per pair)
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub phase: GamePhase,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay parameters this run was started with
    pub tuning: Tuning,
    /// State-owned RNG; every draw goes through here
    pub rng: Pcg32,
    pub bird: Bird,
    pub pipes: PipeField,
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks since the current run started
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new run with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new run with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut pipes = PipeField::new();
        pipes.reset(&tuning, &mut rng);

        Self {
            seed,
            bird: Bird::new(&tuning),
            tuning,
            rng,
            pipes,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    /// Reset for a fresh run. The RNG stream continues where it left off,
    /// so consecutive runs see different pipe layouts under one seed.
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.pipes.reset(&self.tuning, &mut self.rng);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
    }

    /// Read-only view of the most recently completed tick
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.bird.rect(&self.tuning),
            obstacles: self.pipes.rects(),
            score: self.score,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.y, 250.0);
        assert_eq!(state.bird.vel, 0.0);
        assert_eq!(state.pipes.pairs.len(), 3);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_flap_replaces_velocity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.vel = 9.0;
        bird.flap(&tuning);
        assert_eq!(bird.vel, -12.0);
        // Flapping while already rising also snaps to the impulse
        bird.vel = -3.0;
        bird.flap(&tuning);
        assert_eq!(bird.vel, -12.0);
    }

    #[test]
    fn test_integrate_steps() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.integrate(&tuning);
        assert_eq!(bird.vel, 1.0);
        assert_eq!(bird.y, 251.0);
        bird.integrate(&tuning);
        assert_eq!(bird.vel, 2.0);
        assert_eq!(bird.y, 253.0);
    }

    #[test]
    fn test_floor_clamp_keeps_velocity() {
        let tuning = Tuning::default();
        let mut bird = Bird {
            y: 470.0,
            vel: 30.0,
        };
        bird.integrate(&tuning);
        assert_eq!(bird.y, 470.0);
        // Position is clamped but velocity keeps growing
        assert_eq!(bird.vel, 31.0);
    }

    #[test]
    fn test_ceiling_clamp() {
        let tuning = Tuning::default();
        let mut bird = Bird { y: 5.0, vel: -12.0 };
        bird.integrate(&tuning);
        assert_eq!(bird.y, 0.0);
        assert_eq!(bird.vel, -11.0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let state = GameState::new(42);
        let snap = state.snapshot();
        assert_eq!(snap.body, Rect::new(100.0, 250.0, 30.0, 30.0));
        assert_eq!(snap.obstacles.len(), 6);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reset_restores_run_defaults() {
        let mut state = GameState::new(42);
        state.bird.y = 470.0;
        state.bird.vel = 40.0;
        state.score = 9;
        state.phase = GamePhase::GameOver;
        state.time_ticks = 1234;

        state.reset();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.y, 250.0);
        assert_eq!(state.bird.vel, 0.0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.pipes.pairs.len(), 3);
        assert_eq!(state.pipes.pairs[0].x(), 400.0);
        assert_eq!(state.seed, 42);
    }

    proptest! {
        #[test]
        fn prop_integration_law(y in 0.0f32..470.0, vel in -50.0f32..50.0) {
            let tuning = Tuning::default();
            let mut bird = Bird { y, vel };
            bird.integrate(&tuning);
            // vel' = vel + g, then y' = clamp(y + vel')
            prop_assert_eq!(bird.vel, vel + tuning.gravity);
            let unclamped = y + bird.vel;
            prop_assert_eq!(bird.y, unclamped.clamp(0.0, tuning.bird_floor()));
        }
    }
}
