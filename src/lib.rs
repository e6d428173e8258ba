//! Gapwing - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, window creation and key-to-command mapping are host concerns.
//! The library exposes a pure tick-driven core plus read-only snapshots for
//! whatever shell drives it.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal tick interval for interactive hosts (~50 ticks/second)
    pub const TICK_INTERVAL_MS: u64 = 20;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Ground band reserved at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Bird defaults - the bird never moves horizontally, the world scrolls
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_SIZE: f32 = 30.0;
    pub const BIRD_START_Y: f32 = 250.0;

    /// Physics, in per-tick units (gravity is units/tick² applied once per tick)
    pub const GRAVITY: f32 = 1.0;
    pub const FLAP_IMPULSE: f32 = -12.0;

    /// Pipe defaults
    pub const PIPE_SPEED: f32 = 5.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_SPACING: f32 = 200.0;
    pub const PIPE_PAIR_TARGET: usize = 3;

    /// Inclusive draw range for the vertical gap between a pair's pipes
    pub const GAP_MIN: i32 = 120;
    pub const GAP_MAX: i32 = 180;
    /// Inclusive draw range for the top pipe's height
    pub const PIPE_HEIGHT_MIN: i32 = 50;
    pub const PIPE_HEIGHT_MAX: i32 = 299;
}
