//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one tick)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pipes;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{JudgeOutcome, judge};
pub use pipes::{PipeField, PipePair};
pub use rect::Rect;
pub use state::{Bird, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
