//! Collision and scoring judge
//!
//! Runs once per tick against the post-advance obstacle field: any overlap
//! between the body and a pipe ends the run, and each pair scores exactly
//! once as its trailing edge crosses the body's fixed x position.

use super::pipes::PipeField;
use super::rect::Rect;

/// What the judge saw this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct JudgeOutcome {
    /// The body overlapped at least one pipe
    pub collided: bool,
    /// Pairs passed this tick (0 or 1 at the default speed and spacing)
    pub passes: u32,
}

/// Check the body against every pipe rect and collect pass-through events.
/// One collision is enough to end the run; simultaneous overlaps do not
/// compound.
pub fn judge(body: &Rect, field: &mut PipeField) -> JudgeOutcome {
    JudgeOutcome {
        collided: field.any_overlap(body),
        passes: field.collect_passes(body.min.x),
    }
}
