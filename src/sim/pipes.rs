//! Obstacle pipes: spawn, advance, recycle
//!
//! Pipes come in vertical pairs sharing an x position, separated by a gap the
//! bird must thread. The field keeps a fixed number of live pairs, marching
//! them left each tick and respawning past the rightmost pair as old ones
//! scroll off the left edge.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// A top/bottom pipe pair - the sole hazard and scoring unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    /// Top pipe, anchored at y = 0
    pub top: Rect,
    /// Bottom pipe, from below the gap down to the ground band
    pub bottom: Rect,
    /// Whether this pair has already been counted by the scoring judge
    pub scored: bool,
}

impl PipePair {
    /// Draw a fresh pair at the given x position
    pub fn spawn_at(x: f32, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let gap = rng.random_range(tuning.gap_min..=tuning.gap_max) as f32;
        let height = rng.random_range(tuning.pipe_height_min..=tuning.pipe_height_max) as f32;

        let top = Rect::new(x, 0.0, tuning.pipe_width, height);
        // The bottom pipe fills whatever is left between the gap and the
        // ground band; a tall top pipe plus a wide gap can leave nothing,
        // hence the clamp. A zero-area pipe has no collision surface.
        let bottom_height = (tuning.ground_y() - (height + gap)).max(0.0);
        let bottom = Rect::new(x, height + gap, tuning.pipe_width, bottom_height);

        Self {
            top,
            bottom,
            scored: false,
        }
    }

    /// Left edge shared by both pipes
    #[inline]
    pub fn x(&self) -> f32 {
        self.top.min.x
    }

    /// Right edge shared by both pipes
    #[inline]
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    fn advance(&mut self, speed: f32) {
        self.top.min.x -= speed;
        self.bottom.min.x -= speed;
    }
}

/// The ordered set of live pipe pairs (spawn order, oldest first)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipeField {
    /// Live pairs; the last one is always the rightmost
    pub pairs: Vec<PipePair>,
}

impl PipeField {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Clear and lay out the initial pairs starting at the right edge
    pub fn reset(&mut self, tuning: &Tuning, rng: &mut Pcg32) {
        self.pairs.clear();
        let mut x = tuning.playfield_width;
        for _ in 0..tuning.pipe_pair_target {
            self.pairs.push(PipePair::spawn_at(x, tuning, rng));
            x += tuning.pipe_spacing;
        }
    }

    /// March every pair left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for pair in &mut self.pairs {
            pair.advance(speed);
        }
    }

    /// Drop pairs whose right edge has crossed the left boundary, then top
    /// the field back up.
    ///
    /// At most one pair spawns per tick; at the default speed and spacing
    /// that is enough to hold the pair count steady. An empty field skips
    /// the refill since there is no rightmost pair to space off of.
    pub fn recycle_and_refill(&mut self, tuning: &Tuning, rng: &mut Pcg32) {
        self.pairs.retain(|pair| pair.right() >= 0.0);

        if self.pairs.len() < tuning.pipe_pair_target {
            if let Some(last) = self.pairs.last() {
                let x = last.x() + tuning.pipe_spacing;
                self.pairs.push(PipePair::spawn_at(x, tuning, rng));
                log::debug!("Spawned pipe pair at x={x}");
            }
        }
    }

    /// True if the body overlaps any pipe of any pair
    pub fn any_overlap(&self, body: &Rect) -> bool {
        self.pairs
            .iter()
            .any(|pair| body.overlaps(&pair.top) || body.overlaps(&pair.bottom))
    }

    /// Count pairs whose top pipe's trailing edge lines up with `body_x`
    /// this tick, marking each so it scores exactly once.
    ///
    /// Exact equality is intentional: all positions stay on the integer
    /// lattice, so with the default speed and spacing the alignment tick
    /// always exists. A range test would change when scores land.
    pub fn collect_passes(&mut self, body_x: f32) -> u32 {
        let mut passes = 0;
        for pair in &mut self.pairs {
            if !pair.scored && !pair.top.is_empty() && pair.top.right() == body_x {
                pair.scored = true;
                passes += 1;
            }
        }
        passes
    }

    /// Every pipe rect in spawn order, for snapshots and rendering
    pub fn rects(&self) -> Vec<Rect> {
        self.pairs
            .iter()
            .flat_map(|pair| [pair.top, pair.bottom])
            .collect()
    }
}
