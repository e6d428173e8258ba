//! Data-driven game balance
//!
//! Every gameplay parameter the simulation reads lives here, so a host can
//! load overrides from a JSON file without recompiling. Defaults match the
//! reference constants in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay parameters for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield width in playfield units
    pub playfield_width: f32,
    /// Playfield height, ground band included
    pub playfield_height: f32,
    /// Ground band height reserved at the bottom
    pub ground_height: f32,

    /// Edge length of the bird's square bounding box
    pub bird_size: f32,
    /// Fixed horizontal position of the bird's left edge
    pub bird_x: f32,
    /// Vertical start position on (re)start
    pub bird_start_y: f32,

    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity a flap replaces the current velocity with (negative = up)
    pub flap_impulse: f32,

    /// Horizontal advance per tick
    pub pipe_speed: f32,
    pub pipe_width: f32,
    /// Horizontal spacing between consecutive pairs
    pub pipe_spacing: f32,
    /// Live pair count the obstacle manager maintains
    pub pipe_pair_target: usize,
    /// Inclusive draw range for the vertical gap
    pub gap_min: i32,
    pub gap_max: i32,
    /// Inclusive draw range for the top pipe height
    pub pipe_height_min: i32,
    pub pipe_height_max: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            bird_size: BIRD_SIZE,
            bird_x: BIRD_X,
            bird_start_y: BIRD_START_Y,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_spacing: PIPE_SPACING,
            pipe_pair_target: PIPE_PAIR_TARGET,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            pipe_height_min: PIPE_HEIGHT_MIN,
            pipe_height_max: PIPE_HEIGHT_MAX,
        }
    }
}

impl Tuning {
    /// Top of the ground band
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Highest y the bird's top edge can reach before the floor clamp
    #[inline]
    pub fn bird_floor(&self) -> f32 {
        self.ground_y() - self.bird_size
    }

    /// Load tuning overrides from a JSON file, falling back to defaults.
    ///
    /// Missing file means no overrides; a malformed file is ignored with a
    /// warning rather than aborting the run. Fields absent from the file keep
    /// their default values.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.playfield_width, 400.0);
        assert_eq!(tuning.playfield_height, 600.0);
        assert_eq!(tuning.ground_height, 100.0);
        assert_eq!(tuning.bird_x, 100.0);
        assert_eq!(tuning.bird_start_y, 250.0);
        assert_eq!(tuning.gravity, 1.0);
        assert_eq!(tuning.flap_impulse, -12.0);
        assert_eq!(tuning.pipe_speed, 5.0);
        assert_eq!(tuning.pipe_width, 60.0);
        assert_eq!(tuning.pipe_spacing, 200.0);
        assert_eq!(tuning.pipe_pair_target, 3);
        assert_eq!(tuning.gap_min, 120);
        assert_eq!(tuning.gap_max, 180);
        assert_eq!(tuning.pipe_height_min, 50);
        assert_eq!(tuning.pipe_height_max, 299);
    }

    #[test]
    fn test_derived_bounds() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ground_y(), 500.0);
        assert_eq!(tuning.bird_floor(), 470.0);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 2.0}"#).unwrap();
        assert_eq!(tuning.gravity, 2.0);
        assert_eq!(tuning.pipe_speed, 5.0);
        assert_eq!(tuning.pipe_pair_target, 3);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load("/nonexistent/gapwing_tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
