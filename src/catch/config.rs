//! Difficulty tuning for the catch game.
//!
//! One record per tier, fixed at session start. The fall-speed range is the
//! only field a running session copies and mutates (the ramp); everything
//! else is read in place.

use crate::difficulty::Difficulty;

/// Inclusive fall-speed bounds (px/s)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

/// Tuning parameters for one difficulty tier
#[derive(Debug, Clone, Copy)]
pub struct CatchConfig {
    /// Random delay range between spawns (ms, inclusive)
    pub spawn_ms: (u32, u32),
    /// Fall speed drawn per item from this range at spawn
    pub fall_speed: SpeedRange,
    /// Probability a spawned item is "good"
    pub good_ratio: f64,
    /// Session length (seconds)
    pub duration_secs: f32,
    /// Points subtracted for catching a bad item
    pub bad_penalty: u32,
    /// Base points per good catch, before the combo multiplier
    pub base_score: u32,
    /// Flat bonus added on every good catch
    pub combo_bonus: u32,
    /// Capture band depth as a fraction of basket height
    pub top_band_rel: f32,
}

impl CatchConfig {
    pub fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Junior => CatchConfig {
                spawn_ms: (500, 850),
                fall_speed: SpeedRange {
                    min: 160.0,
                    max: 220.0,
                },
                good_ratio: 0.75,
                duration_secs: 60.0,
                bad_penalty: 20,
                base_score: 10,
                combo_bonus: 2,
                top_band_rel: 0.26,
            },
            Difficulty::Standard => CatchConfig {
                spawn_ms: (420, 740),
                fall_speed: SpeedRange {
                    min: 200.0,
                    max: 280.0,
                },
                good_ratio: 0.60,
                duration_secs: 60.0,
                bad_penalty: 25,
                base_score: 12,
                combo_bonus: 3,
                top_band_rel: 0.20,
            },
            Difficulty::Pro => CatchConfig {
                spawn_ms: (340, 620),
                fall_speed: SpeedRange {
                    min: 240.0,
                    max: 340.0,
                },
                good_ratio: 0.50,
                duration_secs: 60.0,
                bad_penalty: 30,
                base_score: 14,
                combo_bonus: 4,
                top_band_rel: 0.14,
            },
        }
    }
}
