//! Session state and core simulation types for the catch game.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::{CatchConfig, SpeedRange};
use crate::consts::*;
use crate::difficulty::Difficulty;
use crate::rel_size;

/// What kind of thing is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Catch these
    Good,
    /// Avoid these
    Bad,
}

/// A falling entity.
///
/// `pos.x` is fixed at spawn; `pos.y` strictly increases while the item is
/// alive. Speed and angular velocity are drawn once at spawn and never
/// change, even if the ramp moves the bounds afterwards.
#[derive(Debug, Clone)]
pub struct DropItem {
    pub id: u32,
    pub kind: ItemKind,
    pub pos: Vec2,
    /// Fall speed (px/s)
    pub speed: f32,
    /// Current rotation (degrees, wraps at 360)
    pub angle: f32,
    /// Rotation speed (deg/s, signed)
    pub angular_vel: f32,
}

/// Measured playfield dimensions plus the sprite sizes derived from them
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions measured and positive. Sessions must not start
    /// (spawn, step physics) before this holds.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn basket_width(&self) -> f32 {
        rel_size(self.width, BASKET_WIDTH_REL, BASKET_MIN, BASKET_MAX)
    }

    pub fn basket_height(&self) -> f32 {
        (self.basket_width() * BASKET_ASPECT).round()
    }

    pub fn item_size(&self) -> f32 {
        rel_size(self.width, ITEM_REL, ITEM_MIN, ITEM_MAX)
    }
}

/// The player-controlled basket. Only the horizontal center moves.
#[derive(Debug, Clone, Copy)]
pub struct Basket {
    /// Horizontal center position (px)
    pub x: f32,
}

impl Basket {
    /// Chase the pointer with a proportional step, speed-clamped and kept
    /// inside the playfield. A far-away pointer gets a speed boost so the
    /// basket can catch up. Called only while the pointer is held.
    pub fn move_toward(&mut self, pointer_x: f32, dt: f32, field: &Playfield) {
        let basket_w = field.basket_width();
        let mut speed = (field.width * BASKET_SPEED_REL).clamp(BASKET_SPEED_MIN, BASKET_SPEED_MAX);

        let dx = pointer_x - self.x;
        if dx.abs() > BOOST_THRESHOLD_REL * basket_w {
            speed *= BOOST_MULT;
        }

        let max_step = speed * dt;
        let step = (dx * FOLLOW_GAIN).clamp(-max_step, max_step);
        self.x = (self.x + step).clamp(basket_w / 2.0, field.width - basket_w / 2.0);
    }
}

/// Session lifecycle. `Ended` is terminal; a replay builds a fresh
/// [`SessionState`] instead of rewinding this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructed but not started (playfield possibly unmeasured)
    Idle,
    /// Clock running, items falling
    Running,
    /// Final score reported; state is inert
    Ended,
}

/// What happened during one tick, in occurrence order.
///
/// `Finished` is emitted exactly once per session, on the tick that drains
/// the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameEvent {
    GoodCatch { id: u32, combo: u32, gained: u32 },
    BadCatch { id: u32, lost: u32 },
    GoodMiss { id: u32 },
    Finished { score: u32 },
}

/// Complete simulation state for one play-through
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed, kept for logging/reproduction
    pub seed: u64,
    pub config: CatchConfig,
    pub field: Playfield,
    pub phase: SessionPhase,
    pub score: u32,
    /// Consecutive good catches; resets on bad catch or good miss
    pub combo: u32,
    /// Seconds remaining, clamped at zero
    pub time_left: f32,
    /// Live items, in spawn order
    pub drops: Vec<DropItem>,
    /// Working copy of the configured fall-speed bounds; the ramp mutates
    /// this, never the config
    pub fall_speed: SpeedRange,
    pub basket: Basket,
    /// Seconds until the next spawn fires
    pub spawn_in: f32,
    /// Seconds until the next ramp step
    pub ramp_in: f32,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl SessionState {
    /// Build an idle session for the given tier and measured playfield.
    /// Call [`SessionState::start`] to arm the timers.
    pub fn new(difficulty: Difficulty, field: Playfield, seed: u64) -> Self {
        let config = CatchConfig::preset(difficulty);
        Self {
            seed,
            config,
            field,
            phase: SessionPhase::Idle,
            score: 0,
            combo: 0,
            time_left: config.duration_secs,
            drops: Vec::new(),
            fall_speed: config.fall_speed,
            basket: Basket {
                x: field.width / 2.0,
            },
            spawn_in: 0.0,
            ramp_in: RAMP_INTERVAL_SECS,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Arm the spawn and ramp timers and begin the countdown. Refuses to
    /// start on an unmeasured playfield.
    pub fn start(&mut self) {
        if self.phase != SessionPhase::Idle {
            return;
        }
        if !self.field.is_measured() {
            log::warn!(
                "catch session not started: playfield is {}x{}",
                self.field.width,
                self.field.height
            );
            return;
        }
        self.spawn_in = super::spawn::draw_spawn_delay(&self.config, &mut self.rng);
        self.ramp_in = RAMP_INTERVAL_SECS;
        self.phase = SessionPhase::Running;
        log::info!(
            "catch session started (seed {}, {}s on the clock)",
            self.seed,
            self.config.duration_secs
        );
    }

    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
