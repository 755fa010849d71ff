//! Per-frame update for the catch session.
//!
//! One call advances everything: spawn/ramp countdowns, basket movement,
//! item physics, catch classification, scoring, and the session clock. `dt`
//! is the measured wall-clock delta since the previous frame, variable by
//! nature and used as-is, oversized deltas included (a backgrounded tab
//! costs the player a catch window, nothing more).

use super::collision::{CaptureBand, swept_band_catch};
use super::spawn;
use super::state::{FrameEvent, ItemKind, SessionPhase, SessionState};

/// Input sampled by the driver for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Play-area-relative pointer x, present only while the pointer is held
    /// down inside the play area. Absent pointer = basket does not move.
    pub pointer_x: Option<f32>,
}

/// Score multiplier for the current combo: every third consecutive good
/// catch raises it by one, uncapped.
#[inline]
pub fn combo_multiplier(combo: u32) -> u32 {
    1 + combo / 3
}

/// Advance the session by one frame. Returns the frame's events in
/// occurrence order; `FrameEvent::Finished` appears exactly once per
/// session, on the tick that drains the clock.
pub fn tick(state: &mut SessionState, input: &FrameInput, dt: f32) -> Vec<FrameEvent> {
    let mut events = Vec::new();
    if state.phase != SessionPhase::Running {
        return events;
    }

    spawn::run_timers(state, dt);

    if let Some(pointer_x) = input.pointer_x {
        let field = state.field;
        state.basket.move_toward(pointer_x, dt, &field);
    }

    let band = CaptureBand::for_field(&state.field, state.config.top_band_rel);
    let mut combo_lost = false;
    let mut kept = Vec::with_capacity(state.drops.len());

    for mut item in std::mem::take(&mut state.drops) {
        let prev_y = item.pos.y;
        let next_y = prev_y + item.speed * dt;
        let next_angle = (item.angle + item.angular_vel * dt) % 360.0;

        if swept_band_catch(&item, prev_y, next_y, state.basket.x, &state.field, &band) {
            match item.kind {
                ItemKind::Good => {
                    state.combo += 1;
                    let gained = state.config.base_score * combo_multiplier(state.combo)
                        + state.config.combo_bonus;
                    state.score += gained;
                    events.push(FrameEvent::GoodCatch {
                        id: item.id,
                        combo: state.combo,
                        gained,
                    });
                }
                ItemKind::Bad => {
                    state.combo = 0;
                    let lost = state.config.bad_penalty.min(state.score);
                    state.score -= lost;
                    events.push(FrameEvent::BadCatch { id: item.id, lost });
                }
            }
            // Caught items leave the live set the same frame
            continue;
        }

        if next_y > state.field.height {
            // Fell past the bottom edge uncaught. Letting a bad item go is
            // free; dropping a good one costs the combo (once per frame,
            // however many slipped through), never the score.
            if item.kind == ItemKind::Good {
                combo_lost = true;
                events.push(FrameEvent::GoodMiss { id: item.id });
            }
            continue;
        }

        item.pos.y = next_y;
        item.angle = next_angle;
        kept.push(item);
    }
    state.drops = kept;

    if combo_lost {
        state.combo = 0;
    }

    // Clock runs down after the item pass so a catch on the final frame
    // still counts
    state.time_left = (state.time_left - dt).max(0.0);
    if state.time_left <= 0.0 {
        state.phase = SessionPhase::Ended;
        state.drops.clear();
        log::info!("catch session over, final score {}", state.score);
        events.push(FrameEvent::Finished { score: state.score });
    }

    events
}
