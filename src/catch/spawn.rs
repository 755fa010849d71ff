//! Item spawning and the fall-speed ramp.
//!
//! The original browser build ran these as a self-rescheduling timeout (spawn)
//! and a fixed interval (ramp). Here both are due-countdowns owned by the
//! session and drained at most once per tick, which keeps every draw on the
//! session's seeded RNG and dies with the session on teardown.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::config::CatchConfig;
use super::state::{DropItem, ItemKind, SessionState};
use crate::consts::*;

/// Draw the delay before the next spawn fires (seconds). Integer-uniform in
/// the tier's millisecond range, endpoints included.
pub fn draw_spawn_delay(config: &CatchConfig, rng: &mut Pcg32) -> f32 {
    let (min_ms, max_ms) = config.spawn_ms;
    rng.random_range(min_ms..=max_ms) as f32 / 1000.0
}

/// Create one item and append it to the live set. Never fails.
///
/// Kind, x position, fall speed and rotation are all drawn here and frozen
/// for the item's lifetime; later ramp steps only affect future spawns.
pub fn spawn_drop(state: &mut SessionState) {
    let item_size = state.field.item_size();

    let kind = if state.rng.random_bool(state.config.good_ratio) {
        ItemKind::Good
    } else {
        ItemKind::Bad
    };

    let x_min = SPAWN_EDGE_MARGIN as i32;
    let x_max = (state.field.width - SPAWN_EDGE_MARGIN - item_size.round()) as i32;
    let x = state.rng.random_range(x_min..=x_max.max(x_min)) as f32;

    let speed_min = state.fall_speed.min.round() as i32;
    let speed_max = state.fall_speed.max.round() as i32;
    let speed = state.rng.random_range(speed_min..=speed_max.max(speed_min)) as f32;

    let sign = if state.rng.random_bool(0.5) { -1.0 } else { 1.0 };
    let angular_vel = sign * state.rng.random_range(ROT_SPEED_MIN..=ROT_SPEED_MAX) as f32;
    let angle = state.rng.random_range(0..=359) as f32;

    let id = state.next_item_id();
    state.drops.push(DropItem {
        id,
        kind,
        pos: Vec2::new(x, -item_size),
        speed,
        angle,
        angular_vel,
    });
}

/// Advance the spawn and ramp countdowns by `dt`, firing each at most once.
pub fn run_timers(state: &mut SessionState, dt: f32) {
    state.spawn_in -= dt;
    if state.spawn_in <= 0.0 {
        spawn_drop(state);
        state.spawn_in = draw_spawn_delay(&state.config, &mut state.rng);
    }

    state.ramp_in -= dt;
    if state.ramp_in <= 0.0 {
        state.fall_speed.min *= RAMP_GROWTH;
        state.fall_speed.max *= RAMP_GROWTH;
        state.ramp_in = RAMP_INTERVAL_SECS;
        log::debug!(
            "fall speed ramped to {:.0}-{:.0} px/s",
            state.fall_speed.min,
            state.fall_speed.max
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catch::state::{Playfield, SessionPhase};
    use crate::difficulty::Difficulty;
    use rand::SeedableRng;

    fn running_state(difficulty: Difficulty) -> SessionState {
        let mut state = SessionState::new(difficulty, Playfield::new(800.0, 600.0), 0xC0FFEE);
        state.start();
        assert_eq!(state.phase, SessionPhase::Running);
        state
    }

    #[test]
    fn test_spawn_delay_stays_in_range() {
        // Pro tier: every sampled delay must land in [340, 620] ms inclusive
        let config = CatchConfig::preset(Difficulty::Pro);
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..10_000 {
            let delay_ms = draw_spawn_delay(&config, &mut rng) * 1000.0;
            assert!((340.0..=620.0).contains(&delay_ms.round()));
        }
    }

    #[test]
    fn test_spawned_items_respect_margins_and_bounds() {
        let mut state = running_state(Difficulty::Standard);
        let item_size = state.field.item_size();
        for _ in 0..1_000 {
            spawn_drop(&mut state);
        }
        for item in &state.drops {
            assert!(item.pos.x >= SPAWN_EDGE_MARGIN);
            assert!(item.pos.x <= state.field.width - SPAWN_EDGE_MARGIN - item_size.round());
            assert_eq!(item.pos.y, -item_size);
            assert!(item.speed >= state.fall_speed.min.round());
            assert!(item.speed <= state.fall_speed.max.round());
            let av = item.angular_vel.abs();
            assert!((ROT_SPEED_MIN as f32..=ROT_SPEED_MAX as f32).contains(&av));
            assert!((0.0..360.0).contains(&item.angle));
        }
    }

    #[test]
    fn test_good_ratio_is_roughly_honored() {
        // Bernoulli draws, so only a coarse statistical check
        let mut state = running_state(Difficulty::Junior);
        for _ in 0..10_000 {
            spawn_drop(&mut state);
        }
        let good = state
            .drops
            .iter()
            .filter(|d| d.kind == ItemKind::Good)
            .count() as f64;
        let ratio = good / state.drops.len() as f64;
        assert!((0.72..=0.78).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn test_ramp_scales_both_bounds_five_percent() {
        let mut state = running_state(Difficulty::Standard);
        let before = state.fall_speed;
        state.ramp_in = 0.0;
        run_timers(&mut state, 0.016);
        assert!((state.fall_speed.min - before.min * 1.05).abs() < 1e-3);
        assert!((state.fall_speed.max - before.max * 1.05).abs() < 1e-3);
        assert!((state.ramp_in - RAMP_INTERVAL_SECS).abs() < 1e-3);
    }

    #[test]
    fn test_ramp_is_unbounded_but_sane_over_a_long_session() {
        // No cap by design. Over a pathological 10-minute session the bounds
        // grow by 1.05^60; sanity-check the analytic bound instead of
        // asserting a ceiling.
        let mut state = running_state(Difficulty::Standard);
        for _ in 0..60 {
            state.ramp_in = 0.0;
            run_timers(&mut state, 0.016);
        }
        let expected = 280.0 * 1.05f32.powi(60);
        assert!((state.fall_speed.max - expected).abs() / expected < 1e-3);
        assert!(state.fall_speed.min < state.fall_speed.max);
    }

    #[test]
    fn test_ramp_does_not_touch_items_already_falling() {
        let mut state = running_state(Difficulty::Standard);
        spawn_drop(&mut state);
        let speed_before = state.drops[0].speed;
        state.ramp_in = 0.0;
        run_timers(&mut state, 0.016);
        assert_eq!(state.drops[0].speed, speed_before);
    }
}
