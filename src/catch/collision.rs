//! Catch detection for the basket's capture band.
//!
//! The band is a thin horizontal strip at the top of the basket's bounds.
//! Items can cover many pixels per frame at high speed or low frame rate, so
//! a point-in-band check at one instant would let fast items tunnel straight
//! through. The test below sweeps the item's bottom edge across the frame's
//! previous/next positions instead: a crossing registers as long as
//! `speed * dt` does not exceed the band depth plus the item size.

use super::state::{DropItem, Playfield};
use crate::consts::{TOP_BAND_MAX_PX, TOP_BAND_MIN_PX};

/// The capture strip, in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy)]
pub struct CaptureBand {
    pub top: f32,
    pub bottom: f32,
}

impl CaptureBand {
    /// Band for this playfield: anchored at the basket's top edge, with
    /// depth scaled from the basket height and clamped to pixel bounds.
    pub fn for_field(field: &Playfield, top_band_rel: f32) -> Self {
        let basket_top = field.height - field.basket_height();
        let depth = (field.basket_height() * top_band_rel).clamp(TOP_BAND_MIN_PX, TOP_BAND_MAX_PX);
        Self {
            top: basket_top,
            bottom: basket_top + depth,
        }
    }

    pub fn depth(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Did this item cross the band this frame, over the basket?
///
/// Horizontal: the item's extent must overlap the basket's extent.
/// Vertical: the item's bottom edge, swept from `prev_y` to `next_y`, must
/// intersect the band interval.
pub fn swept_band_catch(
    item: &DropItem,
    prev_y: f32,
    next_y: f32,
    basket_x: f32,
    field: &Playfield,
    band: &CaptureBand,
) -> bool {
    let item_size = field.item_size();
    let basket_w = field.basket_width();

    let basket_left = basket_x - basket_w / 2.0;
    let basket_right = basket_x + basket_w / 2.0;
    let item_left = item.pos.x;
    let item_right = item.pos.x + item_size;
    let overlap_x = item_right > basket_left && item_left < basket_right;

    let prev_bottom = prev_y + item_size;
    let next_bottom = next_y + item_size;
    let intersects_band = next_bottom >= band.top && prev_bottom <= band.bottom;

    overlap_x && intersects_band
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catch::state::ItemKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    fn item_at(x: f32, y: f32) -> DropItem {
        DropItem {
            id: 1,
            kind: ItemKind::Good,
            pos: Vec2::new(x, y),
            speed: 240.0,
            angle: 0.0,
            angular_vel: 90.0,
        }
    }

    #[test]
    fn test_band_geometry() {
        let field = field();
        // 800px field: basket 128x128, band depth clamp(128*0.20, 10, 56) = 25.6
        let band = CaptureBand::for_field(&field, 0.20);
        assert!((band.top - 472.0).abs() < 1e-3);
        assert!((band.depth() - 25.6).abs() < 1e-3);

        // Relative depth clamps to the pixel bounds
        let shallow = CaptureBand::for_field(&field, 0.01);
        assert_eq!(shallow.depth(), TOP_BAND_MIN_PX);
        let deep = CaptureBand::for_field(&field, 0.9);
        assert_eq!(deep.depth(), TOP_BAND_MAX_PX);
    }

    #[test]
    fn test_crossing_with_overlap_is_caught() {
        let field = field();
        let band = CaptureBand::for_field(&field, 0.20);
        let item_size = field.item_size();
        // Bottom edge steps from just above the band to inside it
        let prev_y = band.top - item_size - 4.0;
        let next_y = band.top - item_size + 6.0;
        let item = item_at(400.0 - item_size / 2.0, prev_y);
        assert!(swept_band_catch(&item, prev_y, next_y, 400.0, &field, &band));
    }

    #[test]
    fn test_no_horizontal_overlap_is_not_caught() {
        let field = field();
        let band = CaptureBand::for_field(&field, 0.20);
        let item_size = field.item_size();
        let prev_y = band.top - item_size - 4.0;
        let next_y = band.top - item_size + 6.0;
        // Basket far to the left of the item
        let item = item_at(600.0, prev_y);
        assert!(!swept_band_catch(&item, prev_y, next_y, 100.0, &field, &band));
    }

    #[test]
    fn test_item_still_above_band_is_not_caught() {
        let field = field();
        let band = CaptureBand::for_field(&field, 0.20);
        let item_size = field.item_size();
        let prev_y = band.top - item_size - 50.0;
        let next_y = band.top - item_size - 20.0;
        let item = item_at(400.0, prev_y);
        assert!(!swept_band_catch(&item, prev_y, next_y, 400.0, &field, &band));
    }

    #[test]
    fn test_whole_band_jump_in_one_window_still_registers() {
        // Boundary kept as-is: a step large enough to clear the entire band
        // in a single window (huge dt after backgrounding) still satisfies
        // the interval pair, so the catch registers.
        let field = field();
        let band = CaptureBand::for_field(&field, 0.20);
        let item_size = field.item_size();
        let prev_y = band.top - item_size - 5.0;
        let next_y = band.bottom + 500.0;
        let item = item_at(400.0, prev_y);
        assert!(swept_band_catch(&item, prev_y, next_y, 400.0, &field, &band));
    }

    #[test]
    fn test_item_already_past_the_band_never_catches() {
        // Once the bottom edge has left the band below, the sweep can no
        // longer see it; sliding the basket under the item afterwards does
        // nothing.
        let field = field();
        let band = CaptureBand::for_field(&field, 0.20);
        let item_size = field.item_size();
        let prev_y = band.bottom - item_size + 1.0;
        let next_y = prev_y + 300.0;
        let item = item_at(400.0, prev_y);
        assert!(!swept_band_catch(&item, prev_y, next_y, 400.0, &field, &band));
    }

    proptest! {
        /// No tunnelling under the nominal-dt precondition: stepping an
        /// item's fall in increments of at most (band depth + item size),
        /// at least one frame window intersects the band.
        #[test]
        fn prop_no_tunnelling_under_nominal_dt(
            speed in 100.0f32..2000.0,
            dt_frac in 0.1f32..1.0,
            start_above in 1.0f32..200.0,
        ) {
            let field = field();
            let band = CaptureBand::for_field(&field, 0.20);
            let item_size = field.item_size();
            let max_dt = (band.depth() + item_size) / speed;
            let dt = max_dt * dt_frac;

            let mut y = band.top - item_size - start_above;
            let item = item_at(400.0, y);
            let mut hits = 0;
            while y + item_size <= band.bottom + speed * dt {
                let next = y + speed * dt;
                if swept_band_catch(&item, y, next, 400.0, &field, &band) {
                    hits += 1;
                }
                y = next;
            }
            prop_assert!(hits >= 1);
        }

        /// A path entirely to the side of the basket never registers.
        #[test]
        fn prop_no_overlap_never_catches(
            speed in 100.0f32..2000.0,
            offset in 200.0f32..300.0,
        ) {
            let field = field();
            let band = CaptureBand::for_field(&field, 0.20);
            let item_size = field.item_size();
            let dt = 1.0 / 60.0;
            let basket_x = 150.0;
            let mut y = band.top - item_size - 40.0;
            let item = item_at(basket_x + offset, y);
            for _ in 0..200 {
                let next = y + speed * dt;
                prop_assert!(!swept_band_catch(&item, y, next, basket_x, &field, &band));
                y = next;
            }
        }
    }
}
