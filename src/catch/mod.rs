//! Falling-item catch game simulation
//!
//! All gameplay logic lives here. This module is pure and deterministic:
//! - Seeded RNG only
//! - Wall-clock frame deltas passed in by the caller
//! - No rendering or platform dependencies
//!
//! The driver measures the playfield, feeds pointer input and `dt` into
//! [`tick`], and draws whatever the state says.

pub mod collision;
pub mod config;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CaptureBand, swept_band_catch};
pub use config::CatchConfig;
pub use state::{Basket, DropItem, FrameEvent, ItemKind, Playfield, SessionPhase, SessionState};
pub use tick::{FrameInput, combo_multiplier, tick};
