//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, consumed exclusively by the level builder
//! - Fixed draw order during generation (difficulty branches included)
//! - Stable entity iteration order (generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rng;
pub mod tick;

pub use collision::Rect;
pub use level::{
    build_level, Axis, Checkpoint, CrusherWall, Door, Level, MovingSpike, Oscillator, Platform,
    PlatformKind, Saw, Spike,
};
pub use rng::LcgStream;
pub use tick::{tick, GameEvent, Player, TickInput};
