//! Neon Runner - a 2D neon platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, physics, collisions)
//! - `session`: Session context tying world, player and progress together
//! - `progress`: Persisted progress (difficulty + unlocked levels)
//! - `renderer`: Thin state -> draw-list conversion, no simulation logic

pub mod progress;
pub mod renderer;
pub mod session;
pub mod sim;

pub use progress::{Difficulty, MemoryStore, Progress, ProgressStore};
pub use session::{SelectError, Session};

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (world coordinates, y grows downward)
    pub const VIEW_W: f32 = 960.0;
    pub const VIEW_H: f32 = 540.0;

    /// The floor safety line: the player is never allowed below it
    pub const FLOOR_LINE: f32 = VIEW_H - 36.0;

    /// Number of procedural levels before the index wraps
    pub const TOTAL_LEVELS: u32 = 320;

    /// Player body size
    pub const PLAYER_W: f32 = 40.0;
    pub const PLAYER_H: f32 = 52.0;
    /// Default spawn point for every level
    pub const SPAWN_X: f32 = 80.0;
    pub const SPAWN_Y: f32 = VIEW_H - 260.0;

    /// Physics tuned for smooth touch input
    pub const GRAVITY: f32 = 0.66;
    pub const FRICTION: f32 = 0.86;
    pub const MOVE_ACCEL: f32 = 0.72;
    pub const JUMP_IMPULSE: f32 = 12.2;
    pub const MAX_VX: f32 = 5.4;
    pub const MAX_VY: f32 = 18.5;
    /// Tolerance for top-landing / bottom-bump resolution
    pub const LAND_EPS: f32 = 8.0;

    /// Upward impulse granted when a fake platform gives way
    pub const FAKE_BOUNCE: f32 = 7.4;
    /// Downward speed a fall-away platform gains once touched
    pub const FALL_SPEED: f32 = 3.4;

    /// Exit door collision size (anchor is the door's bottom-left)
    pub const DOOR_W: f32 = 38.0;
    pub const DOOR_H: f32 = 56.0;

    pub const CHECKPOINT_RADIUS: f32 = 16.0;
    /// Extra pickup margin around a checkpoint circle
    pub const CHECKPOINT_MARGIN: f32 = 6.0;
    /// Respawn anchor offset from an activated checkpoint
    pub const CHECKPOINT_OFFSET: f32 = 20.0;
    pub const CHECKPOINT_SPAWN_LIFT: f32 = 6.0;

    /// Cosmetic eye-blink period in ticks
    pub const BLINK_PERIOD: u32 = 110;

    /// Camera lead: keep the player at 40% of the view width
    pub const CAMERA_LEAD: f32 = 0.4;
}
