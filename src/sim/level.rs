//! Level data model and the procedural level builder
//!
//! A level is fully determined by `(index, difficulty)`: the builder seeds one
//! [`LcgStream`] and walks it in a fixed order. Every draw below is part of the
//! level format - inserting, removing or reordering a draw (including the
//! difficulty-gated ones, which fire on hard only) changes every level ever
//! generated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::LcgStream;
use crate::consts::*;
use crate::progress::Difficulty;

/// Oscillation axis for moving entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Back-and-forth motion along one axis, bounded by a phase accumulator.
///
/// Invariant: `|t| <= range` after every [`advance`](Self::advance); the
/// direction flips on the tick the accumulator would leave that band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    pub axis: Axis,
    pub speed: f32,
    pub range: f32,
    pub t: f32,
    pub dir: f32,
}

impl Oscillator {
    pub fn new(axis: Axis, speed: f32, range: f32) -> Self {
        Self {
            axis,
            speed,
            range,
            t: 0.0,
            dir: 1.0,
        }
    }

    /// Advance one tick and return the position delta along the axis.
    pub fn advance(&mut self) -> f32 {
        self.t += self.speed * self.dir;
        if self.t.abs() > self.range {
            self.t = self.t.clamp(-self.range, self.range);
            self.dir = -self.dir;
        }
        self.speed * self.dir
    }

    /// Apply one tick of motion to a rect.
    pub fn advance_rect(&mut self, rect: &mut Rect) {
        let delta = self.advance();
        match self.axis {
            Axis::X => rect.x += delta,
            Axis::Y => rect.y += delta,
        }
    }

    /// Apply one tick of motion to a point.
    pub fn advance_point(&mut self, point: &mut Vec2) {
        let delta = self.advance();
        match self.axis {
            Axis::X => point.x += delta,
            Axis::Y => point.y += delta,
        }
    }
}

/// Platform behavior. Closed set so collision handling stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Looks solid, removes itself on contact and bounces the player.
    Fake,
    Moving(Oscillator),
}

/// A solid platform rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
    /// Drops away once the player touches it.
    pub falls: bool,
    /// Persistent downward speed once a fall-away platform is triggered.
    pub fall_speed: f32,
    /// Triggered fake platforms are skipped for collision and rendering.
    pub removed: bool,
}

impl Platform {
    pub fn solid(rect: Rect) -> Self {
        Self {
            rect,
            kind: PlatformKind::Static,
            falls: false,
            fall_speed: 0.0,
            removed: false,
        }
    }
}

/// A static spike band. Hidden spikes render near-invisible but stay lethal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub rect: Rect,
    pub hidden: bool,
}

/// A spike bar oscillating along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingSpike {
    pub rect: Rect,
    pub osc: Oscillator,
}

/// A circular saw blade oscillating along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Saw {
    pub center: Vec2,
    pub radius: f32,
    pub osc: Oscillator,
}

/// A large oscillating wall, lethal on contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrusherWall {
    pub rect: Rect,
    pub osc: Oscillator,
}

/// The exit door. Anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub x: f32,
    pub y: f32,
    pub open: bool,
    /// Fake doors kill instead of completing the level.
    pub fake: bool,
}

impl Door {
    pub fn new(x: f32, y: f32, fake: bool) -> Self {
        Self {
            x,
            y,
            open: false,
            fake,
        }
    }

    /// Collision rect, extending upward from the anchor.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y - DOOR_H, DOOR_W, DOOR_H)
    }
}

/// A one-time-activatable respawn zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub pos: Vec2,
    pub active: bool,
}

/// A complete, self-consistent level description.
///
/// Owned by the playing session and replaced wholesale on level change; only
/// per-entity kinematic fields mutate during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub width: f32,
    pub spawn: Vec2,
    pub platforms: Vec<Platform>,
    pub spikes: Vec<Spike>,
    pub moving_spikes: Vec<MovingSpike>,
    pub saws: Vec<Saw>,
    pub crushers: Vec<CrusherWall>,
    pub door: Door,
    pub checkpoints: Vec<Checkpoint>,
}

/// Build the level for `(index, difficulty)`. Pure; callable any time.
///
/// Out-of-range indices are a host bug, not a core error - they wrap.
pub fn build_level(index: u32, difficulty: Difficulty) -> Level {
    let index = index % TOTAL_LEVELS;
    let hard = difficulty == Difficulty::Hard;
    let seed = 1000 + index * 7 + if hard { 9999 } else { 0 };
    let mut r = LcgStream::new(seed);

    let width = 2000.0 + (r.next() * 700.0).floor();

    let mut platforms = Vec::new();
    // Base floor spanning the level plus margin
    platforms.push(Platform::solid(Rect::new(0.0, VIEW_H - 60.0, width + 400.0, 60.0)));

    // Spawn and its landing pad
    let spawn = Vec2::new(SPAWN_X, SPAWN_Y);
    platforms.push(Platform::solid(Rect::new(
        spawn.x - 10.0,
        spawn.y + PLAYER_H + 2.0,
        70.0,
        10.0,
    )));

    // Platforms, walking a cursor left to right
    let plat_count = 8 + (r.next() * 6.0).floor() as u32 + if hard { 4 } else { 0 };
    let thickness = if hard { 16.0 } else { 18.0 };
    let mut x = 260.0;
    for _ in 0..plat_count {
        let mut y = VIEW_H - (160.0 + (r.next() * 140.0).floor());
        // Hard mode occasionally raises platforms further; both draws are
        // skipped entirely on easy.
        if hard && r.chance(0.35) {
            y -= (r.next() * 80.0).floor();
        }
        let w = 80.0 + (r.next() * 120.0).floor();
        let roll = r.next();
        let kind = if roll < 0.18 {
            PlatformKind::Fake
        } else if roll < 0.36 {
            if r.chance(0.5) {
                PlatformKind::Moving(Oscillator::new(
                    Axis::X,
                    2.2 + r.next() * 2.6,
                    150.0 + r.next() * 180.0,
                ))
            } else {
                PlatformKind::Moving(Oscillator::new(
                    Axis::Y,
                    2.0 + r.next() * 2.6,
                    130.0 + r.next() * 180.0,
                ))
            }
        } else {
            PlatformKind::Static
        };
        let falls = r.chance(0.24);
        platforms.push(Platform {
            rect: Rect::new(x, y, w, thickness),
            kind,
            falls,
            fall_speed: 0.0,
            removed: false,
        });
        x += w + 110.0 + (r.next() * 140.0).floor();
    }

    // Static spike bands in the mid-section
    let mut spikes = Vec::new();
    let spike_bands = 6 + (r.next() * 6.0).floor() as u32 + if hard { 4 } else { 0 };
    for _ in 0..spike_bands {
        let sx = 420.0 + (r.next() * (width - 600.0)).floor();
        let sw = 30.0 + (r.next() * 60.0).floor();
        let hidden = r.chance(0.25);
        spikes.push(Spike {
            rect: Rect::new(sx, VIEW_H - 78.0, sw, 18.0),
            hidden,
        });
    }

    // Saw blades
    let mut saws = Vec::new();
    let saw_count = 3 + (r.next() * 3.0).floor() as u32 + if hard { 2 } else { 0 };
    for _ in 0..saw_count {
        let axis = if r.chance(0.5) { Axis::X } else { Axis::Y };
        let cx = 400.0 + (r.next() * (width - 500.0)).floor();
        let cy = VIEW_H - (160.0 + (r.next() * 240.0).floor());
        let speed = (if hard { 4.1 } else { 3.4 }) + r.next() * 1.8;
        let range = 160.0 + r.next() * 240.0;
        let radius = 16.0 + r.next() * 6.0;
        saws.push(Saw {
            center: Vec2::new(cx, cy),
            radius,
            osc: Oscillator::new(axis, speed, range),
        });
    }

    // Moving spike bars
    let mut moving_spikes = Vec::new();
    let bar_count = 2 + (r.next() * 3.0).floor() as u32 + if hard { 2 } else { 0 };
    for _ in 0..bar_count {
        let axis = if r.chance(0.5) { Axis::X } else { Axis::Y };
        let bx = 600.0 + (r.next() * (width - 700.0)).floor();
        let by = VIEW_H - (140.0 + (r.next() * 260.0).floor());
        let w = 40.0 + (r.next() * 40.0).floor();
        let speed = (if hard { 3.8 } else { 3.0 }) + r.next() * 1.6;
        let range = 130.0 + r.next() * 180.0;
        moving_spikes.push(MovingSpike {
            rect: Rect::new(bx, by, w, 18.0),
            osc: Oscillator::new(axis, speed, range),
        });
    }

    // Ceiling crusher platform (a solid that oscillates vertically)
    if r.chance(0.75) {
        let speed = if hard { 4.0 } else { 3.2 };
        let range = 240.0 + r.next() * 100.0;
        platforms.push(Platform {
            rect: Rect::new(1100.0, 60.0, 120.0, 20.0),
            kind: PlatformKind::Moving(Oscillator::new(Axis::Y, speed, range)),
            falls: false,
            fall_speed: 0.0,
            removed: false,
        });
    }
    // Full-height crusher wall
    let mut crushers = Vec::new();
    if r.chance(0.65) {
        let wx = 300.0 + r.next() * 500.0;
        let speed = if hard { 3.4 } else { 2.6 };
        let range = 740.0 + r.next() * 600.0;
        crushers.push(CrusherWall {
            rect: Rect::new(wx, VIEW_H - 280.0, 24.0, 320.0),
            osc: Oscillator::new(Axis::X, speed, range),
        });
    }

    // Exit door near the end, sometimes fake
    let door_x = width - 120.0;
    let door = Door::new(door_x, VIEW_H - 220.0, r.chance(0.22));

    // Checkpoints in the midsection
    let mut checkpoints = Vec::new();
    let cp_count = 1 + if r.chance(0.5) { 1 } else { 0 };
    for _ in 0..cp_count {
        let cx = 450.0 + (r.next() * (width - 700.0)).floor();
        let cy = VIEW_H - (220.0 + (r.next() * 160.0).floor());
        checkpoints.push(Checkpoint {
            pos: Vec2::new(cx, cy),
            active: false,
        });
    }

    // Safety platform right before the door
    platforms.push(Platform::solid(Rect::new(door_x - 60.0, VIEW_H - 140.0, 120.0, 18.0)));

    Level {
        width,
        spawn,
        platforms,
        spikes,
        moving_spikes,
        saws,
        crushers,
        door,
        checkpoints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        for index in [0, 1, 17, 133, 319] {
            for difficulty in [Difficulty::Easy, Difficulty::Hard] {
                let a = build_level(index, difficulty);
                let b = build_level(index, difficulty);
                assert_eq!(a, b, "level {index} {difficulty:?} not reproducible");
            }
        }
    }

    #[test]
    fn test_level_zero_hard_golden_width() {
        // Seed 1000 + 0*7 + 9999 = 10999; first draw 0.498757 -> width 2349.
        let level = build_level(0, Difficulty::Hard);
        assert_eq!(level.width, 2349.0);
    }

    #[test]
    fn test_width_in_range() {
        for index in 0..64 {
            for difficulty in [Difficulty::Easy, Difficulty::Hard] {
                let level = build_level(index, difficulty);
                assert!(
                    (2000.0..2700.0).contains(&level.width),
                    "width {} out of range",
                    level.width
                );
            }
        }
    }

    #[test]
    fn test_difficulties_diverge() {
        // Different seeds, so structurally different levels.
        let easy = build_level(5, Difficulty::Easy);
        let hard = build_level(5, Difficulty::Hard);
        assert_ne!(easy, hard);
    }

    #[test]
    fn test_entity_counts_in_contract_ranges() {
        for index in 0..32 {
            for difficulty in [Difficulty::Easy, Difficulty::Hard] {
                let hard = difficulty == Difficulty::Hard;
                let level = build_level(index, difficulty);
                // Floor, spawn pad, door safety pad and the optional ceiling
                // crusher surround the generated platforms.
                let ceiling = level
                    .platforms
                    .iter()
                    .filter(|p| p.rect == Rect::new(1100.0, 60.0, 120.0, 20.0))
                    .count();
                assert!(ceiling <= 1);
                let generated = level.platforms.len() - 3 - ceiling;
                let plat_lo = if hard { 12 } else { 8 };
                assert!((plat_lo..=plat_lo + 5).contains(&generated));

                let spike_lo = if hard { 10 } else { 6 };
                assert!((spike_lo..=spike_lo + 5).contains(&level.spikes.len()));

                let saw_lo = if hard { 5 } else { 3 };
                assert!((saw_lo..=saw_lo + 2).contains(&level.saws.len()));

                let bar_lo = if hard { 4 } else { 2 };
                assert!((bar_lo..=bar_lo + 2).contains(&level.moving_spikes.len()));

                assert!(level.crushers.len() <= 1);
                assert!((1..=2).contains(&level.checkpoints.len()));
            }
        }
    }

    #[test]
    fn test_door_near_level_end() {
        for index in 0..16 {
            let level = build_level(index, Difficulty::Hard);
            assert_eq!(level.door.x, level.width - 120.0);
            assert!(!level.door.open);
        }
    }

    #[test]
    fn test_safety_platform_under_door() {
        let level = build_level(3, Difficulty::Easy);
        let pad = level
            .platforms
            .iter()
            .find(|p| p.rect.x == level.door.x - 60.0 && p.rect.w == 120.0);
        assert!(pad.is_some(), "missing near-door safety platform");
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let wrapped = build_level(TOTAL_LEVELS + 2, Difficulty::Hard);
        let direct = build_level(2, Difficulty::Hard);
        assert_eq!(wrapped, direct);
    }

    #[test]
    fn test_oscillator_flip_clamps_phase() {
        let mut osc = Oscillator::new(Axis::X, 3.0, 10.0);
        for _ in 0..100 {
            osc.advance();
            assert!(osc.t.abs() <= osc.range);
        }
        // Direction must have flipped at least twice over 100 ticks.
        assert_eq!(osc.dir.abs(), 1.0);
    }
}
