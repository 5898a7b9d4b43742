//! Per-frame simulation step
//!
//! Advances player kinematics and every hazard category by one fixed time
//! unit. The sub-step order is load-bearing: hazards move before they are
//! tested against the player's already-integrated position, and the floor
//! safety clamp runs after everything else so no generated level can drop the
//! player out of the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level::{Level, PlatformKind};
use crate::consts::*;

/// Player intent for one tick. Level-triggered, not edge-triggered.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Events surfaced to the host after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PlayerDied,
    CheckpointActivated { pos: Vec2 },
    LevelCompleted { next_index: u32 },
    /// The player walked into a fake door.
    LevelFailed,
}

/// The player character. Reset by value on death/restart so stale references
/// never leak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub w: f32,
    pub h: f32,
    pub on_ground: bool,
    pub alive: bool,
    /// Respawn anchor; re-pointed by checkpoints.
    pub spawn: Vec2,
    /// Cosmetic eye-blink tick counter, no gameplay effect.
    pub blink_timer: u32,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            w: PLAYER_W,
            h: PLAYER_H,
            on_ground: false,
            alive: true,
            spawn,
            blink_timer: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.w, self.h)
    }
}

/// Mark the player dead. Idempotent: one `PlayerDied` per death, no matter
/// how many lethal overlaps the same tick (or later ticks) produce.
fn kill(player: &mut Player, events: &mut Vec<GameEvent>) -> bool {
    if !player.alive {
        return false;
    }
    player.alive = false;
    events.push(GameEvent::PlayerDied);
    true
}

/// Advance the world and player by one tick.
///
/// Returns `true` when the player just opened the real exit door; the caller
/// owns the level transition and swaps the world between steps.
pub fn tick(level: &mut Level, player: &mut Player, input: &TickInput, events: &mut Vec<GameEvent>) -> bool {
    // Intent: acceleration, not velocity set, so momentum carries
    if player.alive {
        if input.left {
            player.vel.x -= MOVE_ACCEL;
        }
        if input.right {
            player.vel.x += MOVE_ACCEL;
        }
        if input.jump && player.on_ground {
            player.vel.y = -JUMP_IMPULSE;
            player.on_ground = false;
        }
    }

    player.vel.x = player.vel.x.clamp(-MAX_VX, MAX_VX);

    player.vel.y += GRAVITY;
    if player.vel.y > MAX_VY {
        player.vel.y = MAX_VY;
    }
    player.pos += player.vel;

    // Ground friction only if still grounded from the previous resolution;
    // collision below re-establishes the flag.
    if player.on_ground {
        player.vel.x *= FRICTION;
    }
    player.on_ground = false;

    // Solid platforms: each moves first, then is tested against the player's
    // new position.
    for p in level.platforms.iter_mut() {
        if let PlatformKind::Moving(osc) = &mut p.kind {
            osc.advance_rect(&mut p.rect);
        }
        if p.falls && player.rect().overlaps(&p.rect) {
            p.fall_speed = FALL_SPEED;
        }
        p.rect.y += p.fall_speed;
        if p.removed {
            continue;
        }
        if player.rect().overlaps(&p.rect) {
            if p.kind == PlatformKind::Fake {
                p.removed = true;
                player.vel.y = -FAKE_BOUNCE;
                continue;
            }
            let r = p.rect;
            if player.pos.y + player.h <= r.y + LAND_EPS {
                // Landed on top
                player.pos.y = r.y - player.h;
                player.vel.y = 0.0;
                player.on_ground = true;
            } else if player.pos.y >= r.y + r.h - LAND_EPS {
                // Bumped the underside
                player.pos.y = r.y + r.h;
                player.vel.y = 0.0;
            } else if player.pos.x + player.w / 2.0 < r.x + r.w / 2.0 {
                player.pos.x = r.x - player.w;
                player.vel.x = 0.0;
            } else {
                player.pos.x = r.x + r.w;
                player.vel.x = 0.0;
            }
        }
    }

    // Moving spike bars
    for bar in level.moving_spikes.iter_mut() {
        bar.osc.advance_rect(&mut bar.rect);
        if player.rect().overlaps(&bar.rect) {
            kill(player, events);
        }
    }

    // Saw blades
    for saw in level.saws.iter_mut() {
        saw.osc.advance_point(&mut saw.center);
        if player.rect().overlaps_circle(saw.center, saw.radius) {
            kill(player, events);
        }
    }

    // Crusher walls
    for wall in level.crushers.iter_mut() {
        wall.osc.advance_rect(&mut wall.rect);
        if player.rect().overlaps(&wall.rect) {
            kill(player, events);
        }
    }

    // Static spikes; hidden only affects rendering, never lethality
    for spike in level.spikes.iter() {
        if player.rect().overlaps(&spike.rect) {
            kill(player, events);
        }
    }

    // Exit door
    let mut completed = false;
    if player.rect().overlaps(&level.door.rect()) {
        if level.door.fake {
            if kill(player, events) {
                events.push(GameEvent::LevelFailed);
            }
        } else if !level.door.open {
            level.door.open = true;
            completed = true;
        }
    }

    // Checkpoints: activate once, permanently, and re-anchor the respawn
    for cp in level.checkpoints.iter_mut() {
        if !cp.active
            && player
                .rect()
                .overlaps_circle(cp.pos, CHECKPOINT_RADIUS + CHECKPOINT_MARGIN)
        {
            cp.active = true;
            player.spawn = Vec2::new(
                cp.pos.x - CHECKPOINT_OFFSET,
                cp.pos.y - player.h - CHECKPOINT_SPAWN_LIFT,
            );
            events.push(GameEvent::CheckpointActivated { pos: cp.pos });
        }
    }

    // Floor safety clamp: the one rule no generated content can defeat.
    // Fires as soon as the feet cross the line, so the post-step bound
    // `pos.y <= FLOOR_LINE - h` always holds.
    if player.pos.y > FLOOR_LINE - player.h {
        player.pos.y = FLOOR_LINE - player.h;
        player.vel.y = 0.0;
        player.on_ground = true;
    }

    player.blink_timer += 1;
    if player.blink_timer > BLINK_PERIOD {
        player.blink_timer = 0;
    }

    completed
}
