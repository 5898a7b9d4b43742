//! Scene building: state -> colored primitives
//!
//! The host paints these shapes in order onto its canvas, offset by the
//! camera. Colors are RGBA in linear 0..1, straight from the neon palette.

use glam::Vec2;

use crate::consts::*;
use crate::session::Session;
use crate::sim::{PlatformKind, Rect};

/// Neon palette
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.039, 0.051, 0.118, 1.0];
    pub const GRASS: [f32; 4] = [0.0, 1.0, 0.549, 1.0];
    pub const SOLID: [f32; 4] = [0.431, 0.635, 1.0, 1.0];
    pub const FAKE: [f32; 4] = [1.0, 0.820, 0.4, 1.0];
    pub const MOVING: [f32; 4] = [0.702, 0.549, 1.0, 1.0];
    pub const SPIKE: [f32; 4] = [1.0, 0.231, 0.420, 1.0];
    /// Hidden spikes are drawn, just barely
    pub const SPIKE_HIDDEN: [f32; 4] = [1.0, 0.231, 0.420, 0.07];
    pub const SAW: [f32; 4] = [1.0, 0.624, 0.110, 1.0];
    pub const CRUSHER: [f32; 4] = [1.0, 0.345, 0.345, 1.0];
    pub const DOOR: [f32; 4] = [0.545, 1.0, 0.753, 1.0];
    pub const DOOR_OPEN: [f32; 4] = [0.4, 1.0, 0.6, 1.0];
    pub const DOOR_FAKE: [f32; 4] = [1.0, 0.208, 0.369, 1.0];
    pub const CHECKPOINT: [f32; 4] = [1.0, 0.114, 0.369, 1.0];
    pub const CHECKPOINT_ACTIVE: [f32; 4] = [0.420, 1.0, 0.584, 1.0];
    pub const PLAYER_BODY: [f32; 4] = [0.827, 0.184, 0.184, 1.0];
    pub const PLAYER_SUIT: [f32; 4] = [0.098, 0.463, 0.824, 1.0];
    pub const EYES: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// One paintable primitive in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, color: [f32; 4] },
    Circle { center: Vec2, radius: f32, color: [f32; 4] },
}

/// A frame's draw list plus the camera offset to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: [f32; 4],
    pub camera_x: f32,
    pub shapes: Vec<Shape>,
}

/// Paint order: ground, solids, hazards, door, checkpoints, player on top.
pub fn build_scene(session: &Session) -> Scene {
    let world = &session.world;
    let mut shapes = Vec::new();

    // Neon grass strip along the safety floor
    shapes.push(Shape::Rect {
        rect: Rect::new(-400.0, VIEW_H - 30.0, world.width + 800.0, 30.0),
        color: colors::GRASS,
    });

    for p in &world.platforms {
        if p.removed {
            continue;
        }
        let color = match p.kind {
            PlatformKind::Static => colors::SOLID,
            PlatformKind::Fake => colors::FAKE,
            PlatformKind::Moving(_) => colors::MOVING,
        };
        shapes.push(Shape::Rect { rect: p.rect, color });
    }

    for spike in &world.spikes {
        let color = if spike.hidden {
            colors::SPIKE_HIDDEN
        } else {
            colors::SPIKE
        };
        shapes.push(Shape::Rect {
            rect: spike.rect,
            color,
        });
    }

    for bar in &world.moving_spikes {
        shapes.push(Shape::Rect {
            rect: bar.rect,
            color: colors::SPIKE,
        });
    }

    for saw in &world.saws {
        shapes.push(Shape::Circle {
            center: saw.center,
            radius: saw.radius,
            color: colors::SAW,
        });
    }

    for wall in &world.crushers {
        shapes.push(Shape::Rect {
            rect: wall.rect,
            color: colors::CRUSHER,
        });
    }

    let door = &world.door;
    let door_color = if door.open {
        colors::DOOR_OPEN
    } else if door.fake {
        colors::DOOR_FAKE
    } else {
        colors::DOOR
    };
    shapes.push(Shape::Rect {
        rect: door.rect(),
        color: door_color,
    });

    for cp in &world.checkpoints {
        let color = if cp.active {
            colors::CHECKPOINT_ACTIVE
        } else {
            colors::CHECKPOINT
        };
        shapes.push(Shape::Circle {
            center: cp.pos,
            radius: CHECKPOINT_RADIUS,
            color,
        });
    }

    push_player(&mut shapes, session);

    Scene {
        background: colors::BACKGROUND,
        camera_x: session.camera_x,
        shapes,
    }
}

fn push_player(shapes: &mut Vec<Shape>, session: &Session) {
    let p = &session.player;
    let (x, y, w, h) = (p.pos.x, p.pos.y, p.w, p.h);

    shapes.push(Shape::Rect {
        rect: Rect::new(x, y, w, h),
        color: colors::PLAYER_BODY,
    });
    shapes.push(Shape::Rect {
        rect: Rect::new(x, y + h * 0.58, w, h * 0.42),
        color: colors::PLAYER_SUIT,
    });

    // Eyes: round while open, thin slits for the first few blink ticks
    let blinking = p.blink_timer < 6;
    if blinking {
        shapes.push(Shape::Rect {
            rect: Rect::new(x + w * 0.22, y + h * 0.22, w * 0.2, 3.0),
            color: colors::EYES,
        });
        shapes.push(Shape::Rect {
            rect: Rect::new(x + w * 0.58, y + h * 0.22, w * 0.2, 3.0),
            color: colors::EYES,
        });
    } else {
        shapes.push(Shape::Circle {
            center: Vec2::new(x + w * 0.32, y + h * 0.22),
            radius: w * 0.14,
            color: colors::EYES,
        });
        shapes.push(Shape::Circle {
            center: Vec2::new(x + w * 0.68, y + h * 0.22),
            radius: w * 0.14,
            color: colors::EYES,
        });
    }
}
