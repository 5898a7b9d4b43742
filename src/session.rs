//! Session context
//!
//! Owns the current world, the player and the run's progress, and performs
//! the transitions the simulation signals: death/restart, checkpoint
//! re-anchoring, level completion and explicit level selection. The world is
//! replaced wholesale between steps; a step never observes a partial world.

use std::fmt;

use glam::Vec2;

use crate::consts::*;
use crate::progress::{Progress, ProgressStore};
use crate::sim::{build_level, tick, GameEvent, Level, Player, TickInput};

/// Why a level-select request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The requested level is beyond the unlocked high-water mark.
    Locked,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::Locked => write!(f, "level is locked"),
        }
    }
}

impl std::error::Error for SelectError {}

/// One playing session: world + player + progress + injected persistence.
pub struct Session {
    pub progress: Progress,
    pub world: Level,
    pub player: Player,
    /// Position of the last activated checkpoint, if any.
    pub checkpoint: Option<Vec2>,
    /// Horizontal camera offset for rendering, updated every step.
    pub camera_x: f32,
    store: Box<dyn ProgressStore>,
}

impl Session {
    /// Start a session, resuming difficulty and unlock progress from the store.
    pub fn new(store: Box<dyn ProgressStore>) -> Self {
        let progress = Progress::from_store(store.as_ref());
        let world = build_level(progress.level_index, progress.difficulty);
        let player = Player::new(world.spawn);
        log::info!(
            "session start: level {} ({}), {} unlocked",
            progress.level_index + 1,
            progress.difficulty.as_str(),
            progress.unlocked_levels
        );
        Self {
            progress,
            world,
            player,
            checkpoint: None,
            camera_x: 0.0,
            store,
        }
    }

    /// The injected progress store (mainly for hosts and tests).
    pub fn store(&self) -> &dyn ProgressStore {
        self.store.as_ref()
    }

    /// Advance the session by one frame. The single entry point the host loop
    /// calls; all surfaced events for this frame come back in order.
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let completed = tick(&mut self.world, &mut self.player, input, &mut events);

        for event in &events {
            match event {
                GameEvent::PlayerDied => {
                    log::debug!("player died on level {}", self.progress.level_index + 1);
                }
                GameEvent::CheckpointActivated { pos } => {
                    self.checkpoint = Some(*pos);
                    log::debug!("checkpoint at ({}, {})", pos.x, pos.y);
                }
                _ => {}
            }
        }

        if completed {
            let next_index = self.advance_level();
            events.push(GameEvent::LevelCompleted { next_index });
        }

        self.camera_x = (self.player.pos.x - VIEW_W * CAMERA_LEAD).clamp(0.0, self.world.width);
        events
    }

    /// Restart after a death: bumps the death counter and respawns the player
    /// at the spawn or the last activated checkpoint.
    pub fn restart(&mut self) {
        self.progress.deaths += 1;
        self.reset_to_spawn();
        log::debug!("restart, {} deaths", self.progress.deaths);
    }

    /// Jump to an unlocked level. Locked indices are refused here, not in the
    /// UI.
    pub fn select_level(&mut self, index: u32) -> Result<(), SelectError> {
        if index >= self.progress.unlocked_levels {
            return Err(SelectError::Locked);
        }
        self.progress.level_index = index;
        self.world = build_level(index, self.progress.difficulty);
        self.checkpoint = None;
        self.reset_to_spawn();
        log::info!("selected level {}", index + 1);
        Ok(())
    }

    /// Change difficulty and persist it. Takes effect on the next build.
    pub fn set_difficulty(&mut self, difficulty: crate::progress::Difficulty) {
        self.progress.difficulty = difficulty;
        self.store.save(&self.progress.to_saved());
    }

    /// Rebuild the player by value at the current respawn anchor.
    fn reset_to_spawn(&mut self) {
        let anchor = match self.checkpoint {
            Some(cp) => Vec2::new(
                cp.x - CHECKPOINT_OFFSET,
                cp.y - PLAYER_H - CHECKPOINT_SPAWN_LIFT,
            ),
            None => self.world.spawn,
        };
        self.player = Player::new(anchor);
    }

    /// Door opened: move to the next level (wrapping), rebuild the world and
    /// raise the unlocked high-water mark.
    fn advance_level(&mut self) -> u32 {
        self.progress.level_index = (self.progress.level_index + 1) % TOTAL_LEVELS;
        self.world = build_level(self.progress.level_index, self.progress.difficulty);
        self.checkpoint = None;
        self.reset_to_spawn();

        let need = self.progress.level_index + 1;
        if self.progress.unlocked_levels < need {
            self.progress.unlocked_levels = need;
            self.store.save(&self.progress.to_saved());
        }
        log::info!(
            "level complete -> level {} ({})",
            self.progress.level_index + 1,
            self.progress.difficulty.as_str()
        );
        self.progress.level_index
    }
}
