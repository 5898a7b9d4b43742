//! Neon Runner entry point
//!
//! Native builds run a short headless demo: a scripted player holds right and
//! hops through level 0, logging every surfaced event. The real host (canvas,
//! input, audio) lives outside this crate and drives [`Session::step`] the
//! same way once per display refresh.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_runner::sim::{GameEvent, TickInput};
    use neon_runner::{MemoryStore, Session};

    env_logger::init();

    let mut session = Session::new(Box::new(MemoryStore::new()));

    for frame in 0u32..1800 {
        let input = TickInput {
            left: false,
            right: true,
            // Short jump press every half second or so
            jump: frame % 30 < 4,
        };
        for event in session.step(&input) {
            match event {
                GameEvent::PlayerDied => {
                    log::info!("frame {frame}: died");
                    session.restart();
                }
                GameEvent::CheckpointActivated { pos } => {
                    log::info!("frame {frame}: checkpoint at ({:.0}, {:.0})", pos.x, pos.y);
                }
                GameEvent::LevelCompleted { next_index } => {
                    log::info!("frame {frame}: level complete, now on {}", next_index + 1);
                }
                GameEvent::LevelFailed => {
                    log::info!("frame {frame}: that door was fake");
                }
            }
        }
    }

    log::info!(
        "demo finished: level {}, {} deaths, {} unlocked",
        session.progress.level_index + 1,
        session.progress.deaths,
        session.progress.unlocked_levels
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm host drives the session through the library API instead.
}
