//! Sharpshot headless entry point
//!
//! Plays a scripted session against the simulation: the bot strafes back and forth,
//! points straight at the target and fires whenever it can. Useful
//! for balance checks on a tuning file.
//!
//! Usage: `sharpshot [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use sharpshot::platform::ManualClock;
    use sharpshot::sim::{Arena, GameEvent, MoveDirection};
    use sharpshot::{Game, Tuning, consts};
    use std::time::{SystemTime, UNIX_EPOCH};

    const WIDTH: f32 = 1000.0;
    const HEIGHT: f32 = 800.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const FRAMES: u32 = 60 * 60;
    /// Frames spent strafing in one direction before switching
    const STRAFE_FRAMES: u32 = 90;

    fn load_tuning() -> Tuning {
        let Some(path) = std::env::args().nth(1) else {
            return Tuning::default();
        };
        match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        env_logger::init();
        log::info!("Sharpshot (headless) starting...");

        let tuning = load_tuning();
        let arena = Arena::new(WIDTH, HEIGHT, consts::ARENA_BORDER)?;
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        let mut game = Game::new(ManualClock::new(0.0), arena, tuning, seed)?;
        let mut snapshot = game.frame();

        for frame in 1..=FRAMES {
            let strafe = if (frame / STRAFE_FRAMES) % 2 == 0 {
                (MoveDirection::Left, MoveDirection::Right)
            } else {
                (MoveDirection::Right, MoveDirection::Left)
            };
            let input = game.input_mut();
            input.release(strafe.1);
            input.press(strafe.0);
            input.set_pointer(snapshot.target.pos);
            input.request_fire();

            game.clock().advance(FRAME_MS);
            snapshot = game.frame();

            for event in game.last_events() {
                match event {
                    GameEvent::TargetDefeated { score, next_speed } => {
                        log::info!("Target down (score {}), next speed {}", score, next_speed);
                    }
                    other => log::trace!("{:?}", other),
                }
            }
        }

        let center = Vec2::new(WIDTH / 2.0, HEIGHT / 2.0);
        log::info!(
            "Done: {} shots, {} hits, {:.2}% accuracy, player drifted {:.1}px",
            snapshot.total_shots,
            snapshot.hit_shots,
            snapshot.lifetime_accuracy,
            (snapshot.player.pos - center).length()
        );
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `sharpshot::Game` directly
}
