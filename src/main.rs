//! Inverted World headless runner
//!
//! Drives the simulation with a simple autopilot at a fixed frame rate and
//! reports how the run went. Usage: `inverted-world [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
use inverted_world::audio::{AudioSink, LogAudio, dispatch_events};
#[cfg(not(target_arch = "wasm32"))]
use inverted_world::sim::{FixedStepper, TickInput, World};
#[cfg(not(target_arch = "wasm32"))]
use inverted_world::{Tuning, TuningError};

/// Host frame time the runner pretends to render at
#[cfg(not(target_arch = "wasm32"))]
const FRAME_DT: f32 = 1.0 / 60.0;
/// Simulated seconds before the run is cut off
#[cfg(not(target_arch = "wasm32"))]
const MAX_RUN_SECONDS: f32 = 600.0;
/// Swing when an enemy is this close
#[cfg(not(target_arch = "wasm32"))]
const AUTOPILOT_REACH: f32 = 70.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(t) => t,
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                return std::process::ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return std::process::ExitCode::FAILURE;
        }
        None => 0x1d_ea5e,
    };

    log::info!("Inverted World (headless) starting...");
    let mut world = World::new(tuning, seed);
    let mut stepper = FixedStepper::new();
    let mut audio = LogAudio::new();
    audio.start_music();

    let mut frame: u64 = 0;
    let mut elapsed = 0.0;
    while !world.is_game_over() && elapsed < MAX_RUN_SECONDS {
        let input = autopilot(&world, frame);
        stepper.advance(FRAME_DT, &mut world, &input);
        dispatch_events(&mut audio, &world.drain_events());
        frame += 1;
        elapsed += FRAME_DT;
    }
    audio.stop_music();

    println!(
        "{} after {:.1}s: score {}, wave {}, lives {}, map {}, {} sound effects",
        if world.is_game_over() { "Game over" } else { "Survived" },
        elapsed,
        world.score(),
        world.wave(),
        world.lives(),
        world.current_map(),
        audio.effects_played()
    );
    std::process::ExitCode::SUCCESS
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<Tuning, TuningError> {
    let json = std::fs::read_to_string(path)?;
    Tuning::from_json(&json)
}

/// Walk toward the nearest live enemy and swing when it is in reach.
/// Attack alternates frames so each swing is a fresh press.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(world: &World, frame: u64) -> TickInput {
    let me = world.player.pos;
    let nearest = world
        .enemies
        .iter()
        .filter(|e| !e.is_dying())
        .min_by(|a, b| a.pos.distance_squared(me).total_cmp(&b.pos.distance_squared(me)));

    let Some(enemy) = nearest else {
        return TickInput::default();
    };

    let diff = enemy.pos - me;
    TickInput {
        left: diff.x < -10.0,
        right: diff.x > 10.0,
        up: diff.y < -10.0,
        down: diff.y > 10.0,
        attack: diff.length() < AUTOPILOT_REACH && frame % 2 == 0,
        ..Default::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is a library on the web; the host page drives it
}
