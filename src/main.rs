//! Headless runner
//!
//! Usage: `fleet-shooter [settings.json] [menu|play]`
//!
//! Plays a scripted autopilot session against the logging renderer and
//! prints a JSON summary of the final frame. Set `RUST_LOG=debug` to watch
//! periodic frame reports.

use std::process::ExitCode;

use fleet_shooter::platform::ScriptedInput;
use fleet_shooter::renderer::LogRenderer;
use fleet_shooter::sim::Command;
use fleet_shooter::{Game, Settings, StartMode};

/// Frames to simulate before quitting (one minute at 60 fps)
const DEMO_FRAMES: u64 = 60 * 60;
/// Frames between autopilot shots
const FIRE_INTERVAL: u64 = 20;
/// Frames the autopilot holds each direction
const SWEEP_FRAMES: u64 = 240;

/// Sweep left and right across the screen, firing steadily
fn autopilot_script(frames: u64) -> ScriptedInput {
    let mut input = ScriptedInput::new();
    // Leaves the start menu; ignored if already playing
    input.schedule(0, Command::Restart);

    let mut moving_right = true;
    input.schedule(0, Command::MoveRightStart);
    for frame in 1..frames {
        if frame % SWEEP_FRAMES == 0 {
            if moving_right {
                input.schedule(frame, Command::MoveRightStop);
                input.schedule(frame, Command::MoveLeftStart);
            } else {
                input.schedule(frame, Command::MoveLeftStop);
                input.schedule(frame, Command::MoveRightStart);
            }
            moving_right = !moving_right;
        }
        if frame % FIRE_INTERVAL == 0 {
            input.schedule(frame, Command::Fire);
        }
    }
    input.schedule(frames, Command::Quit);
    input
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Fleet Shooter (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    let start = match args.next() {
        Some(mode) => match StartMode::from_str(&mode) {
            Some(start) => start,
            None => {
                log::error!("Unknown start mode '{mode}', expected 'menu' or 'play'");
                return ExitCode::FAILURE;
            }
        },
        None => StartMode::Immediate,
    };

    let mut game = match Game::new(settings, start) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Invalid settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut input = autopilot_script(DEMO_FRAMES);
    let mut renderer = LogRenderer::default();
    let rendered = game.run(&mut input, &mut renderer);
    log::info!("Rendered {} frames", rendered);

    if let Some(summary) = renderer.last_summary() {
        match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{json}"),
            Err(err) => log::warn!("Could not serialize summary: {err}"),
        }
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; embed the library instead
}
