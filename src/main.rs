//! Orbital Flight entry point
//!
//! Headless demo: generates a scene, then runs the frame step at 60 Hz with
//! orbital flight enabled and logs what happens.
//!
//! Usage: `orbital-flight [settings.json] [frames]`

use orbital_flight::Settings;
use orbital_flight::sim::{ComponentStore, StepInput, scene, step};

/// Frame duration at 60 Hz (ms)
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Bodies spawned around the player
const SCENE_BODIES: usize = 16;
const SCENE_SEED: u64 = 427;
const DEFAULT_FRAMES: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orbital Flight (native) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    // The demo is about flight; force it on
    if !settings.flight_mode {
        settings.toggle_flight();
    }
    let config = settings.physics_config();

    let (mut world, player) = scene::generate(SCENE_SEED, SCENE_BODIES, settings.viewport, &config.gravity);
    let input = StepInput {
        elapsed_ms: FRAME_MS,
        window_width_px: settings.viewport.x,
        window_height_px: settings.viewport.y,
    };

    let mut total_events = 0;
    for frame in 0..frames {
        let report = match step(&mut world, &input, &config) {
            Ok(report) => report,
            Err(e) => {
                log::error!("frame {}: {}", frame, e);
                std::process::exit(1);
            }
        };
        total_events += report.collision_events;

        let hits: Vec<_> = world.collisions.involving(player).collect();
        if !hits.is_empty() {
            log::info!("frame {}: player hit {:?}", frame, hits);
        }

        if frame % 60 == 0 {
            if let Some(m) = world.motions.get(player) {
                let r = (m.position - config.gravity.center).length();
                log::info!(
                    "frame {}: player at ({:.1}, {:.1}) r={:.1} speed={:.1} angle={:.2}",
                    frame,
                    m.position.x,
                    m.position.y,
                    r,
                    m.velocity.length(),
                    m.angle
                );
            }
        }
    }

    log::debug!("last frame events: {:?}", world.collisions.as_slice());
    println!(
        "Ran {} frames: {} bodies, {} collision events total",
        frames,
        world.motions.len(),
        total_events
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the host game
}
