//! Geometry Wars - arena shooter built with polygon_engine
//!
//! Runs headless: frames are drawn into a recording surface and input comes
//! from a short scripted demo. A windowing backend plugs in by implementing
//! `RenderSurface` and `EventSource`.

use geometry_wars::{Game, GameConfig};
use polygon_engine::foundation::logging;
use polygon_engine::prelude::*;

const CONFIG_PATH: &str = "geometry_wars.toml";

/// Scripted demo: strafe around and fire a few shots
fn demo_script(extent: Extent) -> ScriptedEvents {
    let (width, height) = (extent.width_f32(), extent.height_f32());
    let shot = |frame: u64, x: f32, y: f32| {
        [
            (frame, Event::MouseButtonPressed { button: MouseButton::Left, x, y }),
            (frame + 1, Event::MouseButtonReleased { button: MouseButton::Left, x, y }),
        ]
    };

    let mut script = ScriptedEvents::new()
        .at(30, Event::KeyPressed(KeyCode::D))
        .at(90, Event::KeyReleased(KeyCode::D))
        .at(120, Event::KeyPressed(KeyCode::W))
        .at(150, Event::KeyReleased(KeyCode::W));

    for (frame, event) in shot(60, width * 0.1, height * 0.1)
        .into_iter()
        .chain(shot(200, width * 0.9, height * 0.2))
        .chain(shot(320, width * 0.5, height * 0.9))
        .chain(shot(450, width * 0.2, height * 0.8))
    {
        script.push(frame, event);
    }
    script
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;
    logging::init(&config.engine.logging.filter);

    let extent = Extent::new(config.engine.window.width, config.engine.window.height);
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Starting Geometry Wars (seed {})", seed);

    let mut engine = Engine::new(
        config.engine.clone(),
        RecordingSurface::new(extent),
        demo_script(extent),
    );
    engine.set_fixed_delta(Some(1.0 / config.engine.simulation.ticks_per_second.max(1) as f32));
    engine.push_layer(Box::new(Game::new(config, seed)))?;

    let frames = engine.run()?;
    log::info!(
        "Ran {} frames, {} shapes on the last one",
        frames,
        engine.last_stats().rendered_shapes
    );
    Ok(())
}
