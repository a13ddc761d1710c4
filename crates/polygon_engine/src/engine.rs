//! Core engine implementation
//!
//! The engine owns the entity manager, the pass scheduler, input state and
//! the layer stack, and drives them against an external render surface and
//! event source. One call to [`Engine::run`] runs the whole main loop.

use thiserror::Error;

use crate::application::{AppError, FrameContext, Layer};
use crate::config::EngineConfig;
use crate::ecs::{EntityManager, FrameStats, Systems};
use crate::events::{Event, EventCategory, EventSource};
use crate::foundation::time::Timer;
use crate::input::InputManager;
use crate::render::{Extent, RenderSurface};

/// Main engine struct
///
/// Generic over the platform pieces so callers keep typed access to them.
pub struct Engine<S: RenderSurface, E: EventSource> {
    config: EngineConfig,
    entities: EntityManager,
    systems: Systems,
    input: InputManager,
    layers: Vec<Box<dyn Layer>>,
    surface: S,
    event_source: E,
    events: Vec<Event>,
    timer: Timer,
    fixed_delta: Option<f32>,
    last_stats: FrameStats,
    frame: u64,
    running: bool,
}

impl<S: RenderSurface, E: EventSource> Engine<S, E> {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, surface: S, event_source: E) -> Self {
        log::info!(
            "Initializing engine: {} ({}x{})",
            config.window.title,
            config.window.width,
            config.window.height
        );

        Self {
            config,
            entities: EntityManager::new(),
            systems: Systems::new(),
            input: InputManager::new(),
            layers: Vec::new(),
            surface,
            event_source,
            events: Vec::new(),
            timer: Timer::new(),
            fixed_delta: None,
            last_stats: FrameStats::default(),
            frame: 0,
            running: true,
        }
    }

    /// Use a constant timestep instead of the wall clock
    pub fn set_fixed_delta(&mut self, delta_time: Option<f32>) {
        self.fixed_delta = delta_time;
    }

    /// Attach a layer; it updates after every layer pushed before it
    pub fn push_layer(&mut self, mut layer: Box<dyn Layer>) -> Result<(), EngineError> {
        log::info!("Attaching layer '{}'", layer.name());

        let mut ctx = FrameContext::new(
            &mut self.entities,
            self.systems.collisions_mut(),
            &self.input,
            self.surface.extent(),
            &self.config,
            0.0,
            self.frame,
        );
        layer.on_attach(&mut ctx).map_err(|source| EngineError::Layer {
            layer: layer.name().to_string(),
            source,
        })?;
        if ctx.quit_requested() {
            self.running = false;
        }

        self.layers.push(layer);
        Ok(())
    }

    /// Run the main loop until a close event, a quit request or the frame cap
    ///
    /// Layers are detached before returning, also on error. Returns the
    /// number of frames run.
    pub fn run(&mut self) -> Result<u64, EngineError> {
        log::info!("Starting main loop...");

        let result = self.main_loop();
        self.detach_layers();

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            self.frame,
            self.timer.average_fps()
        );
        result.map(|()| self.frame)
    }

    fn main_loop(&mut self) -> Result<(), EngineError> {
        while self.running {
            if self.config.simulation.max_frames.is_some_and(|max| self.frame >= max) {
                log::debug!("Frame cap reached");
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// Run exactly one frame
    pub fn step(&mut self) -> Result<FrameStats, EngineError> {
        let delta_time = match self.fixed_delta {
            Some(delta_time) => {
                self.timer.advance(delta_time);
                delta_time
            }
            None => self.timer.tick(),
        };

        self.events.clear();
        self.event_source.poll(&mut self.events);
        self.input.begin_frame();
        for event in self.events.iter().filter(|event| event.is_in(EventCategory::INPUT)) {
            self.input.handle_event(event);
        }

        self.update_layers(delta_time)?;

        self.entities.commit();
        self.systems.collisions_mut().retain_live(&self.entities);

        self.surface.clear();
        let ticks = self.config.ticks();
        self.last_stats = self.systems.run(&mut self.entities, &mut self.surface, delta_time, ticks);
        self.surface.present();

        for event in &self.events {
            match *event {
                Event::WindowClosed => {
                    log::info!("Window close requested");
                    self.running = false;
                }
                Event::WindowResized { width, height } => {
                    log::debug!("Window resized to {}x{}", width, height);
                    self.surface.set_extent(Extent::new(width, height));
                }
                _ => {}
            }
        }

        self.frame += 1;
        Ok(self.last_stats)
    }

    fn update_layers(&mut self, delta_time: f32) -> Result<(), EngineError> {
        let mut ctx = FrameContext::new(
            &mut self.entities,
            self.systems.collisions_mut(),
            &self.input,
            self.surface.extent(),
            &self.config,
            delta_time,
            self.frame,
        );

        for layer in &mut self.layers {
            layer.on_update(&mut ctx).map_err(|source| EngineError::Layer {
                layer: layer.name().to_string(),
                source,
            })?;
        }

        if ctx.quit_requested() {
            log::info!("Engine shutdown requested");
            self.running = false;
        }
        Ok(())
    }

    fn detach_layers(&mut self) {
        while let Some(mut layer) = self.layers.pop() {
            log::info!("Detaching layer '{}'", layer.name());
            layer.on_detach();
        }
    }

    /// Whether the main loop would keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Stats of the most recent frame
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the entity manager
    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// Get mutable access to the entity manager
    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    /// Get the pass scheduler
    pub fn systems(&self) -> &Systems {
        &self.systems
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Get the render surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get mutable access to the render surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A layer returned an error
    #[error("Layer '{layer}' failed: {source}")]
    Layer {
        /// Name of the failing layer
        layer: String,
        /// Error the layer returned
        #[source]
        source: AppError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::ecs::components::{ShapeComponent, TransformComponent};
    use crate::ecs::Tag;
    use crate::events::ScriptedEvents;
    use crate::foundation::math::{Color, Vec2};
    use crate::input::KeyCode;
    use crate::render::RecordingSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct ScriptedLayer {
        log: Rc<RefCell<Vec<String>>>,
        quit_on_frame: Option<u64>,
        fail_on_frame: Option<u64>,
    }

    impl Layer for ScriptedLayer {
        fn name(&self) -> &str {
            "scripted"
        }

        fn on_attach(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), AppError> {
            let key = ctx.entities.create_entity(Tag::Player);
            ctx.entities.insert(key, TransformComponent::at(Vec2::new(50.0, 50.0)));
            ctx.entities.insert(key, ShapeComponent::new(10.0, 3, Color::WHITE, Color::RED, 1.0));
            self.log.borrow_mut().push("attach".to_string());
            Ok(())
        }

        fn on_update(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), AppError> {
            self.log.borrow_mut().push(format!(
                "update {} live={} w={}",
                ctx.frame,
                ctx.entities.len(),
                ctx.input.was_key_pressed(KeyCode::W)
            ));
            if self.fail_on_frame == Some(ctx.frame) {
                return Err(AppError::GameLogic("boom".to_string()));
            }
            if self.quit_on_frame == Some(ctx.frame) {
                ctx.request_quit();
            }
            Ok(())
        }

        fn on_detach(&mut self) {
            self.log.borrow_mut().push("detach".to_string());
        }
    }

    fn config(max_frames: Option<u64>) -> EngineConfig {
        EngineConfig {
            simulation: SimulationConfig {
                max_frames,
                ..SimulationConfig::default()
            },
            ..EngineConfig::default()
        }
    }

    fn engine(max_frames: Option<u64>, events: ScriptedEvents) -> Engine<RecordingSurface, ScriptedEvents> {
        let mut engine = Engine::new(config(max_frames), RecordingSurface::new(Extent::new(320, 240)), events);
        engine.set_fixed_delta(Some(1.0 / 60.0));
        engine
    }

    #[test]
    fn test_frame_cap_and_layer_lifecycle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = engine(Some(3), ScriptedEvents::new().at(1, Event::KeyPressed(KeyCode::W)));
        engine
            .push_layer(Box::new(ScriptedLayer {
                log: Rc::clone(&log),
                ..ScriptedLayer::default()
            }))
            .unwrap();

        assert_eq!(engine.run().unwrap(), 3);
        assert_eq!(
            *log.borrow(),
            vec![
                "attach",
                "update 0 live=0 w=false",
                "update 1 live=1 w=true",
                "update 2 live=1 w=false",
                "detach",
            ]
        );
        assert_eq!(engine.surface().frames_presented(), 3);
    }

    #[test]
    fn test_close_event_stops_after_present() {
        let mut engine = engine(None, ScriptedEvents::new().at(4, Event::WindowClosed));
        assert_eq!(engine.run().unwrap(), 5);
        assert_eq!(engine.surface().frames_presented(), 5);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_quit_request_from_layer() {
        let mut engine = engine(Some(100), ScriptedEvents::new());
        engine
            .push_layer(Box::new(ScriptedLayer {
                quit_on_frame: Some(1),
                ..ScriptedLayer::default()
            }))
            .unwrap();
        assert_eq!(engine.run().unwrap(), 2);
    }

    #[test]
    fn test_resize_updates_extent() {
        let mut engine = engine(
            Some(2),
            ScriptedEvents::new().at(0, Event::WindowResized { width: 800, height: 600 }),
        );
        engine.run().unwrap();
        assert_eq!(engine.surface().extent(), Extent::new(800, 600));
    }

    #[test]
    fn test_layer_error_detaches_and_propagates() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = engine(Some(10), ScriptedEvents::new());
        engine
            .push_layer(Box::new(ScriptedLayer {
                log: Rc::clone(&log),
                fail_on_frame: Some(2),
                ..ScriptedLayer::default()
            }))
            .unwrap();

        let err = engine.run().unwrap_err();
        assert!(matches!(err, EngineError::Layer { ref layer, .. } if layer == "scripted"));
        assert_eq!(log.borrow().last().map(String::as_str), Some("detach"));
    }

    #[test]
    fn test_committed_entities_rendered_same_frame() {
        let mut engine = engine(Some(1), ScriptedEvents::new());
        engine.push_layer(Box::new(ScriptedLayer::default())).unwrap();
        engine.run().unwrap();

        assert_eq!(engine.last_stats().rendered_shapes, 1);
        assert_eq!(engine.surface().last_frame().len(), 1);
    }
}
