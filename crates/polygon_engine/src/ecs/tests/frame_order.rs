//! Integration tests for pass ordering within a frame
//!
//! Drives the entity manager, scheduler and a recording surface together the
//! same way the engine loop does.

use crate::ecs::components::{
    CollisionComponent, EffectKind, FontHandle, LifespanComponent, ShapeComponent, TextComponent,
    TransformComponent,
};
use crate::ecs::{EntityKey, EntityManager, Systems, Tag};
use crate::foundation::math::{Color, Vec2};
use crate::foundation::time::Ticks;
use crate::render::{DrawCommand, Extent, RecordingSurface, RenderSurface};
use approx::assert_relative_eq;

fn shape(radius: f32) -> ShapeComponent {
    ShapeComponent::new(radius, 6, Color::BLACK, Color::WHITE, 2.0)
}

fn spawn(manager: &mut EntityManager, tag: Tag, position: Vec2, velocity: Vec2, radius: f32) -> EntityKey {
    let key = manager.create_entity(tag);
    manager.insert(key, TransformComponent::new(position, velocity, 0.0));
    manager.insert(key, shape(radius));
    key
}

fn frame(manager: &mut EntityManager, systems: &mut Systems, surface: &mut RecordingSurface, dt: f32) {
    manager.commit();
    systems.collisions_mut().retain_live(manager);
    surface.clear();
    systems.run(manager, surface, dt, Ticks::default());
    surface.present();
}

#[test]
fn test_left_edge_reflects_before_integrating() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(1280, 720));

    let key = spawn(&mut manager, Tag::Enemy, Vec2::new(2.0, 300.0), Vec2::new(-50.0, 0.0), 10.0);
    frame(&mut manager, &mut systems, &mut surface, 0.1);

    let transform = manager.get::<TransformComponent>(key).unwrap();
    assert_relative_eq!(transform.velocity, Vec2::new(50.0, 0.0));
    assert_relative_eq!(transform.position, Vec2::new(7.0, 300.0));
}

#[test]
fn test_render_sees_positions_before_movement() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(1280, 720));

    spawn(&mut manager, Tag::Enemy, Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 8.0);
    frame(&mut manager, &mut systems, &mut surface, 1.0);

    let DrawCommand::Shape(draw) = &surface.last_frame()[0] else {
        panic!("expected a shape draw");
    };
    assert_relative_eq!(draw.position, Vec2::new(100.0, 100.0));
}

#[test]
fn test_paint_order_is_creation_order() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(800, 600));

    spawn(&mut manager, Tag::Enemy, Vec2::new(100.0, 100.0), Vec2::zeros(), 4.0);
    let label = manager.create_entity(Tag::ScoreText);
    manager.insert(
        label,
        TextComponent::new(FontHandle::new("font.ttf"), "Score: 0", Vec2::new(30.0, 30.0), Color::WHITE, 24),
    );
    spawn(&mut manager, Tag::Player, Vec2::new(200.0, 200.0), Vec2::zeros(), 4.0);
    frame(&mut manager, &mut systems, &mut surface, 0.0);

    let kinds: Vec<_> = surface
        .last_frame()
        .iter()
        .map(|command| match command {
            DrawCommand::Shape(draw) => format!("shape@{}", draw.position.x),
            DrawCommand::Text(draw) => draw.text.clone(),
        })
        .collect();
    assert_eq!(kinds, vec!["shape@100", "Score: 0", "shape@200"]);
}

#[test]
fn test_uncommitted_entities_not_simulated() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(1280, 720));

    let key = spawn(&mut manager, Tag::Bullet, Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 4.0);
    let stats = systems.run(&mut manager, &mut surface, 1.0, Ticks::default());

    assert_eq!(stats.moved, 0);
    assert_eq!(stats.rendered_shapes, 0);
    assert_relative_eq!(manager.get::<TransformComponent>(key).unwrap().position, Vec2::new(100.0, 100.0));
}

#[test]
fn test_destroyed_entity_skipped_by_every_pass() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(1280, 720));

    let a = spawn(&mut manager, Tag::Enemy, Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), 5.0);
    let b = spawn(&mut manager, Tag::Bullet, Vec2::new(103.0, 100.0), Vec2::zeros(), 5.0);
    manager.insert(a, CollisionComponent::new(5.0));
    manager.insert(b, CollisionComponent::new(5.0));
    manager.insert(a, LifespanComponent::new(10, 5, EffectKind::Fade));
    manager.commit();

    manager.destroy(a);
    let stats = systems.run(&mut manager, &mut surface, 1.0, Ticks::default());

    assert_eq!(stats.rendered_shapes, 1);
    assert_eq!(stats.moved, 1);
    assert_eq!(stats.new_collisions, 0);
    assert_eq!(manager.get::<LifespanComponent>(a).unwrap().remaining, 10);
    assert_relative_eq!(manager.get::<TransformComponent>(a).unwrap().position, Vec2::new(100.0, 100.0));
}

#[test]
fn test_sweep_sees_positions_after_movement() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(1280, 720));

    let enemy = spawn(&mut manager, Tag::Enemy, Vec2::new(100.0, 100.0), Vec2::zeros(), 10.0);
    let bullet = spawn(&mut manager, Tag::Bullet, Vec2::new(120.0, 100.0), Vec2::new(-20.0, 0.0), 5.0);
    manager.insert(enemy, CollisionComponent::new(10.0));
    manager.insert(bullet, CollisionComponent::new(5.0));

    frame(&mut manager, &mut systems, &mut surface, 0.5);
    assert_eq!(systems.collisions().len(), 1);

    let mut hits = Vec::new();
    systems.collisions_mut().drain(Tag::Bullet, Tag::Enemy, |b, e| hits.push((b, e)));
    assert_eq!(hits, vec![(bullet, enemy)]);
}

#[test]
fn test_resize_changes_bounds() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(1280, 720));

    let key = spawn(&mut manager, Tag::Enemy, Vec2::new(395.0, 100.0), Vec2::new(10.0, 0.0), 10.0);
    frame(&mut manager, &mut systems, &mut surface, 0.0);
    assert_relative_eq!(manager.get::<TransformComponent>(key).unwrap().velocity.x, 10.0);

    surface.set_extent(Extent::new(400, 300));
    frame(&mut manager, &mut systems, &mut surface, 0.0);
    assert_relative_eq!(manager.get::<TransformComponent>(key).unwrap().velocity.x, -10.0);
}
