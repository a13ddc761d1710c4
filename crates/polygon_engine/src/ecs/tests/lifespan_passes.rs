//! Integration tests for lifespan countdown across scheduler runs

use crate::ecs::components::{EffectKind, LifespanComponent, ShapeComponent, TransformComponent};
use crate::ecs::{EntityManager, Systems, Tag};
use crate::foundation::math::{Color, Vec2};
use crate::foundation::time::Ticks;
use crate::render::{Extent, RecordingSurface};

#[test]
fn test_lifespan_destroys_after_exactly_n_passes() {
    for effect in [EffectKind::Disappear, EffectKind::Fade, EffectKind::Blink] {
        for total in [1_u32, 2, 7, 30] {
            let mut manager = EntityManager::new();
            let mut systems = Systems::new();
            let mut surface = RecordingSurface::new(Extent::new(640, 480));

            let key = manager.create_entity(Tag::EffectEntity);
            manager.insert(key, TransformComponent::at(Vec2::new(320.0, 240.0)));
            manager.insert(key, ShapeComponent::new(8.0, 4, Color::WHITE, Color::RED, 1.0));
            manager.insert(key, LifespanComponent::new(total, total / 2, effect));
            manager.commit();

            for pass in 1..=total {
                let stats = systems.run(&mut manager, &mut surface, 0.016, Ticks::default());
                let expected = pass == total;
                assert_eq!(stats.expired == 1, expected, "{effect:?} total={total} pass={pass}");
                assert_eq!(!manager.is_active(key), expected);
            }

            manager.commit();
            assert!(manager.record(key).is_none());
        }
    }
}

#[test]
fn test_zero_lifespan_destroyed_on_first_pass() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(640, 480));

    let key = manager.create_entity(Tag::Bullet);
    manager.insert(key, ShapeComponent::new(8.0, 4, Color::WHITE, Color::RED, 1.0));
    manager.insert(key, LifespanComponent::new(0, 0, EffectKind::Disappear));
    manager.commit();

    let stats = systems.run(&mut manager, &mut surface, 0.016, Ticks::default());
    assert_eq!(stats.expired, 1);
    assert!(!manager.is_active(key));
}

#[test]
fn test_lifespan_without_shape_is_ignored() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(640, 480));

    let key = manager.create_entity(Tag::Default);
    manager.insert(key, LifespanComponent::new(1, 0, EffectKind::Fade));
    manager.commit();

    systems.run(&mut manager, &mut surface, 0.016, Ticks::default());
    assert!(manager.is_active(key));
    assert_eq!(manager.get::<LifespanComponent>(key).unwrap().remaining, 1);
}

#[test]
fn test_fade_reaches_render_next_frame() {
    let mut manager = EntityManager::new();
    let mut systems = Systems::new();
    let mut surface = RecordingSurface::new(Extent::new(640, 480));

    let key = manager.create_entity(Tag::EffectEntity);
    manager.insert(key, TransformComponent::at(Vec2::new(320.0, 240.0)));
    manager.insert(key, ShapeComponent::new(8.0, 4, Color::rgba(255, 255, 255, 200), Color::RED, 1.0));
    manager.insert(key, LifespanComponent::new(3, 2, EffectKind::Fade));
    manager.commit();

    systems.run(&mut manager, &mut surface, 0.016, Ticks::default());
    assert_eq!(manager.get::<ShapeComponent>(key).unwrap().fill_color.a, 200);

    systems.run(&mut manager, &mut surface, 0.016, Ticks::default());
    assert_eq!(manager.get::<ShapeComponent>(key).unwrap().fill_color.a, 100);
}
