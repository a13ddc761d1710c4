//! Arena shooter layer
//!
//! The player steers with WASD and fires at the cursor with the left mouse
//! button. Enemies bounce around the arena; shooting one bursts it into
//! fading particles and scores points. Touching one fades the whole arena
//! out and starts over.

use polygon_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;

/// Game layer state
pub struct Game {
    config: GameConfig,
    rng: StdRng,
    player: Option<EntityKey>,
    score_label: Option<EntityKey>,
    score: u32,
    paused: bool,
    spawn_timer: u32,
}

impl Game {
    /// Create the game with a seeded random generator
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            player: None,
            score_label: None,
            score: 0,
            paused: false,
            spawn_timer: 0,
        }
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the game is waiting to respawn the player
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current player entity, if one was spawned
    pub fn player(&self) -> Option<EntityKey> {
        self.player
    }

    fn spawn_player(&mut self, ctx: &mut FrameContext<'_>) {
        let player = &self.config.player;
        let key = ctx.entities.create_entity(Tag::Player);
        let centre = Vec2::new(ctx.extent.width_f32() / 2.0, ctx.extent.height_f32() / 2.0);

        ctx.entities.insert(key, TransformComponent::at(centre));
        ctx.entities.insert(
            key,
            ShapeComponent::new(player.radius, player.vertices, player.fill, player.outline, player.outline_thickness),
        );
        ctx.entities.insert(key, CollisionComponent::new(player.radius));

        self.player = Some(key);
    }

    fn spawn_enemy(&mut self, ctx: &mut FrameContext<'_>) {
        let enemy = &self.config.enemy;
        let vertices = self.rng.gen_range(enemy.min_vertices..=enemy.max_vertices.max(enemy.min_vertices));
        let outline = Color::rgb(
            self.rng.gen_range(1..=255),
            self.rng.gen_range(1..=255),
            self.rng.gen_range(1..=255),
        );
        let position = Vec2::new(
            random_coordinate(&mut self.rng, enemy.radius, ctx.extent.width_f32()),
            random_coordinate(&mut self.rng, enemy.radius, ctx.extent.height_f32()),
        );

        let key = ctx.entities.create_entity(Tag::Enemy);
        ctx.entities.insert(
            key,
            TransformComponent::new(position, Vec2::new(enemy.speed, enemy.speed), 0.0),
        );
        ctx.entities.insert(
            key,
            ShapeComponent::new(enemy.radius, vertices, enemy.fill, outline, enemy.outline_thickness),
        );
        ctx.entities.insert(key, CollisionComponent::new(enemy.radius));
    }

    fn spawn_bullet(&mut self, ctx: &mut FrameContext<'_>) {
        let Some(origin) = self
            .player
            .and_then(|player| ctx.entities.get::<TransformComponent>(player))
            .map(|transform| transform.position)
        else {
            return;
        };
        // Clicking exactly on the player gives no direction
        let Some(direction) = (ctx.input.mouse_position() - origin).try_normalize(f32::EPSILON) else {
            return;
        };

        let bullet = &self.config.bullet;
        let ticks = ctx.ticks();
        let key = ctx.entities.create_entity(Tag::Bullet);
        ctx.entities.insert(key, TransformComponent::new(origin, direction * bullet.speed, 0.0));
        ctx.entities.insert(
            key,
            ShapeComponent::new(bullet.radius, bullet.vertices, bullet.fill, bullet.outline, 4.0),
        );
        ctx.entities.insert(
            key,
            LifespanComponent::new(ticks.from_secs(bullet.lifespan), ticks.from_secs(bullet.fade), EffectKind::Fade),
        );
        ctx.entities.insert(key, CollisionComponent::new(bullet.radius));
    }

    /// One fading particle per vertex, flying outwards from the centre
    fn spawn_death_burst(&self, ctx: &mut FrameContext<'_>, enemy: EntityKey) {
        let (Some(transform), Some(shape)) = (
            ctx.entities.get::<TransformComponent>(enemy),
            ctx.entities.get::<ShapeComponent>(enemy),
        ) else {
            return;
        };
        let centre = transform.position;
        let (vertices, fill, outline) = (shape.point_count.max(1), shape.fill_color, shape.outline_color);

        let particles = &self.config.particles;
        let ticks = ctx.ticks();
        let step = 360.0 / vertices as f32;

        for i in 1..=vertices {
            let angle = (step * i as f32).to_radians();
            let velocity = Vec2::new(angle.cos(), angle.sin()) * particles.speed;

            let key = ctx.entities.create_entity(Tag::EffectEntity);
            ctx.entities.insert(key, TransformComponent::new(centre, velocity, 0.0));
            ctx.entities.insert(key, ShapeComponent::new(particles.radius, vertices, fill, outline, 4.0));
            ctx.entities.insert(
                key,
                LifespanComponent::new(
                    ticks.from_secs(particles.lifespan),
                    ticks.from_secs(particles.fade),
                    EffectKind::Fade,
                ),
            );
        }
        log::debug!("Enemy {:?} burst into {} particles", ctx.entities.id_of(enemy), vertices);
    }

    fn spawn_score_label(&mut self, ctx: &mut FrameContext<'_>) {
        let score = &self.config.score;
        let key = ctx.entities.create_entity(Tag::ScoreText);
        ctx.entities.insert(
            key,
            TextComponent::new(
                FontHandle::new(&score.font),
                score_text(self.score),
                Vec2::new(score.position[0], score.position[1]),
                Color::WHITE,
                score.size,
            ),
        );
        self.score_label = Some(key);
    }

    fn set_score(&mut self, ctx: &mut FrameContext<'_>, score: u32) {
        self.score = score;
        if let Some(label) = self.score_label.and_then(|key| ctx.entities.get_mut::<TextComponent>(key)) {
            label.set_text(score_text(score));
        }
    }

    fn handle_input(&mut self, ctx: &mut FrameContext<'_>) {
        let Some(player) = self.player.filter(|&key| ctx.entities.is_active(key)) else {
            return;
        };
        let speed = self.config.player.speed;
        let input = ctx.input;

        let presses: [(KeyCode, usize, f32); 4] = [
            (KeyCode::W, 1, -speed),
            (KeyCode::S, 1, speed),
            (KeyCode::A, 0, -speed),
            (KeyCode::D, 0, speed),
        ];

        if let Some(transform) = ctx.entities.get_mut::<TransformComponent>(player) {
            for (key, axis, value) in presses {
                if input.was_key_pressed(key) {
                    transform.velocity[axis] = value;
                }
            }
            for (key, axis, _) in presses {
                if input.was_key_released(key) {
                    transform.velocity[axis] = 0.0;
                }
            }
        }

        if input.was_button_pressed(MouseButton::Left) {
            self.spawn_bullet(ctx);
        }
    }

    fn handle_collisions(&mut self, ctx: &mut FrameContext<'_>) {
        let mut hits = Vec::new();
        ctx.collisions.drain(Tag::Enemy, Tag::Bullet, |enemy, bullet| hits.push((enemy, bullet)));

        let ticks = ctx.ticks();
        let hit_fade = ticks.from_secs(self.config.enemy.hit_fade);
        for (enemy, bullet) in hits {
            ctx.entities.insert(enemy, LifespanComponent::new(hit_fade, hit_fade, EffectKind::Fade));
            self.spawn_death_burst(ctx, enemy);
            ctx.entities.destroy(bullet);
            self.set_score(ctx, self.score + self.config.score.per_kill);
        }

        if ctx.collisions.drain(Tag::Enemy, Tag::Player, |_, _| {}) > 0 {
            self.restart(ctx);
        }

        // Pairs nothing reacts to
        for (a, b) in [(Tag::Player, Tag::Bullet), (Tag::Enemy, Tag::Enemy), (Tag::Bullet, Tag::Bullet)] {
            ctx.collisions.drain(a, b, |_, _| {});
        }
    }

    fn restart(&mut self, ctx: &mut FrameContext<'_>) {
        log::debug!("Player hit at score {}, restarting", self.score);

        self.set_score(ctx, 0);
        self.paused = true;
        self.spawn_timer = 0;

        let fade = ctx.ticks().from_secs(self.config.restart_fade);
        for key in ctx.entities.live_entities().to_vec() {
            if let Some(transform) = ctx.entities.get_mut::<TransformComponent>(key) {
                transform.velocity = Vec2::zeros();
            }
            ctx.entities.insert(key, LifespanComponent::new(fade, fade, EffectKind::Fade));
        }
    }

    fn rotate_all(&self, ctx: &mut FrameContext<'_>) {
        let step = self.config.rotation_speed * ctx.delta_time;
        for transform in ctx.entities.components_mut().transforms.values_mut() {
            transform.angle += step;
        }
    }
}

impl Layer for Game {
    fn name(&self) -> &str {
        "geometry_wars"
    }

    fn on_attach(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), AppError> {
        let enemy = &self.config.enemy;
        if enemy.min_vertices == 0 || enemy.min_vertices > enemy.max_vertices {
            return Err(AppError::GameLogic(format!(
                "invalid enemy vertex range {}..={}",
                enemy.min_vertices, enemy.max_vertices
            )));
        }

        self.spawn_player(ctx);
        self.spawn_enemy(ctx);
        self.spawn_score_label(ctx);
        Ok(())
    }

    fn on_update(&mut self, ctx: &mut FrameContext<'_>) -> Result<(), AppError> {
        self.handle_input(ctx);
        self.handle_collisions(ctx);
        self.rotate_all(ctx);

        if self.spawn_timer >= ctx.ticks().from_secs(self.config.enemy.spawn_interval) {
            if self.paused {
                self.spawn_player(ctx);
                self.paused = false;
            } else {
                self.spawn_enemy(ctx);
            }
            self.spawn_timer = 0;
        }
        self.spawn_timer += 1;

        Ok(())
    }

    fn on_detach(&mut self) {
        log::info!("Final score: {}", self.score);
    }
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// Random coordinate keeping a shape of `radius` inside `[0, limit]`
fn random_coordinate(rng: &mut impl Rng, radius: f32, limit: f32) -> f32 {
    let high = limit - radius;
    if high > radius {
        rng.gen_range(radius..high)
    } else {
        limit / 2.0
    }
}
