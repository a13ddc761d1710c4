//! Game configuration
//!
//! Everything is optional in the file; missing fields take the defaults
//! below, which reproduce the classic arena tuning.

use polygon_engine::config::{Config, EngineConfig, SimulationConfig, WindowConfig};
use polygon_engine::foundation::math::Color;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings (window, simulation clock, logging)
    pub engine: EngineConfig,

    /// Player settings
    pub player: PlayerConfig,

    /// Enemy settings
    pub enemy: EnemyConfig,

    /// Bullet settings
    pub bullet: BulletConfig,

    /// Enemy death burst settings
    pub particles: ParticleConfig,

    /// Score label settings
    pub score: ScoreConfig,

    /// Seconds everything takes to fade out after the player is hit
    pub restart_fade: f32,

    /// Rotation applied to every shape, in degrees per second
    pub rotation_speed: f32,

    /// Random seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Config for GameConfig {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                window: WindowConfig {
                    title: "Geometry Wars".to_string(),
                    ..WindowConfig::default()
                },
                simulation: SimulationConfig {
                    max_frames: Some(600),
                    ..SimulationConfig::default()
                },
                ..EngineConfig::default()
            },
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            bullet: BulletConfig::default(),
            particles: ParticleConfig::default(),
            score: ScoreConfig::default(),
            restart_fade: 0.5,
            rotation_speed: 100.0,
            seed: None,
        }
    }
}

/// Player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Shape and collision radius
    pub radius: f32,
    /// Number of vertices
    pub vertices: u32,
    /// Speed along each axis while a movement key is held
    pub speed: f32,
    /// Fill color
    pub fill: Color,
    /// Outline color
    pub outline: Color,
    /// Outline thickness
    pub outline_thickness: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 64.0,
            vertices: 8,
            speed: 300.0,
            fill: Color::rgb(10, 10, 10),
            outline: Color::RED,
            outline_thickness: 4.0,
        }
    }
}

/// Enemy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Shape and collision radius
    pub radius: f32,
    /// Fewest vertices a spawned enemy can have
    pub min_vertices: u32,
    /// Most vertices a spawned enemy can have
    pub max_vertices: u32,
    /// Initial speed along each axis
    pub speed: f32,
    /// Fill color; the outline is random
    pub fill: Color,
    /// Outline thickness
    pub outline_thickness: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Seconds a hit enemy takes to fade out
    pub hit_fade: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            radius: 64.0,
            min_vertices: 3,
            max_vertices: 8,
            speed: 300.0,
            fill: Color::rgb(10, 10, 10),
            outline_thickness: 4.0,
            spawn_interval: 3.0,
            hit_fade: 0.15,
        }
    }
}

/// Bullet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Shape and collision radius
    pub radius: f32,
    /// Number of vertices
    pub vertices: u32,
    /// Speed towards the cursor
    pub speed: f32,
    /// Fill color
    pub fill: Color,
    /// Outline color
    pub outline: Color,
    /// Seconds before the bullet disappears
    pub lifespan: f32,
    /// Seconds of fading at the end of the lifespan
    pub fade: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            radius: 16.0,
            vertices: 32,
            speed: 600.0,
            fill: Color::WHITE,
            outline: Color::RED,
            lifespan: 0.8,
            fade: 0.5,
        }
    }
}

/// Enemy death burst settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particle radius
    pub radius: f32,
    /// Speed away from the enemy's centre
    pub speed: f32,
    /// Seconds before a particle disappears
    pub lifespan: f32,
    /// Seconds of fading at the end of the lifespan
    pub fade: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            radius: 16.0,
            speed: 300.0,
            lifespan: 0.6,
            fade: 0.4,
        }
    }
}

/// Score label settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Points per destroyed enemy
    pub per_kill: u32,
    /// Font file
    pub font: String,
    /// Character size
    pub size: u32,
    /// Label position (x, y)
    pub position: [f32; 2],
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            per_kill: 100,
            font: "assets/Orbitron-Regular.ttf".to_string(),
            size: 24,
            position: [30.0, 30.0],
        }
    }
}
