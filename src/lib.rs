//! Fleet Shooter - a fixed-viewport arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, collisions, session)
//! - `game`: Frame loop tying input, simulation and rendering together
//! - `platform`: Input collaborator contract
//! - `renderer`: Render collaborator contract and a headless renderer
//! - `settings`: Session configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::{FrameOutcome, Game};
pub use settings::{Settings, StartMode};

/// Default configuration values
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Player ship
    pub const SHIP_WIDTH: f32 = 60.0;
    pub const SHIP_HEIGHT: f32 = 48.0;
    pub const SHIP_SPEED: f32 = 2.5;
    pub const SHIP_LIMIT: u32 = 3;

    /// Player shots
    pub const PROJECTILE_WIDTH: f32 = 3.0;
    pub const PROJECTILE_HEIGHT: f32 = 15.0;
    pub const PROJECTILE_SPEED: f32 = 1.5;
    pub const PROJECTILE_CAP: usize = 4;

    /// Invader formation
    pub const UNIT_WIDTH: f32 = 50.0;
    pub const UNIT_HEIGHT: f32 = 50.0;
    pub const FORMATION_SPEED: f32 = 0.5;
    pub const FORMATION_DROP_DISTANCE: f32 = 10.0;
    pub const FORMATION_SIZE: usize = 36;

    /// Explosion lifetime (frames)
    pub const EXPLOSION_DURATION_TICKS: u32 = 40;
    /// Gameplay freeze after losing a life (half a second at 60 fps)
    pub const HIT_PAUSE_TICKS: u32 = 30;

    /// Background stars
    pub const STAR_SIZE: f32 = 3.0;
    /// Maximum per-axis jitter applied to each star's grid slot
    pub const STAR_JITTER: i32 = 15;
}
