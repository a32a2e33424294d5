//! Rendering contract
//!
//! The core hands a [`Scene`] to a [`Renderer`] once per frame, active or not,
//! then asks it to present. How pixels reach a display is up to the renderer.

pub mod headless;

pub use headless::{FrameSummary, LogRenderer};

use crate::sim::{Explosion, Invader, Projectile, Ship, Star, World};

/// Borrowed view of everything drawable this frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub frame: u64,
    pub ship: &'a Ship,
    pub projectiles: &'a [Projectile],
    pub invaders: &'a [Invader],
    pub explosions: &'a [Explosion],
    pub stars: &'a [Star],
    /// Session is inactive; draw the game-over / start overlay on top
    pub overlay: bool,
    pub lives_remaining: u32,
}

impl<'a> Scene<'a> {
    pub fn from_world(world: &'a World) -> Self {
        Self {
            frame: world.frame,
            ship: &world.ship,
            projectiles: &world.projectiles,
            invaders: &world.formation.units,
            explosions: &world.explosions,
            stars: &world.stars,
            overlay: !world.session.is_active(),
            lives_remaining: world.session.lives_remaining(),
        }
    }
}

/// Render collaborator
pub trait Renderer {
    /// Place every entity's visual at its current position
    fn draw(&mut self, scene: &Scene<'_>);
    /// Make the drawn frame visible
    fn present(&mut self);
}
