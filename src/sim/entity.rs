//! Entity types
//!
//! Every entity is composed from a [`Body`] (id, position, size, alive flag)
//! and exposes it through the [`Entity`] trait. Kind-specific behavior lives
//! on the concrete types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use crate::settings::Settings;

/// Monotonic entity id source, one per world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    /// Allocate a new entity ID
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Shared positional state of every entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            pos,
            size,
            alive: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Positioned, boundable, destructible
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    fn id(&self) -> u32 {
        self.body().id
    }

    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    fn bounds(&self) -> Aabb {
        self.body().bounds()
    }

    fn is_alive(&self) -> bool {
        self.body().alive
    }

    /// Mark for removal. Destroying a dead entity does nothing.
    fn destroy(&mut self) {
        self.body_mut().alive = false;
    }
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn body(&self) -> &Body {
                    &self.body
                }

                fn body_mut(&mut self) -> &mut Body {
                    &mut self.body
                }
            }
        )*
    };
}

impl_entity!(Ship, Projectile, Invader, Explosion, Star);

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// New ship centered on the bottom edge of the screen
    pub fn new(id: u32, settings: &Settings) -> Self {
        let size = Vec2::new(settings.ship_width, settings.ship_height);
        let mut ship = Self {
            body: Body::new(id, Vec2::ZERO, size),
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    /// Place the ship at the horizontal center of the bottom edge
    pub fn center(&mut self, settings: &Settings) {
        self.body.pos = Vec2::new(
            (settings.screen_width - self.body.size.x) / 2.0,
            settings.screen_height - self.body.size.y,
        );
    }

    /// Apply the movement flags, keeping the ship on screen
    pub fn update(&mut self, settings: &Settings) {
        let mut dx = 0.0;
        if self.moving_right {
            dx += settings.ship_speed;
        }
        if self.moving_left {
            dx -= settings.ship_speed;
        }
        let max_x = settings.screen_width - self.body.size.x;
        self.body.pos.x = (self.body.pos.x + dx).clamp(0.0, max_x);
    }
}

/// A player shot travelling straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Vertical velocity in pixels per frame (negative is up)
    pub velocity_y: f32,
}

impl Projectile {
    /// Spawn a shot with its top centered on the ship's top edge
    pub fn fire_from(id: u32, ship: &Ship, settings: &Settings) -> Self {
        let size = Vec2::new(settings.projectile_width, settings.projectile_height);
        let ship_bounds = ship.bounds();
        let pos = Vec2::new(
            ship_bounds.left() + (ship.body.size.x - size.x) / 2.0,
            ship_bounds.top(),
        );
        Self {
            body: Body::new(id, pos, size),
            velocity_y: -settings.projectile_speed,
        }
    }

    pub fn advance(&mut self) {
        self.body.pos.y += self.velocity_y;
    }

    /// Fully above the top edge
    pub fn is_off_screen(&self) -> bool {
        self.bounds().bottom() <= 0.0
    }
}

/// A single member of the enemy formation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invader {
    pub body: Body,
}

impl Invader {
    pub fn new(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(id, pos, size),
        }
    }

    /// Move horizontally by `dx`
    pub fn advance(&mut self, dx: f32) {
        self.body.pos.x += dx;
    }

    /// True if the box touches a side edge now, or would cross one after moving `dx`
    pub fn check_edge(&self, dx: f32, screen_width: f32) -> bool {
        let now = self.bounds();
        let next = now.translate(Vec2::new(dx, 0.0));
        now.left() <= 0.0
            || now.right() >= screen_width
            || next.left() <= 0.0
            || next.right() >= screen_width
    }

    pub fn reached_bottom(&self, screen_height: f32) -> bool {
        self.bounds().bottom() >= screen_height
    }
}

/// What was destroyed to produce an explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    Invader,
    Ship,
}

/// A short-lived marker where something was destroyed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub body: Body,
    pub kind: ExplosionKind,
    /// Frames left before removal, always > 0 while alive
    pub remaining_ticks: u32,
}

impl Explosion {
    /// Explosion covering `at`, lasting `ticks` frames
    pub fn new(id: u32, kind: ExplosionKind, at: &Body, ticks: u32) -> Self {
        Self {
            body: Body::new(id, at.pos, at.size),
            kind,
            remaining_ticks: ticks.max(1),
        }
    }

    /// Count down one frame; destroyed when the count reaches zero
    pub fn update(&mut self) {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.destroy();
        }
    }
}

/// A static background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub body: Body,
}
