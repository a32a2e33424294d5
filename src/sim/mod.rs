//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped only, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod entity;
pub mod formation;
pub mod session;
pub mod starfield;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use collision::{CollisionReport, invader_reaches_ship, projectile_invader_hits, resolve};
pub use entity::{Body, Entity, EntityIds, Explosion, ExplosionKind, Invader, Projectile, Ship, Star};
pub use formation::{Direction, Formation, WaveLayout};
pub use session::{HitOutcome, Phase, Session};
pub use starfield::generate_stars;
pub use state::World;
pub use tick::{Command, TickReport, tick};
