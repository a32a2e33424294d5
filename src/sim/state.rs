//! World state
//!
//! Everything the simulation mutates lives in [`World`]. Entity collections
//! are kept in id order so iteration is deterministic.

use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityIds, Explosion, ExplosionKind, Projectile, Ship, Star};
use super::formation::Formation;
use super::session::{HitOutcome, Session};
use super::starfield::generate_stars;
use crate::error::ConfigError;
use crate::settings::{Settings, StartMode};

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Read-only after construction
    pub settings: Settings,
    pub session: Session,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub formation: Formation,
    pub explosions: Vec<Explosion>,
    pub stars: Vec<Star>,
    /// Frames simulated so far (including inactive and paused frames)
    pub frame: u64,
    ids: EntityIds,
}

impl World {
    /// Validate settings and build a world with a full first wave
    pub fn new(settings: Settings, start: StartMode) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut ids = EntityIds::default();
        let ship = Ship::new(ids.next_id(), &settings);
        let stars = generate_stars(&settings, &mut ids);
        let mut formation = Formation::new(settings.formation_size);
        formation.spawn_wave(settings.formation_size, &settings, &mut ids);

        log::info!(
            "World created ({}x{}, {} lives, start mode {})",
            settings.screen_width,
            settings.screen_height,
            settings.ship_limit,
            start.as_str()
        );

        Ok(Self {
            session: Session::new(settings.ship_limit, start),
            settings,
            ship,
            projectiles: Vec::new(),
            formation,
            explosions: Vec::new(),
            stars,
            frame: 0,
            ids,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        self.ids.next_id()
    }

    /// Fire a projectile from the ship. Returns false (and does nothing) at the cap.
    pub fn fire(&mut self) -> bool {
        if self.projectiles.len() >= self.settings.projectile_cap {
            log::debug!("Fire ignored, {} projectiles in flight", self.projectiles.len());
            return false;
        }
        let id = self.ids.next_id();
        self.projectiles
            .push(Projectile::fire_from(id, &self.ship, &self.settings));
        true
    }

    /// Leave an explosion where `at` was
    pub fn spawn_explosion(&mut self, kind: ExplosionKind, at: &Body) {
        let id = self.ids.next_id();
        self.explosions.push(Explosion::new(
            id,
            kind,
            at,
            self.settings.explosion_duration_ticks,
        ));
    }

    /// Replace the formation with a new wave of the current target size
    pub fn respawn_formation(&mut self) -> usize {
        self.formation.respawn(&self.settings, &mut self.ids)
    }

    /// Ship hit transition. Only acts while active.
    ///
    /// Spends a life, clears shots and the formation, respawns the wave,
    /// recenters the ship and starts the hit pause. When no life is left the
    /// session goes inactive with shots and formation cleared instead.
    pub fn hit(&mut self) -> HitOutcome {
        let outcome = self.session.register_hit(self.settings.hit_pause_ticks);
        match outcome {
            HitOutcome::LifeLost { .. } => {
                self.projectiles.clear();
                self.formation.clear();
                self.respawn_formation();
                self.ship.center(&self.settings);
            }
            HitOutcome::GameOver => {
                self.projectiles.clear();
                self.formation.clear();
            }
            HitOutcome::Ignored => {}
        }
        outcome
    }

    /// Restart transition. Only acts while inactive; returns false otherwise.
    ///
    /// Restores lives, clears every transient entity, respawns the wave at
    /// its previous target size and recenters the ship.
    pub fn restart(&mut self) -> bool {
        if !self.session.reset() {
            log::debug!("Restart ignored, session already active");
            return false;
        }
        self.clear_transients();
        self.respawn_formation();
        self.ship.center(&self.settings);
        true
    }

    /// Remove projectiles, invaders and explosions
    pub fn clear_transients(&mut self) {
        self.projectiles.clear();
        self.formation.clear();
        self.explosions.clear();
    }

    /// Ensure collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.projectiles.sort_by_key(|p| p.id());
        self.formation.units.sort_by_key(|u| u.id());
        self.explosions.sort_by_key(|e| e.id());
    }
}
