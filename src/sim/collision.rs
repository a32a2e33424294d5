//! Collision detection and response
//!
//! Resolution runs once per active frame, in a fixed order:
//! 1. projectile vs invader: every overlapping pair destroys both
//! 2. wave clearance: an emptied formation respawns and clears leftover shots
//! 3. invader vs ship (or invader vs bottom edge): the ship is hit
//!
//! Entities destroyed earlier in the pass are skipped by later checks.

use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, ExplosionKind, Invader, Projectile, Ship};
use super::formation::Formation;
use super::session::HitOutcome;
use super::state::World;
use crate::settings::Settings;

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionReport {
    /// Invaders destroyed by projectiles
    pub kills: usize,
    /// Formation was emptied and a new wave spawned
    pub wave_cleared: bool,
    /// Result of a ship hit, if one occurred
    pub ship_hit: Option<HitOutcome>,
}

/// Destroy every overlapping projectile/invader pair.
///
/// A projectile keeps checking after its first hit, so one shot overlapping
/// several invaders destroys all of them. Returns the bodies of the destroyed
/// invaders in the order they were hit.
pub fn projectile_invader_hits(projectiles: &mut [Projectile], invaders: &mut [Invader]) -> Vec<Body> {
    let mut destroyed = Vec::new();
    for projectile in projectiles.iter_mut().filter(|p| p.is_alive()) {
        let shot = projectile.bounds();
        for invader in invaders.iter_mut().filter(|i| i.is_alive()) {
            if shot.overlaps(&invader.bounds()) {
                invader.destroy();
                projectile.destroy();
                destroyed.push(invader.body.clone());
            }
        }
    }
    destroyed
}

/// True if a live invader overlaps the ship or has reached the bottom edge
pub fn invader_reaches_ship(formation: &Formation, ship: &Ship, settings: &Settings) -> bool {
    let ship_bounds = ship.bounds();
    formation
        .units
        .iter()
        .filter(|u| u.is_alive())
        .any(|u| u.bounds().overlaps(&ship_bounds))
        || formation.reached_bottom(settings)
}

/// Run the full collision pass over the world
pub fn resolve(world: &mut World) -> CollisionReport {
    let mut report = CollisionReport::default();

    let destroyed = projectile_invader_hits(&mut world.projectiles, &mut world.formation.units);
    report.kills = destroyed.len();
    for body in &destroyed {
        world.spawn_explosion(ExplosionKind::Invader, body);
    }
    world.projectiles.retain(|p| p.is_alive());
    world.formation.remove_dead();

    if report.kills > 0 && world.formation.is_empty() {
        world.projectiles.clear();
        world.respawn_formation();
        report.wave_cleared = true;
    }

    if invader_reaches_ship(&world.formation, &world.ship, &world.settings) {
        let ship_body = world.ship.body.clone();
        world.spawn_explosion(ExplosionKind::Ship, &ship_body);
        report.ship_hit = Some(world.hit());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Settings, StartMode};
    use crate::sim::session::Phase;
    use glam::Vec2;

    fn world() -> World {
        World::new(Settings::default(), StartMode::Immediate).expect("valid settings")
    }

    fn shot_at(world: &mut World, pos: Vec2) {
        let mut shot = Projectile::fire_from(world.next_entity_id(), &world.ship, &world.settings);
        shot.body.pos = pos;
        world.projectiles.push(shot);
    }

    #[test]
    fn test_one_shot_destroys_all_overlapping_invaders() {
        let size = Vec2::new(50.0, 50.0);
        let mut invaders = vec![
            Invader::new(1, Vec2::new(100.0, 100.0), size),
            Invader::new(2, Vec2::new(148.0, 100.0), size),
            Invader::new(3, Vec2::new(400.0, 100.0), size),
        ];
        let settings = Settings::default();
        let ship = Ship::new(10, &settings);
        let mut shot = Projectile::fire_from(11, &ship, &settings);
        // Straddles the seam between invaders 1 and 2
        shot.body.pos = Vec2::new(147.0, 120.0);
        let mut shots = vec![shot];

        let destroyed = projectile_invader_hits(&mut shots, &mut invaders);
        let ids: Vec<u32> = destroyed.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(!shots[0].is_alive());
        assert!(invaders[2].is_alive());
    }

    #[test]
    fn test_dead_invader_not_hit_twice() {
        let size = Vec2::new(50.0, 50.0);
        let mut invaders = vec![Invader::new(1, Vec2::new(100.0, 100.0), size)];
        let settings = Settings::default();
        let ship = Ship::new(10, &settings);
        let mut a = Projectile::fire_from(11, &ship, &settings);
        a.body.pos = Vec2::new(110.0, 110.0);
        let mut b = a.clone();
        b.body.id = 12;
        let mut shots = vec![a, b];

        let destroyed = projectile_invader_hits(&mut shots, &mut invaders);
        assert_eq!(destroyed.len(), 1);
        assert!(!shots[0].is_alive());
        // Second shot found nothing left to hit
        assert!(shots[1].is_alive());
    }

    #[test]
    fn test_kill_spawns_explosion_at_invader() {
        let mut w = world();
        let target = w.formation.units[0].body.clone();
        shot_at(&mut w, target.pos + Vec2::new(10.0, 10.0));

        let report = resolve(&mut w);
        assert_eq!(report.kills, 1);
        assert!(!report.wave_cleared);
        assert!(report.ship_hit.is_none());
        assert_eq!(w.formation.len(), w.settings.formation_size - 1);
        assert!(w.projectiles.is_empty());
        assert_eq!(w.explosions.len(), 1);
        assert_eq!(w.explosions[0].pos(), target.pos);
        assert_eq!(w.explosions[0].kind, ExplosionKind::Invader);
    }

    #[test]
    fn test_clearing_wave_respawns_and_clears_shots() {
        let mut w = world();
        w.formation.units.truncate(1);
        let last = w.formation.units[0].body.clone();
        shot_at(&mut w, last.pos + Vec2::new(5.0, 5.0));
        // Stray shot elsewhere on screen
        shot_at(&mut w, Vec2::new(600.0, 500.0));

        let report = resolve(&mut w);
        assert!(report.wave_cleared);
        assert!(w.projectiles.is_empty());
        assert_eq!(w.formation.len(), w.settings.formation_size);
        assert_eq!(w.formation.target_count, w.settings.formation_size);
    }

    #[test]
    fn test_invader_touching_ship_costs_a_life() {
        let mut w = world();
        let ship_pos = w.ship.pos();
        w.formation.units[0].body.pos = ship_pos + Vec2::new(5.0, -20.0);

        let report = resolve(&mut w);
        assert_eq!(
            report.ship_hit,
            Some(HitOutcome::LifeLost { lives_remaining: 2 })
        );
        assert_eq!(w.session.lives_remaining(), 2);
        assert!(w.explosions.iter().any(|e| e.kind == ExplosionKind::Ship && e.pos() == ship_pos));
        assert_eq!(w.formation.len(), w.settings.formation_size);
    }

    #[test]
    fn test_invader_at_bottom_counts_as_hit() {
        let mut w = world();
        let bottom = w.settings.screen_height - w.settings.unit_height;
        w.formation.units[0].body.pos = Vec2::new(0.0, bottom);

        let report = resolve(&mut w);
        assert!(report.ship_hit.is_some());
        assert_eq!(w.session.phase(), Phase::Active);
    }
}
