//! Fixed-order frame step
//!
//! One call to [`tick`] is one frame of gameplay: apply commands, then (while
//! active and not paused) move the ship, projectiles, formation and
//! explosions, then resolve collisions.

use serde::{Deserialize, Serialize};

use super::collision::{CollisionReport, resolve};
use super::entity::Entity;
use super::session::Phase;
use super::state::World;

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    Fire,
    Quit,
    Restart,
}

/// What happened during one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Frame number this report describes
    pub frame: u64,
    /// A quit command was received; later commands were not applied
    pub quit: bool,
    /// Gameplay was frozen by the post-hit pause
    pub paused: bool,
    /// Gameplay entities were advanced
    pub advanced: bool,
    /// Formation reversed direction this frame
    pub bounced: bool,
    pub collisions: CollisionReport,
    /// Session phase at the end of the frame
    pub phase: Phase,
}

/// Apply one command. Returns true if it was a quit.
fn apply_command(world: &mut World, command: Command) -> bool {
    match command {
        Command::MoveLeftStart => world.ship.moving_left = true,
        Command::MoveLeftStop => world.ship.moving_left = false,
        Command::MoveRightStart => world.ship.moving_right = true,
        Command::MoveRightStop => world.ship.moving_right = false,
        Command::Fire => {
            if world.session.is_active() && !world.session.is_paused() {
                world.fire();
            } else {
                log::debug!("Fire ignored, gameplay not running");
            }
        }
        Command::Restart => {
            world.restart();
        }
        Command::Quit => return true,
    }
    false
}

/// Advance the world by one frame
pub fn tick(world: &mut World, commands: &[Command]) -> TickReport {
    let mut report = TickReport {
        frame: world.frame,
        quit: false,
        paused: false,
        advanced: false,
        bounced: false,
        collisions: CollisionReport::default(),
        phase: world.session.phase(),
    };

    for &command in commands {
        if apply_command(world, command) {
            report.quit = true;
            break;
        }
    }

    if !report.quit && world.session.is_active() {
        if world.session.consume_pause() {
            report.paused = true;
        } else {
            let settings = &world.settings;
            world.ship.update(settings);

            for projectile in &mut world.projectiles {
                projectile.advance();
            }
            world.projectiles.retain(|p| !p.is_off_screen());

            report.bounced = world.formation.update(settings);

            for explosion in &mut world.explosions {
                explosion.update();
            }
            world.explosions.retain(|e| e.is_alive());

            report.collisions = resolve(world);
            report.advanced = true;
        }
    }

    world.frame += 1;
    world.normalize_order();
    report.phase = world.session.phase();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Settings, StartMode};
    use crate::sim::formation::Direction;
    use crate::sim::session::HitOutcome;
    use glam::Vec2;

    fn active_world(settings: Settings) -> World {
        World::new(settings, StartMode::Immediate).expect("valid settings")
    }

    #[test]
    fn test_movement_flags_move_ship() {
        let mut w = active_world(Settings::default());
        let x = w.ship.pos().x;
        tick(&mut w, &[Command::MoveRightStart]);
        assert_eq!(w.ship.pos().x, x + w.settings.ship_speed);
        tick(&mut w, &[Command::MoveRightStop]);
        assert_eq!(w.ship.pos().x, x + w.settings.ship_speed);
        tick(&mut w, &[Command::MoveLeftStart]);
        assert_eq!(w.ship.pos().x, x);
    }

    #[test]
    fn test_fifth_shot_is_ignored_at_cap_of_four() {
        let mut w = active_world(Settings {
            projectile_cap: 4,
            ..Default::default()
        });
        tick(&mut w, &[Command::Fire; 4]);
        assert_eq!(w.projectiles.len(), 4);
        tick(&mut w, &[Command::Fire]);
        assert_eq!(w.projectiles.len(), 4);
    }

    #[test]
    fn test_projectiles_removed_past_top() {
        let mut w = active_world(Settings::default());
        tick(&mut w, &[Command::Fire]);
        // Park the shot just below the top, clear of every invader
        w.projectiles[0].body.pos = Vec2::new(5.0, 1.0 - w.settings.projectile_height);
        tick(&mut w, &[]);
        assert!(w.projectiles.is_empty());
    }

    #[test]
    fn test_commands_apply_in_order_and_stop_at_quit() {
        let mut w = active_world(Settings::default());
        let report = tick(
            &mut w,
            &[Command::MoveLeftStart, Command::Quit, Command::MoveRightStart],
        );
        assert!(report.quit);
        assert!(!report.advanced);
        assert!(w.ship.moving_left);
        assert!(!w.ship.moving_right);
    }

    #[test]
    fn test_inactive_world_does_not_advance() {
        let mut w = World::new(Settings::default(), StartMode::Menu).expect("valid settings");
        let before: Vec<Vec2> = w.formation.units.iter().map(|u| u.pos()).collect();
        let report = tick(&mut w, &[Command::Fire, Command::MoveRightStart]);
        assert!(!report.advanced);
        assert!(w.projectiles.is_empty());
        let after: Vec<Vec2> = w.formation.units.iter().map(|u| u.pos()).collect();
        assert_eq!(before, after);
        assert_eq!(w.frame, 1);
    }

    #[test]
    fn test_restart_from_menu_activates() {
        let mut w = World::new(Settings::default(), StartMode::Menu).expect("valid settings");
        let report = tick(&mut w, &[Command::Restart]);
        assert_eq!(report.phase, Phase::Active);
        assert!(report.advanced);
    }

    #[test]
    fn test_movement_held_in_menu_applies_after_restart() {
        let mut w = World::new(Settings::default(), StartMode::Menu).expect("valid settings");
        let x = w.ship.pos().x;

        tick(&mut w, &[Command::MoveRightStart]);
        assert!(w.ship.moving_right);
        assert_eq!(w.ship.pos().x, x);

        tick(&mut w, &[Command::Restart]);
        assert_eq!(w.ship.pos().x, x + w.settings.ship_speed);
    }

    #[test]
    fn test_oversized_wave_does_not_spawn_onto_ship() {
        let mut w = active_world(Settings {
            formation_size: 77,
            hit_pause_ticks: 0,
            ..Default::default()
        });
        assert_eq!(w.formation.len(), 66);

        for _ in 0..10 {
            let report = tick(&mut w, &[]);
            assert_eq!(report.collisions.ship_hit, None);
        }
        assert_eq!(w.session.lives_remaining(), 3);
        assert_eq!(w.formation.len(), 66);
    }

    #[test]
    fn test_edge_bounce_in_frame() {
        let mut w = active_world(Settings {
            formation_size: 1,
            ..Default::default()
        });
        let width = w.settings.screen_width;
        let unit_width = w.settings.unit_width;
        w.formation.units[0].body.pos.x = width - unit_width - 0.3;

        let report = tick(&mut w, &[]);
        assert!(report.bounced);
        assert_eq!(w.formation.direction, Direction::Left);
        assert!(w.formation.units[0].bounds().right() <= width);
    }

    #[test]
    fn test_hit_pause_freezes_gameplay() {
        let pause = 3;
        let mut w = active_world(Settings {
            hit_pause_ticks: pause,
            ..Default::default()
        });
        let ship_pos = w.ship.pos();
        w.formation.units[0].body.pos = ship_pos;

        let report = tick(&mut w, &[]);
        assert_eq!(
            report.collisions.ship_hit,
            Some(HitOutcome::LifeLost { lives_remaining: 2 })
        );

        let frozen: Vec<Vec2> = w.formation.units.iter().map(|u| u.pos()).collect();
        for _ in 0..pause {
            let report = tick(&mut w, &[Command::Fire]);
            assert!(report.paused);
            assert!(w.projectiles.is_empty());
        }
        let still: Vec<Vec2> = w.formation.units.iter().map(|u| u.pos()).collect();
        assert_eq!(frozen, still);

        let report = tick(&mut w, &[]);
        assert!(report.advanced);
    }

    #[test]
    fn test_explosions_expire_after_duration() {
        let mut w = active_world(Settings {
            explosion_duration_ticks: 3,
            ..Default::default()
        });
        let body = w.formation.units[0].body.clone();
        w.spawn_explosion(crate::sim::ExplosionKind::Invader, &body);
        tick(&mut w, &[]);
        tick(&mut w, &[]);
        assert_eq!(w.explosions.len(), 1);
        tick(&mut w, &[]);
        assert!(w.explosions.is_empty());
    }

    #[test]
    fn test_clearing_final_invader_respawns_same_size() {
        let mut w = active_world(Settings {
            formation_size: 7,
            ..Default::default()
        });
        w.formation.units.truncate(1);
        tick(&mut w, &[Command::Fire, Command::Fire]);
        let target = w.formation.units[0].pos();
        w.projectiles[0].body.pos = target + Vec2::new(20.0, 20.0);

        let report = tick(&mut w, &[]);
        assert!(report.collisions.wave_cleared);
        assert!(w.projectiles.is_empty());
        assert_eq!(w.formation.len(), 7);
    }

    #[test]
    fn test_deterministic_replay() {
        let script = [
            vec![Command::MoveRightStart, Command::Fire],
            vec![],
            vec![Command::Fire],
            vec![Command::MoveRightStop, Command::MoveLeftStart],
            vec![Command::Fire],
        ];
        let mut a = active_world(Settings::default());
        let mut b = active_world(Settings::default());
        for _ in 0..50 {
            for commands in &script {
                tick(&mut a, commands);
                tick(&mut b, commands);
            }
        }
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.ship.pos(), b.ship.pos());
        assert_eq!(a.projectiles.len(), b.projectiles.len());
        assert_eq!(a.formation.len(), b.formation.len());
    }
}
