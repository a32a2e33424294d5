//! Background starfield
//!
//! Stars sit on a sparse grid, each nudged by a seeded random offset so the
//! layout varies between seeds but never between runs with the same seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Body, EntityIds, Star};
use crate::consts::STAR_JITTER;
use crate::settings::Settings;

/// Lay out the starfield for a screen. Stars jittered off screen are dropped.
pub fn generate_stars(settings: &Settings, ids: &mut EntityIds) -> Vec<Star> {
    let mut rng = Pcg32::seed_from_u64(settings.star_seed);
    let s = settings.star_size;
    let size = Vec2::splat(s);

    let columns = ((settings.screen_width - s) / (2.0 * s)).floor().max(0.0) as usize;
    let rows = ((settings.screen_height - 2.0 * s) / (2.0 * s)).floor().max(0.0) as usize;

    let mut stars = Vec::new();
    for row in 0..rows {
        let y = s + 8.0 * s * row as f32;
        if y > settings.screen_height {
            break;
        }
        for col in 0..columns {
            let x = 2.5 * s + 8.0 * s * col as f32;
            if x > settings.screen_width {
                break;
            }
            let jitter = Vec2::new(
                rng.random_range(-STAR_JITTER..=STAR_JITTER) as f32,
                rng.random_range(-STAR_JITTER..=STAR_JITTER) as f32,
            );
            let pos = Vec2::new(x, y) + jitter;
            let on_screen = pos.x >= 0.0
                && pos.y >= 0.0
                && pos.x + s <= settings.screen_width
                && pos.y + s <= settings.screen_height;
            if on_screen {
                stars.push(Star {
                    body: Body::new(ids.next_id(), pos, size),
                });
            }
        }
    }

    log::debug!("Generated {} stars (seed {})", stars.len(), settings.star_seed);
    stars
}
