//! The invader formation
//!
//! Owns every live invader and the single movement direction they share.
//! Units never carry their own direction; only [`Formation::bounce`] flips it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityIds, Invader};
use crate::settings::Settings;

/// Horizontal travel direction shared by the whole formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1.0 for left, +1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Grid dimensions of a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveLayout {
    pub columns: usize,
    pub rows: usize,
}

impl WaveLayout {
    /// Columns that fit the screen and rows needed for `target_count`, capped to the screen height
    pub fn for_target(target_count: usize, settings: &Settings) -> Self {
        let columns = settings.formation_columns();
        if columns == 0 {
            return Self { columns, rows: 0 };
        }
        let rows = target_count
            .div_ceil(columns)
            .min(settings.formation_max_rows());
        Self { columns, rows }
    }

    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

/// The live set of invaders for the current wave
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    /// Members in id order
    pub units: Vec<Invader>,
    pub direction: Direction,
    /// Size requested for every wave
    pub target_count: usize,
    /// Number of waves spawned so far
    pub waves_spawned: u32,
}

impl Formation {
    /// Empty formation that spawns `target_count` units per wave
    pub fn new(target_count: usize) -> Self {
        Self {
            units: Vec::new(),
            direction: Direction::Right,
            target_count,
            waves_spawned: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Replace the formation with a fresh wave of `target_count` units.
    ///
    /// Units are laid out row-major from the top-left, one unit-width apart
    /// horizontally and one unit-height apart vertically, with a one-unit
    /// margin. Slots past `target_count` in the last row stay empty. Returns
    /// the number of units created.
    pub fn spawn_wave(&mut self, target_count: usize, settings: &Settings, ids: &mut EntityIds) -> usize {
        self.units.clear();
        self.target_count = target_count;
        self.direction = Direction::Right;

        let layout = WaveLayout::for_target(target_count, settings);
        let count = target_count.min(layout.capacity());
        if count < target_count {
            log::warn!(
                "Wave truncated to {} of {} units ({} rows fit)",
                count,
                target_count,
                layout.rows
            );
        }

        let size = Vec2::new(settings.unit_width, settings.unit_height);
        for index in 0..count {
            let (row, col) = (index / layout.columns, index % layout.columns);
            let pos = Vec2::new(
                size.x + 2.0 * size.x * col as f32,
                size.y + 2.0 * size.y * row as f32,
            );
            self.units.push(Invader::new(ids.next_id(), pos, size));
        }

        self.waves_spawned += 1;
        log::info!(
            "Wave {}: {} units in {}x{} grid",
            self.waves_spawned,
            count,
            layout.columns,
            layout.rows
        );
        count
    }

    /// Respawn a wave of the current target size
    pub fn respawn(&mut self, settings: &Settings, ids: &mut EntityIds) -> usize {
        self.spawn_wave(self.target_count, settings, ids)
    }

    /// Horizontal step every member takes this frame
    pub fn step(&self, settings: &Settings) -> f32 {
        settings.formation_speed * self.direction.sign()
    }

    /// True if any live member touches a side edge or would cross one on its next step
    pub fn check_edges(&self, settings: &Settings) -> bool {
        let dx = self.step(settings);
        self.units
            .iter()
            .filter(|u| u.is_alive())
            .any(|u| u.check_edge(dx, settings.screen_width))
    }

    /// Drop every member and reverse direction
    pub fn bounce(&mut self, settings: &Settings) {
        for unit in &mut self.units {
            unit.body.pos.y += settings.formation_drop_distance;
        }
        self.direction = self.direction.flipped();
        log::trace!("Formation bounced, now moving {:?}", self.direction);
    }

    /// Move every member one step, shortened so no live member leaves the screen
    pub fn advance(&mut self, settings: &Settings) {
        let mut dx = self.step(settings);
        let live = self.units.iter().filter(|u| u.is_alive()).map(|u| u.bounds());
        let (left, right) = live.fold((f32::INFINITY, f32::NEG_INFINITY), |(l, r), b| {
            (l.min(b.left()), r.max(b.right()))
        });
        if left.is_finite() && right.is_finite() {
            dx = dx.clamp(-left.max(0.0), (settings.screen_width - right).max(0.0));
        }
        for unit in &mut self.units {
            unit.advance(dx);
        }
    }

    /// Edge check, bounce if needed, then move. Returns true if the formation bounced.
    pub fn update(&mut self, settings: &Settings) -> bool {
        let bounced = self.check_edges(settings);
        if bounced {
            self.bounce(settings);
        }
        self.advance(settings);
        bounced
    }

    /// True if any live member's bottom edge has reached the screen bottom
    pub fn reached_bottom(&self, settings: &Settings) -> bool {
        self.units
            .iter()
            .filter(|u| u.is_alive())
            .any(|u| u.reached_bottom(settings.screen_height))
    }

    /// Drop destroyed members
    pub fn remove_dead(&mut self) {
        self.units.retain(|u| u.is_alive());
    }
}
