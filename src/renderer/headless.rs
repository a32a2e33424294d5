//! Headless renderer that reports frames through the `log` facade

use serde::{Deserialize, Serialize};

use super::{Renderer, Scene};
use crate::sim::Entity;

/// Entity counts and ship position for one drawn frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSummary {
    pub frame: u64,
    pub ship_x: f32,
    pub projectiles: usize,
    pub invaders: usize,
    pub explosions: usize,
    pub lives_remaining: u32,
    pub overlay: bool,
}

impl FrameSummary {
    pub fn from_scene(scene: &Scene<'_>) -> Self {
        Self {
            frame: scene.frame,
            ship_x: scene.ship.pos().x,
            projectiles: scene.projectiles.len(),
            invaders: scene.invaders.len(),
            explosions: scene.explosions.len(),
            lives_remaining: scene.lives_remaining,
            overlay: scene.overlay,
        }
    }
}

/// Logs a summary of every frame at trace level and every `report_every` frames at debug
#[derive(Debug, Clone)]
pub struct LogRenderer {
    report_every: u64,
    presented: u64,
    last: Option<FrameSummary>,
}

impl LogRenderer {
    pub fn new(report_every: u64) -> Self {
        Self {
            report_every: report_every.max(1),
            presented: 0,
            last: None,
        }
    }

    /// Frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Summary of the most recently drawn frame
    pub fn last_summary(&self) -> Option<&FrameSummary> {
        self.last.as_ref()
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, scene: &Scene<'_>) {
        let summary = FrameSummary::from_scene(scene);
        log::trace!("{:?}", summary);
        self.last = Some(summary);
    }

    fn present(&mut self) {
        self.presented += 1;
        if self.presented % self.report_every == 0 {
            if let Some(s) = &self.last {
                log::debug!(
                    "Frame {}: {} invaders, {} shots, {} explosions, {} lives{}",
                    s.frame,
                    s.invaders,
                    s.projectiles,
                    s.explosions,
                    s.lives_remaining,
                    if s.overlay { " [inactive]" } else { "" }
                );
            }
        }
    }
}
