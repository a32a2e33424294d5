//! Frame loop
//!
//! Each frame: drain input, step the simulation, hand the scene to the
//! renderer. Rendering happens on inactive and paused frames too, so the
//! game-over screen shows the last world state. The loop ends only on a quit
//! command.

use crate::error::ConfigError;
use crate::platform::InputSource;
use crate::renderer::{Renderer, Scene};
use crate::settings::{Settings, StartMode};
use crate::sim::{TickReport, World, tick};

/// Result of running one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Frame simulated and rendered
    Continue(TickReport),
    /// Quit received; nothing was rendered
    Quit,
}

/// A session driven by an input source and a renderer
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
}

impl Game {
    pub fn new(settings: Settings, start: StartMode) -> Result<Self, ConfigError> {
        Ok(Self {
            world: World::new(settings, start)?,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run a single frame
    pub fn frame(&mut self, input: &mut impl InputSource, renderer: &mut impl Renderer) -> FrameOutcome {
        let commands = input.drain();
        let report = tick(&mut self.world, &commands);
        if report.quit {
            log::info!("Quit after {} frames", self.world.frame);
            return FrameOutcome::Quit;
        }

        renderer.draw(&Scene::from_world(&self.world));
        renderer.present();
        FrameOutcome::Continue(report)
    }

    /// Run frames until a quit command arrives. Returns the number of frames rendered.
    pub fn run(&mut self, input: &mut impl InputSource, renderer: &mut impl Renderer) -> u64 {
        let mut rendered = 0;
        while let FrameOutcome::Continue(_) = self.frame(input, renderer) {
            rendered += 1;
        }
        rendered
    }
}
