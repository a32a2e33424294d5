//! Input collaborator contract

use std::collections::{BTreeMap, VecDeque};

pub use crate::sim::Command;

/// A source of player commands
pub trait InputSource {
    /// Every command received since the last drain, in arrival order
    fn drain(&mut self) -> Vec<Command>;
}

/// Commands scheduled by frame number, plus an immediate queue.
///
/// Each [`drain`](InputSource::drain) call is one frame: it returns queued
/// commands first, then the commands scheduled for that frame.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frame: u64,
    queued: VecDeque<Command>,
    script: BTreeMap<u64, Vec<Command>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `command` for the drain of frame `frame`
    pub fn at(mut self, frame: u64, command: Command) -> Self {
        self.schedule(frame, command);
        self
    }

    pub fn schedule(&mut self, frame: u64, command: Command) {
        self.script.entry(frame).or_default().push(command);
    }

    /// Queue `command` for the next drain
    pub fn push(&mut self, command: Command) {
        self.queued.push_back(command);
    }

    /// Frames drained so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Last frame with a scheduled command
    pub fn last_scheduled_frame(&self) -> Option<u64> {
        self.script.keys().next_back().copied()
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self) -> Vec<Command> {
        let mut commands: Vec<Command> = self.queued.drain(..).collect();
        if let Some(scheduled) = self.script.remove(&self.frame) {
            commands.extend(scheduled);
        }
        self.frame += 1;
        commands
    }
}

impl InputSource for VecDeque<Command> {
    fn drain(&mut self) -> Vec<Command> {
        VecDeque::drain(self, ..).collect()
    }
}
