//! Session state machine
//!
//! Tracks lives and whether gameplay is running. The world applies the
//! entity-side effects of each transition (see [`World::hit`] and
//! [`World::restart`]).
//!
//! [`World::hit`]: super::state::World::hit
//! [`World::restart`]: super::state::World::restart

use serde::{Deserialize, Serialize};

use crate::settings::StartMode;

/// Whether gameplay is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Simulation advances every frame
    Active,
    /// Game over or start menu; waiting for a restart
    Inactive,
}

/// Result of the ship being hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// A life was spent and play continues
    LifeLost { lives_remaining: u32 },
    /// No lives left; the session is now inactive
    GameOver,
    /// The session was not active, nothing changed
    Ignored,
}

/// Lives and active/inactive mode for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    lives_remaining: u32,
    ship_limit: u32,
    phase: Phase,
    /// Frames of frozen gameplay still to run
    pause_ticks: u32,
}

impl Session {
    pub fn new(ship_limit: u32, start: StartMode) -> Self {
        Self {
            lives_remaining: ship_limit,
            ship_limit,
            phase: if start.starts_active() {
                Phase::Active
            } else {
                Phase::Inactive
            },
            pause_ticks: 0,
        }
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    pub fn ship_limit(&self) -> u32 {
        self.ship_limit
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_paused(&self) -> bool {
        self.pause_ticks > 0
    }

    pub fn pause_ticks(&self) -> u32 {
        self.pause_ticks
    }

    /// Spend a life. The session goes inactive once the last life is spent,
    /// or immediately if it was hit with none left. Lives never go negative.
    pub fn register_hit(&mut self, pause_ticks: u32) -> HitOutcome {
        if !self.is_active() {
            return HitOutcome::Ignored;
        }
        if self.lives_remaining == 0 {
            self.end();
            return HitOutcome::GameOver;
        }

        self.lives_remaining -= 1;
        if self.lives_remaining == 0 {
            self.end();
            return HitOutcome::GameOver;
        }

        self.pause_ticks = pause_ticks;
        log::info!(
            "Ship hit, {} lives remaining (pausing {} ticks)",
            self.lives_remaining,
            pause_ticks
        );
        HitOutcome::LifeLost {
            lives_remaining: self.lives_remaining,
        }
    }

    /// Restore lives and go active. Only valid while inactive; returns false otherwise.
    pub fn reset(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.lives_remaining = self.ship_limit;
        self.phase = Phase::Active;
        self.pause_ticks = 0;
        log::info!("Session restarted with {} lives", self.lives_remaining);
        true
    }

    /// Consume one paused frame. Returns true if this frame is paused.
    pub fn consume_pause(&mut self) -> bool {
        if self.pause_ticks == 0 {
            return false;
        }
        self.pause_ticks -= 1;
        true
    }

    fn end(&mut self) {
        self.phase = Phase::Inactive;
        self.pause_ticks = 0;
        log::info!("Game over");
    }
}
