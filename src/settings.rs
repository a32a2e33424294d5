//! Session settings
//!
//! Loaded once at session construction, optionally from a JSON file. Any field
//! missing from the file falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which session state a new world starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StartMode {
    /// Start inactive, waiting for a restart command (start menu)
    #[default]
    Menu,
    /// Start active, gameplay runs from the first frame
    Immediate,
}

impl StartMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartMode::Menu => "Menu",
            StartMode::Immediate => "Immediate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "menu" => Some(StartMode::Menu),
            "immediate" | "play" => Some(StartMode::Immediate),
            _ => None,
        }
    }

    /// Whether the session is active on its first frame
    pub fn starts_active(&self) -> bool {
        matches!(self, StartMode::Immediate)
    }
}

/// Numeric options for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ship ===
    pub ship_width: f32,
    pub ship_height: f32,
    /// Horizontal pixels per frame
    pub ship_speed: f32,
    /// Lives per session
    pub ship_limit: u32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Upward pixels per frame
    pub projectile_speed: f32,
    /// Maximum live projectiles
    pub projectile_cap: usize,

    // === Formation ===
    pub unit_width: f32,
    pub unit_height: f32,
    /// Horizontal pixels per frame
    pub formation_speed: f32,
    /// Vertical pixels per bounce
    pub formation_drop_distance: f32,
    /// Target invader count for every wave
    pub formation_size: usize,

    // === Effects ===
    pub explosion_duration_ticks: u32,
    /// Frames of frozen gameplay after a life is lost (0 = no pause)
    pub hit_pause_ticks: u32,

    // === Background ===
    pub star_size: f32,
    pub star_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_speed: SHIP_SPEED,
            ship_limit: SHIP_LIMIT,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,
            projectile_cap: PROJECTILE_CAP,

            unit_width: UNIT_WIDTH,
            unit_height: UNIT_HEIGHT,
            formation_speed: FORMATION_SPEED,
            formation_drop_distance: FORMATION_DROP_DISTANCE,
            formation_size: FORMATION_SIZE,

            explosion_duration_ticks: EXPLOSION_DURATION_TICKS,
            hit_pause_ticks: HIT_PAUSE_TICKS,

            star_size: STAR_SIZE,
            star_seed: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("ship_speed", self.ship_speed),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("projectile_speed", self.projectile_speed),
            ("unit_width", self.unit_width),
            ("unit_height", self.unit_height),
            ("formation_speed", self.formation_speed),
            ("formation_drop_distance", self.formation_drop_distance),
            ("star_size", self.star_size),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let counts = [
            ("ship_limit", self.ship_limit as usize),
            ("projectile_cap", self.projectile_cap),
            ("formation_size", self.formation_size),
            ("explosion_duration_ticks", self.explosion_duration_ticks as usize),
        ];
        for (field, count) in counts {
            if count == 0 {
                return Err(ConfigError::ZeroCount { field });
            }
        }

        if self.ship_width > self.screen_width || self.ship_height > self.screen_height {
            return Err(ConfigError::ShipTooLarge {
                screen: (self.screen_width, self.screen_height),
                ship: (self.ship_width, self.ship_height),
            });
        }
        if self.formation_columns() == 0 {
            return Err(ConfigError::FormationTooWide {
                screen_width: self.screen_width,
                unit_width: self.unit_width,
            });
        }
        if self.formation_max_rows() == 0 {
            return Err(ConfigError::FormationTooTall {
                screen_height: self.screen_height,
                unit_height: self.unit_height,
            });
        }
        Ok(())
    }

    /// Invader columns per row: one unit of margin each side, one unit gap between
    pub fn formation_columns(&self) -> usize {
        let available = self.screen_width - 2.0 * self.unit_width;
        if available <= 0.0 {
            return 0;
        }
        (available / (2.0 * self.unit_width)).floor() as usize
    }

    /// Rows whose bottom edge stays above the ship's top (one unit top margin, one unit gap)
    pub fn formation_max_rows(&self) -> usize {
        let available = self.screen_height - self.ship_height;
        if available <= 0.0 {
            return 0;
        }
        (available / (2.0 * self.unit_height)).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_columns_for_wide_screen() {
        let settings = Settings {
            screen_width: 1200.0,
            unit_width: 50.0,
            ..Default::default()
        };
        assert_eq!(settings.formation_columns(), 11);
    }

    #[test]
    fn test_rejects_non_positive_dimension() {
        let settings = Settings {
            screen_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositive {
                field: "screen_height",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let settings = Settings {
            formation_speed: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositive {
                field: "formation_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let settings = Settings {
            ship_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NotFinite { field: "ship_speed" })
        ));
    }

    #[test]
    fn test_rejects_zero_projectile_cap() {
        let settings = Settings {
            projectile_cap: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ZeroCount {
                field: "projectile_cap"
            })
        ));
    }

    #[test]
    fn test_rejects_formation_wider_than_screen() {
        let settings = Settings {
            screen_width: 120.0,
            unit_width: 50.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::FormationTooWide { .. })
        ));
    }

    #[test]
    fn test_rows_stop_above_ship() {
        let settings = Settings {
            screen_height: 700.0,
            ship_height: 48.0,
            unit_height: 50.0,
            ..Default::default()
        };
        // (700 - 48) / 100 rows, the last ending at y=600
        assert_eq!(settings.formation_max_rows(), 6);

        let cramped = Settings {
            screen_height: 120.0,
            ship_height: 48.0,
            unit_height: 50.0,
            ..Default::default()
        };
        assert!(matches!(
            cramped.validate(),
            Err(ConfigError::FormationTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_ship_limit() {
        let settings = Settings {
            ship_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ZeroCount { field: "ship_limit" })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json_str(r#"{ "projectile_cap": 2, "ship_limit": 5 }"#)
            .expect("valid settings");
        assert_eq!(settings.projectile_cap, 2);
        assert_eq!(settings.ship_limit, 5);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_json_is_validated() {
        let err = Settings::from_json_str(r#"{ "screen_width": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { .. }));

        let err = Settings::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_start_mode_parsing() {
        assert_eq!(StartMode::from_str("PLAY"), Some(StartMode::Immediate));
        assert_eq!(StartMode::from_str("menu"), Some(StartMode::Menu));
        assert_eq!(StartMode::from_str("later"), None);
        assert!(StartMode::Immediate.starts_active());
        assert!(!StartMode::Menu.starts_active());
    }
}
