//! Error types for session construction
//!
//! The simulation itself has no failure surface once a world exists; every
//! error here is raised while loading or validating [`crate::Settings`].

use std::fmt;
use std::path::PathBuf;

/// Why a configuration was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// A dimension, speed or distance was zero or negative
    NonPositive { field: &'static str, value: f32 },
    /// A numeric option was NaN or infinite
    NotFinite { field: &'static str },
    /// A count that must be at least one was zero
    ZeroCount { field: &'static str },
    /// Not even one formation column fits across the screen
    FormationTooWide { screen_width: f32, unit_width: f32 },
    /// Not even one formation row fits down the screen
    FormationTooTall { screen_height: f32, unit_height: f32 },
    /// The ship is larger than the screen
    ShipTooLarge {
        screen: (f32, f32),
        ship: (f32, f32),
    },
    /// The settings file could not be read
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file was not valid JSON for [`crate::Settings`]
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::NotFinite { field } => write!(f, "{field} must be a finite number"),
            Self::ZeroCount { field } => write!(f, "{field} must be at least 1"),
            Self::FormationTooWide {
                screen_width,
                unit_width,
            } => write!(
                f,
                "no formation column fits: screen_width={screen_width}, unit_width={unit_width}"
            ),
            Self::FormationTooTall {
                screen_height,
                unit_height,
            } => write!(
                f,
                "no formation row fits above the ship: screen_height={screen_height}, unit_height={unit_height}"
            ),
            Self::ShipTooLarge { screen, ship } => write!(
                f,
                "ship {}x{} does not fit on a {}x{} screen",
                ship.0, ship.1, screen.0, screen.1
            ),
            Self::Read { path, source } => {
                write!(f, "failed to read settings from {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid settings JSON: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
