//! Robot state and its transformations.

use crate::error::CommandError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cleaning substance or tool currently in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningMode {
    /// Spray water.
    #[default]
    Water,
    /// Spray soap foam.
    Soap,
    /// Sweep with the brush.
    Brush,
}

/// Lookup table from mode name to tag. Matched case-insensitively.
const MODE_NAMES: [(&str, CleaningMode); 3] = [
    ("water", CleaningMode::Water),
    ("soap", CleaningMode::Soap),
    ("brush", CleaningMode::Brush),
];

impl CleaningMode {
    /// Returns the lowercase name used in events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Soap => "soap",
            Self::Brush => "brush",
        }
    }
}

impl fmt::Display for CleaningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CleaningMode {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        MODE_NAMES
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, mode)| mode)
            .ok_or_else(|| CommandError::InvalidMode(name.to_lowercase()))
    }
}

/// The state of the cleaning robot.
///
/// A plain value: every transformation returns a new state and leaves `self`
/// untouched, so a rejected command can never leave a half-applied update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotState {
    /// Origin-relative position. Unbounded.
    pub position: DVec2,

    /// Heading in degrees, `0` pointing along `+X`. Kept in `[0, 360)`.
    pub angle: f64,

    /// Selected cleaning mode.
    pub mode: CleaningMode,

    /// Whether the robot has been started.
    pub running: bool,
}

impl RobotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the unit heading vector.
    pub fn heading(&self) -> DVec2 {
        DVec2::from_angle(self.angle.to_radians())
    }

    /// Moves `distance` units along the current heading. Negative values move backward.
    pub fn moved(&self, distance: f64) -> Self {
        Self {
            position: self.position + self.heading() * distance,
            ..*self
        }
    }

    /// Rotates by `delta` degrees, wrapping the heading into `[0, 360)`.
    pub fn turned(&self, delta: f64) -> Self {
        Self {
            angle: normalize_angle(self.angle + delta),
            ..*self
        }
    }

    /// Selects a cleaning mode.
    pub fn with_mode(&self, mode: CleaningMode) -> Self {
        Self { mode, ..*self }
    }

    /// Selects a cleaning mode by name, case-insensitively.
    pub fn set_mode(&self, name: &str) -> Result<Self, CommandError> {
        Ok(self.with_mode(name.parse()?))
    }

    pub fn started(&self) -> Self {
        Self {
            running: true,
            ..*self
        }
    }

    pub fn stopped(&self) -> Self {
        Self {
            running: false,
            ..*self
        }
    }
}

/// Wraps an angle in degrees into `[0, 360)`. Non-finite input passes through.
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360, and keeps the
    // sign of -0.0 for negative multiples of 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped + 0.0 }
}
