//! Configuration management for the face orientation tracker

use crate::constants::{
    DEFAULT_CENTER_THRESHOLD, DEFAULT_CIRCLE_RADIUS, DEFAULT_CONTAINMENT_TOLERANCE, DEFAULT_DISPLAY_HEIGHT,
    DEFAULT_DISPLAY_WIDTH, DEFAULT_FILL_DURATION_MS, DEFAULT_PITCH_THRESHOLD, DEFAULT_YAW_SIDE_THRESHOLD,
};
use crate::geometry::{DisplaySize, ReferenceCircle};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tracker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Angle thresholds for zone classification
    pub thresholds: ThresholdConfig,

    /// Containment gate parameters
    pub containment: ContainmentConfig,

    /// Fill animation parameters
    pub animation: AnimationConfig,

    /// Display geometry for the replay harness
    pub display: DisplayConfig,
}

/// Angle thresholds, in degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Yaw magnitude that counts as looking to a side
    pub yaw_side: f32,

    /// Pitch magnitude that counts as looking up or down
    pub pitch_up: f32,

    /// Yaw/pitch magnitude below which the subject is looking straight ahead
    pub center: f32,
}

/// Containment gate parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainmentConfig {
    /// Fraction of the circle radius within which a face center is accepted
    pub tolerance: f64,
}

/// Fill animation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Per-zone fill ramp duration in milliseconds
    pub fill_duration_ms: u64,
}

impl AnimationConfig {
    /// Fill duration as a [`Duration`]
    #[must_use]
    pub fn fill_duration(&self) -> Duration {
        Duration::from_millis(self.fill_duration_ms)
    }
}

/// Display geometry used when replaying recorded samples.
///
/// Live integrations supply geometry per frame instead, since it can change
/// with layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display width in pixels
    pub width: i32,

    /// Display height in pixels
    pub height: i32,

    /// Guide circle center, horizontal
    pub circle_x: f64,

    /// Guide circle center, vertical
    pub circle_y: f64,

    /// Guide circle radius
    pub circle_radius: f64,
}

impl DisplayConfig {
    /// Display size in the geometry module's terms
    #[must_use]
    pub fn size(&self) -> DisplaySize {
        DisplaySize::new(self.width, self.height)
    }

    /// Reference circle in the geometry module's terms
    #[must_use]
    pub fn circle(&self) -> ReferenceCircle {
        ReferenceCircle::new(self.circle_x, self.circle_y, self.circle_radius)
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            yaw_side: DEFAULT_YAW_SIDE_THRESHOLD,
            pitch_up: DEFAULT_PITCH_THRESHOLD,
            center: DEFAULT_CENTER_THRESHOLD,
        }
    }
}

impl Default for ContainmentConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_CONTAINMENT_TOLERANCE,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fill_duration_ms: DEFAULT_FILL_DURATION_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
            circle_x: f64::from(DEFAULT_DISPLAY_WIDTH) / 2.0,
            circle_y: f64::from(DEFAULT_DISPLAY_HEIGHT) / 2.0,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on serialization failure, [`Error::Io`] on
    /// write failure.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if self.thresholds.yaw_side <= 0.0 || self.thresholds.pitch_up <= 0.0 || self.thresholds.center <= 0.0 {
            return Err(Error::Config("Angle thresholds must be positive".to_string()));
        }

        // A sample must never count as centered and directional at once
        if self.thresholds.center >= self.thresholds.yaw_side.min(self.thresholds.pitch_up) {
            return Err(Error::Config(format!(
                "Center threshold ({}) must be below both directional thresholds ({}, {})",
                self.thresholds.center, self.thresholds.yaw_side, self.thresholds.pitch_up
            )));
        }

        if !(self.containment.tolerance > 0.0 && self.containment.tolerance <= 1.0) {
            return Err(Error::Config(
                "Containment tolerance must be in (0.0, 1.0]".to_string(),
            ));
        }

        if self.animation.fill_duration_ms == 0 {
            return Err(Error::Config("Fill duration must be greater than 0".to_string()));
        }

        if self.display.width <= 0 || self.display.height <= 0 {
            return Err(Error::Config("Display dimensions must be positive".to_string()));
        }
        if self.display.circle_radius <= 0.0 {
            return Err(Error::Config("Circle radius must be positive".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Circle Tracker Configuration

# Classification thresholds, in degrees
thresholds:
  yaw_side: 30.0
  pitch_up: 15.0
  center: 10.0

# Containment gate
containment:
  tolerance: 0.8

# Fill animation
animation:
  fill_duration_ms: 350

# Replay display geometry
display:
  width: 1080
  height: 1920
  circle_x: 540.0
  circle_y: 960.0
  circle_radius: 400.0
"#;
