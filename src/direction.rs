//! Direction classification: mapping a (yaw, pitch) pose onto one of the
//! discrete zones the subject must cover.
//!
//! Classification is a pure function of the angles. Diagonal zones resolve
//! before cardinal ones so a diagonal look is never reported as purely
//! cardinal. The straight-ahead predicate is evaluated independently; with
//! the default thresholds it can never coincide with a directional zone.

use crate::constants::{DEFAULT_CENTER_THRESHOLD, DEFAULT_PITCH_THRESHOLD, DEFAULT_YAW_SIDE_THRESHOLD};

/// One of the nine regions a subject must face.
///
/// The set is closed: zones are never created or destroyed at runtime, and
/// every consumer matches on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Looking up
    Up,
    /// Looking up and to the right
    RightUp,
    /// Looking right
    Right,
    /// Looking down and to the right
    RightDown,
    /// Looking down
    Down,
    /// Looking down and to the left
    LeftDown,
    /// Looking left
    Left,
    /// Looking up and to the left
    LeftUp,
    /// Looking straight ahead
    Center,
}

impl Zone {
    /// All zones, in the order the original guidance flow prompted them
    pub const ALL: [Zone; 9] = [
        Zone::Center,
        Zone::Right,
        Zone::RightUp,
        Zone::RightDown,
        Zone::Left,
        Zone::LeftUp,
        Zone::LeftDown,
        Zone::Up,
        Zone::Down,
    ];

    /// Stable slot index for per-zone state storage
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Zone::Up => 0,
            Zone::RightUp => 1,
            Zone::Right => 2,
            Zone::RightDown => 3,
            Zone::Down => 4,
            Zone::LeftDown => 5,
            Zone::Left => 6,
            Zone::LeftUp => 7,
            Zone::Center => 8,
        }
    }

    /// Short human-readable name for logs
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Zone::Up => "up",
            Zone::RightUp => "right-up",
            Zone::Right => "right",
            Zone::RightDown => "right-down",
            Zone::Down => "down",
            Zone::LeftDown => "left-down",
            Zone::Left => "left",
            Zone::LeftUp => "left-up",
            Zone::Center => "center",
        }
    }
}

/// Classifies pose angles into directional zones.
///
/// Holds the three angle thresholds. The detector's yaw convention is kept
/// as-is: negative yaw is a look to the subject's right, positive to the
/// left; positive pitch is a look upward.
#[derive(Debug, Clone, Copy)]
pub struct DirectionClassifier {
    yaw_side: f32,
    pitch_up: f32,
    center: f32,
}

impl Default for DirectionClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_YAW_SIDE_THRESHOLD,
            DEFAULT_PITCH_THRESHOLD,
            DEFAULT_CENTER_THRESHOLD,
        )
    }
}

impl DirectionClassifier {
    /// Create a classifier with explicit thresholds.
    ///
    /// Callers configuring thresholds must keep `center` strictly below both
    /// directional thresholds, otherwise a sample could count as centered and
    /// directional at once; [`crate::config::Config::validate`] enforces this.
    #[must_use]
    pub fn new(yaw_side: f32, pitch_up: f32, center: f32) -> Self {
        Self {
            yaw_side,
            pitch_up,
            center,
        }
    }

    /// Map a pose to a directional zone, or `None` when no threshold trips.
    ///
    /// All comparisons are strict, so an angle exactly on a threshold does
    /// not trigger. Non-finite angles fail every comparison and return
    /// `None`. [`Zone::Center`] is never returned here; see
    /// [`Self::is_center`].
    #[must_use]
    pub fn classify(&self, yaw: f32, pitch: f32) -> Option<Zone> {
        let right = yaw < -self.yaw_side;
        let left = yaw > self.yaw_side;
        let up = pitch > self.pitch_up;
        let down = pitch < -self.pitch_up;

        // Diagonals take priority over cardinals
        if right && up {
            Some(Zone::RightUp)
        } else if right && down {
            Some(Zone::RightDown)
        } else if left && up {
            Some(Zone::LeftUp)
        } else if left && down {
            Some(Zone::LeftDown)
        } else if right {
            Some(Zone::Right)
        } else if left {
            Some(Zone::Left)
        } else if up {
            Some(Zone::Up)
        } else if down {
            Some(Zone::Down)
        } else {
            None
        }
    }

    /// Whether the pose counts as looking straight ahead
    #[must_use]
    pub fn is_center(&self, yaw: f32, pitch: f32) -> bool {
        yaw.abs() < self.center && pitch.abs() < self.center
    }
}
