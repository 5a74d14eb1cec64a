//! Display-space geometry: rectangles, the reference circle, and the
//! containment gate.
//!
//! The detector reports face bounding boxes in image coordinates; the guide
//! circle lives in display coordinates. This module owns the mapping between
//! the two spaces and the decision whether a mapped face is acceptably
//! centered. Both operations are pure; all tracking state lives in
//! [`crate::tracker`].

use crate::utils::safe_cast::f64_to_i32_clamp;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in integer pixel units.
///
/// Used both for detector output (image space) and for the derived
/// display-space face box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Center of the rectangle in fractional pixel coordinates
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Map this rectangle from an image of size `(image_width, image_height)`
    /// onto a display surface.
    ///
    /// Each axis is scaled independently (`display / image`); no aspect-ratio
    /// correction is applied, so a stretched mapping is accepted when the two
    /// surfaces differ in aspect. Corner coordinates are scaled and truncated
    /// to whole pixels, and the result's extent is the difference of the
    /// scaled corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if any image or display dimension
    /// is zero or negative.
    pub fn scale_to_display(&self, image_width: i32, image_height: i32, display: DisplaySize) -> Result<Rect> {
        if image_width <= 0 || image_height <= 0 {
            return Err(Error::InvalidGeometry(format!(
                "image dimensions must be positive, got {image_width}x{image_height}"
            )));
        }
        if display.width <= 0 || display.height <= 0 {
            return Err(Error::InvalidGeometry(format!(
                "display dimensions must be positive, got {}x{}",
                display.width, display.height
            )));
        }

        let scale_x = f64::from(display.width) / f64::from(image_width);
        let scale_y = f64::from(display.height) / f64::from(image_height);

        let left = f64::from(self.x) * scale_x;
        let top = f64::from(self.y) * scale_y;
        let right = f64::from(self.x + self.width) * scale_x;
        let bottom = f64::from(self.y + self.height) * scale_y;

        let x = f64_to_i32_clamp(left, i32::MIN, i32::MAX);
        let y = f64_to_i32_clamp(top, i32::MIN, i32::MAX);
        Ok(Rect {
            x,
            y,
            width: f64_to_i32_clamp(right, i32::MIN, i32::MAX) - x,
            height: f64_to_i32_clamp(bottom, i32::MIN, i32::MAX) - y,
        })
    }
}

/// Size of the display surface the presentation layer renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySize {
    /// Width in display pixels
    pub width: i32,
    /// Height in display pixels
    pub height: i32,
}

impl DisplaySize {
    /// Create a display size
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// On-screen guide circle, in display coordinates.
///
/// Supplied by the presentation layer at query time; its position and radius
/// may change between frames when the layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCircle {
    /// Horizontal center
    pub center_x: f64,
    /// Vertical center
    pub center_y: f64,
    /// Radius in display pixels
    pub radius: f64,
}

impl ReferenceCircle {
    /// Create a reference circle
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Decide whether a display-space face rectangle is acceptably centered.
    ///
    /// Accepts iff the Euclidean distance between the face center and the
    /// circle center is strictly below `radius * tolerance`. The tolerance
    /// (0.8 by default) leaves room for a face that is close to, but not
    /// pixel-perfect on, the circle center.
    #[must_use]
    pub fn contains(&self, face: &Rect, tolerance: f64) -> bool {
        let (fx, fy) = face.center();
        let distance = (fx - self.center_x).hypot(fy - self.center_y);
        distance < self.radius * tolerance
    }
}
