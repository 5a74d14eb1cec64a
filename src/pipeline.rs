//! Per-frame orchestration: mapper, containment gate, classifier, tracker.
//!
//! [`LivenessPipeline`] wires the pure geometry and classification pieces to
//! the stateful [`TrackerSession`] and turns each pose sample into the
//! [`FrameOutcome`] the presentation layer uses to pick a prompt.

use crate::config::Config;
use crate::direction::{DirectionClassifier, Zone};
use crate::geometry::{DisplaySize, Rect, ReferenceCircle};
use crate::tracker::TrackerSession;
use crate::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One head-pose measurement from the external detector.
///
/// Delivered at most once per analyzed frame and consumed exactly once.
/// Angles are in degrees; the bounding box is in the detector's image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    /// Left/right head rotation; negative is a look to the subject's right
    pub yaw: f32,
    /// Up/down head rotation; positive is a look upward
    pub pitch: f32,
    /// Face bounding box in image coordinates
    pub face_box: Rect,
    /// Width of the analyzed image
    pub image_width: i32,
    /// Height of the analyzed image
    pub image_height: i32,
}

/// What one processed frame means for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Face is outside the tolerance circle; prompt the user to re-center.
    /// No zone state was touched.
    NotContained,
    /// Face accepted but no new zone completed (no threshold tripped, the
    /// zone was already done, or the session is already complete)
    NoChange,
    /// This zone was newly completed
    Completed(Zone),
    /// This zone's completion finished the session; fires exactly once
    AllCompleted(Zone),
}

/// Drives one tracking session from a stream of pose samples.
///
/// Samples must arrive serially from a single producer; the pipeline holds
/// the session's mutable state and performs no internal locking.
#[derive(Debug)]
pub struct LivenessPipeline {
    classifier: DirectionClassifier,
    containment_tolerance: f64,
    session: TrackerSession,
}

impl Default for LivenessPipeline {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl LivenessPipeline {
    /// Create a pipeline with a fresh session from a validated configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: DirectionClassifier::new(
                config.thresholds.yaw_side,
                config.thresholds.pitch_up,
                config.thresholds.center,
            ),
            containment_tolerance: config.containment.tolerance,
            session: TrackerSession::with_fill_duration(config.animation.fill_duration()),
        }
    }

    /// Process one pose sample against the current display geometry.
    ///
    /// The reference geometry is passed per call because the presentation
    /// layer may relayout between frames.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGeometry`] when the sample's image
    /// dimensions or the display dimensions are degenerate; the caller
    /// treats that frame as undelivered and no state changes.
    pub fn process(
        &mut self,
        sample: &PoseSample,
        display: DisplaySize,
        circle: &ReferenceCircle,
        now: Instant,
    ) -> Result<FrameOutcome> {
        let mapped = sample
            .face_box
            .scale_to_display(sample.image_width, sample.image_height, display)?;

        if !circle.contains(&mapped, self.containment_tolerance) {
            debug!("face at {:?} outside reference circle, sample dropped", mapped.center());
            return Ok(FrameOutcome::NotContained);
        }

        let zone = self.classifier.classify(sample.yaw, sample.pitch);
        let center_hit = self.classifier.is_center(sample.yaw, sample.pitch);
        let delta = self.session.observe(zone, center_hit, now);

        match delta.completed.last().copied() {
            Some(zone) if delta.finished => Ok(FrameOutcome::AllCompleted(zone)),
            Some(zone) => Ok(FrameOutcome::Completed(zone)),
            None => Ok(FrameOutcome::NoChange),
        }
    }

    /// The session driven by this pipeline, for per-redraw polling
    #[must_use]
    pub fn session(&self) -> &TrackerSession {
        &self.session
    }

    /// Whether the session has covered every zone
    #[must_use]
    pub fn is_all_completed(&self) -> bool {
        self.session.is_all_completed()
    }
}
