//! Face orientation tracking library for liveness-style capture flows.
//!
//! This library consumes head-pose measurements (yaw, pitch, face bounding
//! box) from an external face detector and tracks whether the subject has
//! looked in every required direction: eight peripheral zones plus
//! straight-ahead center. The detector itself, the camera pipeline, and all
//! rendering are external collaborators; this crate owns only the state
//! machine between them:
//!
//! 1. Coordinate mapping from detector image space into display space
//! 2. A containment gate that rejects samples while the face is off-center
//! 3. Direction classification of each (yaw, pitch) pose into a zone
//! 4. Per-zone completion tracking with an animated fill value per zone
//!
//! # Examples
//!
//! ## Driving a session sample by sample
//!
//! ```
//! use face_circle_tracker::direction::{DirectionClassifier, Zone};
//! use face_circle_tracker::tracker::TrackerSession;
//! use std::time::Instant;
//!
//! let classifier = DirectionClassifier::default();
//! let mut session = TrackerSession::new();
//!
//! // A pose well past the yaw threshold, classified and observed
//! let zone = classifier.classify(-40.0, 0.0);
//! assert_eq!(zone, Some(Zone::Right));
//!
//! let delta = session.observe(zone, false, Instant::now());
//! assert_eq!(delta.completed, vec![Zone::Right]);
//! assert!(!session.is_all_completed());
//! ```
//!
//! ## Processing detector output through the full pipeline
//!
//! ```
//! use face_circle_tracker::geometry::{DisplaySize, Rect, ReferenceCircle};
//! use face_circle_tracker::pipeline::{FrameOutcome, LivenessPipeline, PoseSample};
//! use std::time::Instant;
//!
//! let mut pipeline = LivenessPipeline::default();
//!
//! // Geometry comes from the presentation layer and may change per frame
//! let display = DisplaySize::new(1080, 1920);
//! let circle = ReferenceCircle::new(540.0, 960.0, 400.0);
//!
//! let sample = PoseSample {
//!     yaw: 2.0,
//!     pitch: -1.5,
//!     face_box: Rect::new(190, 270, 100, 100),
//!     image_width: 480,
//!     image_height: 640,
//! };
//!
//! let outcome = pipeline.process(&sample, display, &circle, Instant::now())?;
//! assert!(matches!(outcome, FrameOutcome::Completed(_)));
//! # Ok::<(), face_circle_tracker::Error>(())
//! ```
//!
//! ## Polling fill state on redraw
//!
//! ```
//! use face_circle_tracker::direction::Zone;
//! use face_circle_tracker::tracker::TrackerSession;
//! use std::time::{Duration, Instant};
//!
//! let mut session = TrackerSession::new();
//! let start = Instant::now();
//! session.observe(Some(Zone::Up), false, start);
//!
//! // The fill value is a pure function of elapsed time
//! let state = session.zone_state(Zone::Up, start + Duration::from_millis(350));
//! assert!(state.done);
//! assert_eq!(state.fill, 1.0);
//! ```

/// Display-space geometry: rectangles, reference circle, containment gate
pub mod geometry;

/// Direction classification of pose angles into zones
pub mod direction;

/// Per-zone completion state and fill animation
pub mod tracker;

/// Per-frame orchestration of mapper, gate, classifier, and tracker
pub mod pipeline;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

/// Constants used throughout the tracker
pub mod constants;

/// Small numeric helpers
pub mod utils;

/// Replay application for recorded sample files
pub mod app;

pub use error::{Error, Result};
