//! Replay application: feeds a recorded pose-sample file through the
//! tracking pipeline and logs the prompts a presentation layer would show.

use crate::config::Config;
use crate::direction::Zone;
use crate::pipeline::{FrameOutcome, LivenessPipeline, PoseSample};
use crate::{Error, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Prompt asking the user to re-center their face
pub const RECENTER_PROMPT: &str = "Please place your face inside the circle";

/// Prompt shown once every zone has been covered
pub const SUCCESS_PROMPT: &str = "Face captured successfully";

/// Instruction asking the user to look toward a zone
#[must_use]
pub fn look_prompt(zone: Zone) -> &'static str {
    match zone {
        Zone::Up => "Please look up",
        Zone::RightUp => "Please look up and to the right",
        Zone::Right => "Please look to the right",
        Zone::RightDown => "Please look down and to the right",
        Zone::Down => "Please look down",
        Zone::LeftDown => "Please look down and to the left",
        Zone::Left => "Please look to the left",
        Zone::LeftUp => "Please look up and to the left",
        Zone::Center => "Please look straight ahead",
    }
}

/// Replay application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the YAML sample recording
    pub sample_path: PathBuf,
    /// Tracker configuration
    pub config: Config,
}

/// Result of replaying a sample recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Total samples processed
    pub frames: usize,
    /// Samples rejected by the containment gate
    pub rejected: usize,
    /// Samples skipped for degenerate geometry
    pub skipped: usize,
    /// Whether the session covered every zone
    pub completed: bool,
    /// Frame index (0-based) at which the session completed
    pub completed_at: Option<usize>,
}

/// Replay application
pub struct ReplayApp {
    config: AppConfig,
    pipeline: LivenessPipeline,
}

impl ReplayApp {
    /// Create a replay application from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the tracker configuration is invalid.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.config.validate()?;
        let pipeline = LivenessPipeline::from_config(&config.config);
        Ok(Self { config, pipeline })
    }

    /// Replay the sample file from start to finish.
    ///
    /// Samples with degenerate geometry are skipped, mirroring a live
    /// integration that drops undeliverable frames. Processing continues
    /// past session completion so the summary reflects the whole recording.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Replay`] when the sample file cannot be loaded.
    pub fn run(&mut self) -> Result<ReplaySummary> {
        let samples = load_samples(&self.config.sample_path)?;
        info!(
            "replaying {} samples from {}",
            samples.len(),
            self.config.sample_path.display()
        );

        let display = self.config.config.display.size();
        let circle = self.config.config.display.circle();

        let mut summary = ReplaySummary {
            frames: 0,
            rejected: 0,
            skipped: 0,
            completed: false,
            completed_at: None,
        };

        for (index, sample) in samples.iter().enumerate() {
            summary.frames += 1;

            match self.pipeline.process(sample, display, &circle, Instant::now()) {
                Err(err) => {
                    debug!("frame {index} skipped: {err}");
                    summary.skipped += 1;
                }
                Ok(FrameOutcome::NotContained) => {
                    debug!("frame {index}: {RECENTER_PROMPT}");
                    summary.rejected += 1;
                }
                Ok(FrameOutcome::NoChange) => {
                    if let Some(pending) = self.pipeline.session().next_pending() {
                        debug!("frame {index}: {}", look_prompt(pending));
                    }
                }
                Ok(FrameOutcome::Completed(zone)) => {
                    info!(
                        "frame {index}: zone {} done, progress {:.0}%",
                        zone.name(),
                        self.pipeline.session().progress() * 100.0
                    );
                }
                Ok(FrameOutcome::AllCompleted(zone)) => {
                    info!("frame {index}: zone {} done, {SUCCESS_PROMPT}", zone.name());
                    summary.completed_at = Some(index);
                }
            }
        }

        summary.completed = self.pipeline.is_all_completed();
        if summary.completed {
            info!("{SUCCESS_PROMPT}");
        } else if let Some(pending) = self.pipeline.session().next_pending() {
            info!(
                "recording ended with {}/9 zones; next: {}",
                self.pipeline.session().completed_count(),
                pending.name()
            );
        }

        Ok(summary)
    }

    /// The pipeline driven by this replay, for inspection after `run`
    #[must_use]
    pub fn pipeline(&self) -> &LivenessPipeline {
        &self.pipeline
    }
}

/// Load a YAML recording of pose samples
///
/// # Errors
///
/// Returns [`Error::Replay`] when the file cannot be read or parsed.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<PoseSample>> {
    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Replay(format!("{}: {e}", path.as_ref().display())))?;
    serde_yaml::from_str(&content).map_err(|e| Error::Replay(format!("Failed to parse samples: {e}")))
}
