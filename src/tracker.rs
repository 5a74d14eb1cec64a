//! Segment tracking: per-zone completion state and the animated fill values
//! the presentation layer polls.
//!
//! [`TrackerSession`] is the only mutable state in the core. Completion is
//! at-most-once per zone and irreversible within a session; overall
//! completion is always re-derived from the nine done flags, never cached.
//! The fill animation is a pure function of the instant a zone completed,
//! sampled with whatever clock value the caller passes in, so redraw ticks
//! advance it without touching tracker state.

use crate::constants::{DEFAULT_FILL_DURATION_MS, ZONE_COUNT};
use crate::direction::Zone;
use crate::utils::clamp_unit;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Per-zone slot. The fill-start instant doubles as the done flag, so the
/// two can never disagree.
#[derive(Debug, Clone, Copy, Default)]
struct ZoneSlot {
    fill_started: Option<Instant>,
}

/// Snapshot of one zone, as polled by the presentation layer on redraw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneStatus {
    /// Whether the subject has looked into this zone
    pub done: bool,
    /// Animated fill progress in `[0, 1]`; 0 until done, then rises to 1
    pub fill: f32,
}

/// What a single observation changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerDelta {
    /// Zones newly marked done by this call, in processing order
    pub completed: Vec<Zone>,
    /// True exactly on the call where the final zone completed
    pub finished: bool,
}

impl TrackerDelta {
    /// Whether this observation changed any zone
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

/// One tracking session: nine zone slots plus the fill animation clock base.
///
/// Sessions are single-consumer: each [`observe`](Self::observe) call must
/// run to completion before the next is issued. There is no partial reset;
/// a new attempt is a new session.
#[derive(Debug, Clone)]
pub struct TrackerSession {
    zones: [ZoneSlot; ZONE_COUNT],
    fill_duration: Duration,
}

impl Default for TrackerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerSession {
    /// Start a session with the default fill duration
    #[must_use]
    pub fn new() -> Self {
        Self::with_fill_duration(Duration::from_millis(DEFAULT_FILL_DURATION_MS))
    }

    /// Start a session with an explicit fill duration
    #[must_use]
    pub fn with_fill_duration(fill_duration: Duration) -> Self {
        Self {
            zones: [ZoneSlot::default(); ZONE_COUNT],
            fill_duration,
        }
    }

    /// Feed one classified sample into the session.
    ///
    /// Marks the center zone done when `center_hit` holds, and the
    /// directional `zone` done when present, each only on its first
    /// observation. Re-observing a done zone leaves its fill trajectory
    /// untouched. Once every zone is done the session is terminal and
    /// further calls are no-ops.
    ///
    /// The returned delta's `finished` flag is edge-triggered: it is true
    /// only on the call that completed the final zone.
    pub fn observe(&mut self, zone: Option<Zone>, center_hit: bool, now: Instant) -> TrackerDelta {
        if self.is_all_completed() {
            return TrackerDelta::default();
        }

        let mut delta = TrackerDelta::default();
        if center_hit && self.mark_done(Zone::Center, now) {
            delta.completed.push(Zone::Center);
        }
        if let Some(zone) = zone {
            if self.mark_done(zone, now) {
                delta.completed.push(zone);
            }
        }

        delta.finished = !delta.completed.is_empty() && self.is_all_completed();
        if delta.finished {
            info!("all {} zones completed", ZONE_COUNT);
        }
        delta
    }

    fn mark_done(&mut self, zone: Zone, now: Instant) -> bool {
        let slot = &mut self.zones[zone.index()];
        if slot.fill_started.is_some() {
            return false;
        }
        slot.fill_started = Some(now);
        debug!("zone {} completed ({}/{})", zone.name(), self.completed_count(), ZONE_COUNT);
        true
    }

    /// Whether every zone, center included, has been observed
    #[must_use]
    pub fn is_all_completed(&self) -> bool {
        self.zones.iter().all(|slot| slot.fill_started.is_some())
    }

    /// Number of zones observed so far
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.zones.iter().filter(|slot| slot.fill_started.is_some()).count()
    }

    /// Completed fraction of the session, the value a progress ring renders
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Counts are <= 9
    pub fn progress(&self) -> f32 {
        self.completed_count() as f32 / ZONE_COUNT as f32
    }

    /// First zone, in guidance order, the subject has not covered yet
    #[must_use]
    pub fn next_pending(&self) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|zone| self.zones[zone.index()].fill_started.is_none())
    }

    /// Animated fill progress for one zone at instant `now`.
    ///
    /// 0 until the zone completes, then a linear ramp to 1 over the fill
    /// duration, holding at 1 afterwards. Purely cosmetic; completion logic
    /// never reads it.
    #[must_use]
    pub fn fill(&self, zone: Zone, now: Instant) -> f32 {
        match self.zones[zone.index()].fill_started {
            None => 0.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= self.fill_duration {
                    1.0
                } else {
                    clamp_unit(elapsed.as_secs_f32() / self.fill_duration.as_secs_f32())
                }
            }
        }
    }

    /// Done flag and fill value for one zone, polled per redraw
    #[must_use]
    pub fn zone_state(&self, zone: Zone, now: Instant) -> ZoneStatus {
        ZoneStatus {
            done: self.zones[zone.index()].fill_started.is_some(),
            fill: self.fill(zone, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_initial_state() {
        let session = TrackerSession::new();
        let now = t0();
        for zone in Zone::ALL {
            let state = session.zone_state(zone, now);
            assert!(!state.done);
            assert_eq!(state.fill, 0.0);
        }
        assert!(!session.is_all_completed());
        assert_eq!(session.completed_count(), 0);
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_observe_marks_zone_done() {
        let mut session = TrackerSession::new();
        let now = t0();

        let delta = session.observe(Some(Zone::Right), false, now);
        assert_eq!(delta.completed, vec![Zone::Right]);
        assert!(!delta.finished);
        assert!(session.zone_state(Zone::Right, now).done);
        assert_eq!(session.completed_count(), 1);
    }

    #[test]
    fn test_observe_center_hit() {
        let mut session = TrackerSession::new();
        let now = t0();

        let delta = session.observe(None, true, now);
        assert_eq!(delta.completed, vec![Zone::Center]);
        assert!(session.zone_state(Zone::Center, now).done);
    }

    #[test]
    fn test_observe_nothing() {
        let mut session = TrackerSession::new();
        let delta = session.observe(None, false, t0());
        assert!(delta.is_empty());
        assert!(!delta.finished);
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn test_reobservation_is_idempotent() {
        let mut session = TrackerSession::new();
        let start = t0();

        session.observe(Some(Zone::Up), false, start);
        let mid = start + Duration::from_millis(175);
        let fill_before = session.fill(Zone::Up, mid);

        // A second observation later must not restart the fill
        let delta = session.observe(Some(Zone::Up), false, mid);
        assert!(delta.is_empty());
        assert_eq!(session.fill(Zone::Up, mid), fill_before);
        assert_eq!(session.completed_count(), 1);
    }

    #[test]
    fn test_fill_ramp() {
        let mut session = TrackerSession::new();
        let start = t0();
        session.observe(Some(Zone::Left), false, start);

        assert_eq!(session.fill(Zone::Left, start), 0.0);
        let half = session.fill(Zone::Left, start + Duration::from_millis(175));
        assert!((half - 0.5).abs() < 0.01, "expected ~0.5, got {half}");
        assert_eq!(session.fill(Zone::Left, start + Duration::from_millis(350)), 1.0);
        // Holds at 1 after the ramp
        assert_eq!(session.fill(Zone::Left, start + Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_fill_monotonic() {
        let mut session = TrackerSession::new();
        let start = t0();
        session.observe(Some(Zone::Down), false, start);

        let mut last = 0.0f32;
        for ms in (0..500).step_by(25) {
            let fill = session.fill(Zone::Down, start + Duration::from_millis(ms));
            assert!(fill >= last, "fill regressed at {ms}ms: {fill} < {last}");
            assert!((0.0..=1.0).contains(&fill));
            last = fill;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_custom_fill_duration() {
        let mut session = TrackerSession::with_fill_duration(Duration::from_millis(100));
        let start = t0();
        session.observe(Some(Zone::Up), false, start);
        assert_eq!(session.fill(Zone::Up, start + Duration::from_millis(100)), 1.0);
    }

    #[test]
    fn test_all_completed_edge_trigger() {
        let mut session = TrackerSession::new();
        let now = t0();

        for (i, zone) in Zone::ALL.into_iter().enumerate() {
            let delta = if zone == Zone::Center {
                session.observe(None, true, now)
            } else {
                session.observe(Some(zone), false, now)
            };
            assert_eq!(delta.completed, vec![zone]);
            let expected_finished = i == Zone::ALL.len() - 1;
            assert_eq!(delta.finished, expected_finished, "zone {}", zone.name());
        }

        assert!(session.is_all_completed());
        assert_eq!(session.progress(), 1.0);
        assert_eq!(session.next_pending(), None);
    }

    #[test]
    fn test_terminal_session_ignores_observations() {
        let mut session = TrackerSession::new();
        let now = t0();
        for zone in Zone::ALL {
            session.observe(Some(zone), zone == Zone::Center, now);
        }
        assert!(session.is_all_completed());

        // The finished edge must not fire again
        let delta = session.observe(Some(Zone::Right), true, now);
        assert!(delta.is_empty());
        assert!(!delta.finished);
        assert!(session.is_all_completed());
    }

    #[test]
    fn test_center_and_zone_in_one_call() {
        // The tracker accepts independent flags even though valid thresholds
        // never produce both at once
        let mut session = TrackerSession::new();
        let delta = session.observe(Some(Zone::Left), true, t0());
        assert_eq!(delta.completed, vec![Zone::Center, Zone::Left]);
        assert_eq!(session.completed_count(), 2);
    }

    #[test]
    fn test_next_pending_follows_guidance_order() {
        let mut session = TrackerSession::new();
        let now = t0();
        assert_eq!(session.next_pending(), Some(Zone::Center));

        session.observe(None, true, now);
        assert_eq!(session.next_pending(), Some(Zone::Right));

        session.observe(Some(Zone::Right), false, now);
        assert_eq!(session.next_pending(), Some(Zone::RightUp));
    }

    #[test]
    fn test_all_completed_iff_all_done() {
        let mut session = TrackerSession::new();
        let now = t0();
        for zone in Zone::ALL.into_iter().take(8) {
            session.observe(Some(zone), false, now);
            assert!(!session.is_all_completed());
        }
        session.observe(None, true, now);
        assert!(session.is_all_completed());
    }
}
