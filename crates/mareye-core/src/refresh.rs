//! Refresh cycle
//!
//! Level-triggered regeneration: a poll tick regenerates only when the
//! stored snapshot has gone stale; a manual trigger always regenerates.
//! Running the check again inside the interval leaves state untouched.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::session::SessionState;
use crate::simulator::TelemetrySimulator;
use crate::telemetry::PositionSample;

/// Default time between automatic refreshes
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// What caused a refresh attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Periodic poll tick; regenerates only when stale
    Poll,
    /// Explicit user request; always regenerates
    Manual,
}

/// Staleness of the stored snapshot relative to the policy interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Within the interval; reuse the stored snapshot
    Fresh,
    /// Interval elapsed (or nothing stored yet); regenerate
    Stale,
}

/// Two-state staleness policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    /// Minimum time between automatic regenerations
    pub interval: Duration,
}

impl RefreshPolicy {
    /// Create a policy with the given interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Classify the stored snapshot's freshness at `now`
    pub fn freshness(&self, last_refresh: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Freshness {
        match last_refresh {
            None => Freshness::Stale,
            Some(last) => {
                // A clock that moved backwards counts as fresh.
                let elapsed = (now - last).to_std().unwrap_or(Duration::ZERO);
                if elapsed >= self.interval {
                    Freshness::Stale
                } else {
                    Freshness::Fresh
                }
            }
        }
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// Outcome of one refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot was generated and stored
    Refreshed,
    /// The stored snapshot was still fresh; state untouched
    Unchanged,
}

/// Run one refresh cycle
///
/// On a manual trigger, or a poll tick with a stale snapshot: advance the
/// buoy's random walk, append the position to the (FIFO-capped) history,
/// and store a wholesale new fleet snapshot. Otherwise the state is left
/// exactly as it was.
pub fn run_cycle(
    state: &mut SessionState,
    simulator: &mut TelemetrySimulator,
    trigger: Trigger,
    now: DateTime<Utc>,
) -> RefreshOutcome {
    let due = trigger == Trigger::Manual
        || state.policy.freshness(state.last_refresh, now) == Freshness::Stale;
    if !due {
        return RefreshOutcome::Unchanged;
    }

    let position = simulator.next_position(state.history.last_position());
    state.history.push(PositionSample::new(position, now));
    state.last_snapshot = Some(simulator.sample_snapshot(now, position));
    state.last_refresh = Some(now);

    tracing::debug!(
        lat = position.lat,
        lng = position.lng,
        trail = state.history.len(),
        "fleet snapshot regenerated"
    );
    RefreshOutcome::Refreshed
}
