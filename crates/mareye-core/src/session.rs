//! Session state
//!
//! Explicit application state for one dashboard session. All mutable
//! pieces live here and are passed into the refresh cycle; there are no
//! ambient globals. Single-threaded by design: one logical writer mutates
//! the state between ticks, so nothing needs a lock.

use chrono::{DateTime, Utc};

use crate::history::PositionHistory;
use crate::profile::SimulatorProfile;
use crate::refresh::RefreshPolicy;
use crate::telemetry::FleetSnapshot;

/// All state carried between refresh cycles
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Staleness policy for poll-triggered refreshes
    pub policy: RefreshPolicy,
    /// Bounded trail of past buoy positions
    pub history: PositionHistory,
    /// Most recent fleet snapshot, once a cycle has run
    pub last_snapshot: Option<FleetSnapshot>,
    /// When the last regeneration happened
    pub last_refresh: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Create an empty session with the given policy
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            history: PositionHistory::new(),
            last_snapshot: None,
            last_refresh: None,
        }
    }

    /// Create an empty session sized for `profile`
    ///
    /// Takes the refresh interval and history capacity from the profile so
    /// session and simulator agree on both.
    pub fn for_profile(profile: &SimulatorProfile) -> Self {
        Self {
            policy: RefreshPolicy::new(profile.refresh_interval()),
            history: PositionHistory::with_capacity(profile.history_capacity),
            last_snapshot: None,
            last_refresh: None,
        }
    }

    /// The most recent snapshot, if any cycle has run
    pub fn latest(&self) -> Option<&FleetSnapshot> {
        self.last_snapshot.as_ref()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(RefreshPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_session_is_empty() {
        let state = SessionState::default();
        assert!(state.history.is_empty());
        assert!(state.latest().is_none());
        assert!(state.last_refresh.is_none());
    }

    #[test]
    fn test_for_profile_adopts_sizing() {
        let mut profile = SimulatorProfile::default();
        profile.history_capacity = 10;
        profile.refresh_interval_secs = 30;

        let state = SessionState::for_profile(&profile);
        assert_eq!(state.history.capacity(), 10);
        assert_eq!(state.policy.interval, Duration::from_secs(30));
    }
}
