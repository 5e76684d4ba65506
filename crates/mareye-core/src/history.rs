//! Position history
//!
//! Bounded FIFO buffer of past buoy GPS samples, used to draw the map
//! trail. Oldest samples are evicted first once the capacity is reached.

use std::collections::VecDeque;

use crate::telemetry::{Coordinate, PositionSample};

/// Default number of samples kept in the trail
pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded FIFO buffer of GPS samples
///
/// Invariant: `len() <= capacity()` after every push.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    samples: VecDeque<PositionSample>,
    capacity: usize,
}

impl PositionHistory {
    /// Create a history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a history keeping at most `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting from the front until within capacity
    pub fn push(&mut self, sample: PositionSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the history holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent coordinate, if any sample exists
    pub fn last_position(&self) -> Option<Coordinate> {
        self.samples.back().map(|s| s.position())
    }

    /// Iterate samples oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &PositionSample> {
        self.samples.iter()
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for PositionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(lat: f64) -> PositionSample {
        let ts = Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap();
        PositionSample::new(Coordinate::new(lat, 28.0), ts)
    }

    #[test]
    fn test_push_and_last_position() {
        let mut history = PositionHistory::new();
        assert!(history.is_empty());
        assert!(history.last_position().is_none());

        history.push(sample(36.1));
        history.push(sample(36.2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last_position().unwrap().lat, 36.2);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut history = PositionHistory::with_capacity(50);
        for i in 0..200 {
            history.push(sample(i as f64));
            assert!(history.len() <= 50);
        }
        assert_eq!(history.len(), 50);
    }

    #[test]
    fn test_oldest_evicted_first() {
        let mut history = PositionHistory::with_capacity(3);
        for i in 0..5 {
            history.push(sample(i as f64));
        }
        let lats: Vec<f64> = history.iter().map(|s| s.lat).collect();
        assert_eq!(lats, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut history = PositionHistory::with_capacity(0);
        history.push(sample(1.0));
        assert_eq!(history.len(), 1);
    }
}
