//! Simulator profiles
//!
//! A profile is everything that varies between dashboard variants: metric
//! bounds, random-walk step, device counts, refresh interval. Variants pick
//! a profile; the simulator and the data contract stay shared.

use std::time::Duration;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::telemetry::Coordinate;

/// Inclusive sampling bounds for one scalar metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl MetricRange {
    /// Create a range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Center of the range
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Uniform draw over the range
    pub fn sample_uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    /// Normal draw centered on the midpoint, clamped to the bounds
    ///
    /// The standard deviation is a sixth of the span, so unclamped draws
    /// already land inside the range almost always.
    pub fn sample_normal<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let sd = (self.max - self.min) / 6.0;
        match Normal::new(self.midpoint(), sd) {
            Ok(dist) => dist.sample(rng).clamp(self.min, self.max),
            Err(_) => self.midpoint(),
        }
    }
}

/// Parameterization of one dashboard variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorProfile {
    /// Profile display name
    pub name: String,
    /// Anchor coordinate used when no position history exists
    pub origin: Coordinate,
    /// Per-axis bound of one random-walk step, decimal degrees
    pub walk_step_deg: f64,
    /// Degrees of drone scatter around the buoy
    pub drone_scatter_deg: f64,
    /// Degrees of bin anchor spacing along the shoreline
    pub bin_spacing_deg: f64,
    /// Number of survey drones
    pub drone_count: usize,
    /// Number of collection bins
    pub bin_count: usize,
    /// Mean detections per refresh cycle (Poisson)
    pub detections_per_cycle: f64,
    /// Samples kept in the position history
    pub history_capacity: usize,
    /// Seconds between automatic refreshes
    pub refresh_interval_secs: u64,

    /// Acidity bounds
    pub ph: MetricRange,
    /// Turbidity bounds, NTU
    pub turbidity_ntu: MetricRange,
    /// Salinity bounds, PSU
    pub salinity_psu: MetricRange,
    /// Water temperature bounds, °C
    pub temperature_c: MetricRange,
    /// Total dissolved solids bounds, ppm
    pub tds_ppm: MetricRange,
    /// Dissolved oxygen bounds, mg/L
    pub dissolved_oxygen_mg_l: MetricRange,
    /// Battery charge bounds, percent
    pub battery_percent: MetricRange,
    /// Drone altitude bounds, meters
    pub drone_altitude_m: MetricRange,
    /// Drone ground speed bounds, km/h
    pub drone_speed_kmh: MetricRange,
    /// Bin fill level bounds, percent
    pub bin_fill_percent: MetricRange,
    /// Detection confidence bounds
    pub detection_confidence: MetricRange,
    /// Detection range bounds, meters
    pub detection_distance_m: MetricRange,
}

impl SimulatorProfile {
    /// The harbor deployment profile (default)
    pub fn harbor() -> Self {
        Self {
            name: "harbor".to_string(),
            origin: Coordinate::new(36.8508, 28.2736),
            walk_step_deg: 0.0005,
            drone_scatter_deg: 0.003,
            bin_spacing_deg: 0.002,
            drone_count: 2,
            bin_count: 3,
            detections_per_cycle: 2.5,
            history_capacity: 50,
            refresh_interval_secs: 10,
            ph: MetricRange::new(6.5, 8.5),
            turbidity_ntu: MetricRange::new(0.5, 12.0),
            salinity_psu: MetricRange::new(32.0, 39.0),
            temperature_c: MetricRange::new(18.0, 30.0),
            tds_ppm: MetricRange::new(280.0, 420.0),
            dissolved_oxygen_mg_l: MetricRange::new(5.5, 9.5),
            battery_percent: MetricRange::new(13.0, 98.0),
            drone_altitude_m: MetricRange::new(10.0, 120.0),
            drone_speed_kmh: MetricRange::new(0.0, 45.0),
            bin_fill_percent: MetricRange::new(5.0, 95.0),
            detection_confidence: MetricRange::new(0.70, 0.99),
            detection_distance_m: MetricRange::new(5.0, 150.0),
        }
    }

    /// The offshore deployment profile
    ///
    /// Carries the alternate TDS/turbidity/salinity bounds; clearer water,
    /// fewer sightings, and a wider drone sweep than the harbor profile.
    pub fn offshore() -> Self {
        Self {
            name: "offshore".to_string(),
            origin: Coordinate::new(36.7021, 28.4412),
            drone_scatter_deg: 0.006,
            detections_per_cycle: 1.2,
            turbidity_ntu: MetricRange::new(0.1, 5.0),
            salinity_psu: MetricRange::new(33.0, 40.0),
            tds_ppm: MetricRange::new(120.0, 360.0),
            ..Self::harbor()
        }
    }

    /// The refresh interval as a [`Duration`]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Fixed shoreline anchor for collection bin `index`
    pub fn bin_anchor(&self, index: usize) -> Coordinate {
        Coordinate::new(
            self.origin.lat - 2.0 * self.bin_spacing_deg,
            self.origin.lng + index as f64 * self.bin_spacing_deg,
        )
    }
}

impl Default for SimulatorProfile {
    fn default() -> Self {
        Self::harbor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ranges(profile: &SimulatorProfile) -> Vec<(&'static str, MetricRange)> {
        vec![
            ("ph", profile.ph),
            ("turbidity_ntu", profile.turbidity_ntu),
            ("salinity_psu", profile.salinity_psu),
            ("temperature_c", profile.temperature_c),
            ("tds_ppm", profile.tds_ppm),
            ("dissolved_oxygen_mg_l", profile.dissolved_oxygen_mg_l),
            ("battery_percent", profile.battery_percent),
            ("drone_altitude_m", profile.drone_altitude_m),
            ("drone_speed_kmh", profile.drone_speed_kmh),
            ("bin_fill_percent", profile.bin_fill_percent),
            ("detection_confidence", profile.detection_confidence),
            ("detection_distance_m", profile.detection_distance_m),
        ]
    }

    #[test]
    fn test_profiles_have_sane_ranges() {
        for profile in [SimulatorProfile::harbor(), SimulatorProfile::offshore()] {
            for (name, range) in ranges(&profile) {
                assert!(range.min < range.max, "{}: {} bad range", profile.name, name);
            }
            assert!(profile.walk_step_deg > 0.0);
            assert!(profile.history_capacity > 0);
            assert!(profile.refresh_interval_secs > 0);
        }
    }

    #[test]
    fn test_variants_differ_where_the_copies_drifted() {
        let harbor = SimulatorProfile::harbor();
        let offshore = SimulatorProfile::offshore();
        assert_ne!(harbor.tds_ppm, offshore.tds_ppm);
        assert_ne!(harbor.turbidity_ntu, offshore.turbidity_ntu);
        // The data contract ranges shared by all variants stay identical.
        assert_eq!(harbor.ph, offshore.ph);
        assert_eq!(harbor.battery_percent, offshore.battery_percent);
    }

    #[test]
    fn test_uniform_draws_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = MetricRange::new(6.5, 8.5);
        for _ in 0..1000 {
            assert!(range.contains(range.sample_uniform(&mut rng)));
        }
    }

    #[test]
    fn test_normal_draws_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = MetricRange::new(18.0, 30.0);
        for _ in 0..1000 {
            assert!(range.contains(range.sample_normal(&mut rng)));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = MetricRange::new(5.0, 5.0);
        assert_eq!(range.sample_uniform(&mut rng), 5.0);
    }

    #[test]
    fn test_bin_anchors_are_spaced() {
        let profile = SimulatorProfile::harbor();
        let a = profile.bin_anchor(0);
        let b = profile.bin_anchor(1);
        assert_eq!(a.lat, b.lat);
        assert!((b.lng - a.lng - profile.bin_spacing_deg).abs() < 1e-12);
    }
}
