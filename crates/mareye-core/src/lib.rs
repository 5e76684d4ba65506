//! # MAREYE Core Library
//!
//! Core functionality for the MAREYE marine monitoring dashboard.

#![warn(missing_docs)]

//!
//! This library provides:
//! - The telemetry data contract shared by every dashboard variant
//! - A synthetic telemetry simulator for the buoy/drone/bin fleet
//! - Bounded GPS position history (the buoy's map trail)
//! - Session state and the level-triggered refresh cycle
//! - Static image asset resolution with placeholder fallback
//!
//! ## Example
//!
//! ```rust,ignore
//! use mareye_core::prelude::*;
//! use chrono::Utc;
//!
//! let profile = SimulatorProfile::default();
//! let mut simulator = TelemetrySimulator::new(profile.clone());
//! let mut state = SessionState::for_profile(&profile);
//!
//! // One refresh cycle; regenerates only when the snapshot is stale.
//! run_cycle(&mut state, &mut simulator, Trigger::Poll, Utc::now());
//! println!("trail length: {}", state.history.len());
//! ```

pub mod assets;
pub mod history;
pub mod profile;
pub mod refresh;
pub mod session;
pub mod simulator;
pub mod telemetry;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::assets::{AssetLibrary, AssetRef};
    pub use crate::history::PositionHistory;
    pub use crate::profile::{MetricRange, SimulatorProfile};
    pub use crate::refresh::{run_cycle, Freshness, RefreshOutcome, RefreshPolicy, Trigger};
    pub use crate::session::SessionState;
    pub use crate::simulator::TelemetrySimulator;
    pub use crate::telemetry::{
        BuoyReading, CameraStatus, CollectionBinReading, Coordinate, DetectionEvent,
        DetectionKind, DeviceStatus, DroneReading, FleetSnapshot, PositionSample, WaterQuality,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
