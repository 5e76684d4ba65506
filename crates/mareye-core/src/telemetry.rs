//! Telemetry data contract
//!
//! The snapshot types emitted by the simulator and consumed by every
//! dashboard variant. Readings are flat records regenerated wholesale on
//! each refresh; only the position history carries state across cycles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A GPS coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude, decimal degrees
    pub lat: f64,
    /// Longitude, decimal degrees
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One GPS sample in the position history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Latitude, decimal degrees
    pub lat: f64,
    /// Longitude, decimal degrees
    pub lng: f64,
    /// When the sample was taken
    pub timestamp: DateTime<Utc>,
}

impl PositionSample {
    /// Create a sample at `position` taken at `timestamp`
    pub fn new(position: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self {
            lat: position.lat,
            lng: position.lng,
            timestamp,
        }
    }

    /// The sample's coordinate
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Operational status reported by a monitored unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// Unit is on station and reporting
    Active,
    /// Unit is idle, awaiting tasking
    Standby,
    /// Unit is docked and charging
    Charging,
    /// Unit reported a hardware fault
    Fault,
}

impl DeviceStatus {
    /// Label shown on status badges
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Standby => "Standby",
            Self::Charging => "Charging",
            Self::Fault => "Fault",
        }
    }
}

/// Camera subsystem state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    /// Streaming normally
    Online,
    /// Streaming with reduced quality
    Degraded,
    /// Not streaming
    Offline,
}

impl CameraStatus {
    /// Label shown on camera badges
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Degraded => "Degraded",
            Self::Offline => "Offline",
        }
    }
}

/// Debris classes the detection model reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    /// Single plastic bottle
    PlasticBottle,
    /// Plastic bag or film
    PlasticBag,
    /// Abandoned fishing net
    FishingNet,
    /// Polystyrene foam fragment
    FoamFragment,
    /// Dense cluster of microplastics
    MicroplasticCluster,
}

impl DetectionKind {
    /// Every debris class, in display order
    pub const ALL: [DetectionKind; 5] = [
        DetectionKind::PlasticBottle,
        DetectionKind::PlasticBag,
        DetectionKind::FishingNet,
        DetectionKind::FoamFragment,
        DetectionKind::MicroplasticCluster,
    ];

    /// Human-readable label for the detections list
    pub fn label(&self) -> &'static str {
        match self {
            Self::PlasticBottle => "Plastic Bottle",
            Self::PlasticBag => "Plastic Bag",
            Self::FishingNet => "Fishing Net",
            Self::FoamFragment => "Foam Fragment",
            Self::MicroplasticCluster => "Microplastic Cluster",
        }
    }

    /// Asset name of the sample photo shown next to the detection
    pub fn photo(&self) -> &'static str {
        match self {
            Self::PlasticBottle => "detections/plastic_bottle.jpg",
            Self::PlasticBag => "detections/plastic_bag.jpg",
            Self::FishingNet => "detections/fishing_net.jpg",
            Self::FoamFragment => "detections/foam_fragment.jpg",
            Self::MicroplasticCluster => "detections/microplastic_cluster.jpg",
        }
    }
}

/// One simulated debris sighting
///
/// Ephemeral: the list is regenerated on every refresh and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionEvent {
    /// Event id
    pub id: Uuid,
    /// Debris class
    pub kind: DetectionKind,
    /// When the sighting was made
    pub observed_at: DateTime<Utc>,
    /// Clock label rendered in the detections list ("14:02:33")
    pub time_label: String,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    /// Estimated range from the buoy, meters
    pub distance_m: f64,
    /// Asset name of the sample photo
    pub photo: String,
}

/// Water-quality scalars reported by the buoy sonde
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterQuality {
    /// Acidity
    pub ph: f64,
    /// Turbidity, NTU
    pub turbidity_ntu: f64,
    /// Salinity, PSU
    pub salinity_psu: f64,
    /// Water temperature, °C
    pub temperature_c: f64,
    /// Total dissolved solids, ppm
    pub tds_ppm: f64,
    /// Dissolved oxygen, mg/L
    pub dissolved_oxygen_mg_l: f64,
}

/// Snapshot of the monitoring buoy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyReading {
    /// Operational status
    pub status: DeviceStatus,
    /// Battery charge, percent
    pub battery_percent: f64,
    /// Current position
    pub position: Coordinate,
    /// Camera subsystem state
    pub camera: CameraStatus,
    /// Sonde readings
    pub water: WaterQuality,
    /// Debris sightings this cycle
    pub detections: Vec<DetectionEvent>,
}

/// Snapshot of one survey drone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneReading {
    /// Unit id, e.g. "drone-01"
    pub id: String,
    /// Operational status
    pub status: DeviceStatus,
    /// Battery charge, percent
    pub battery_percent: f64,
    /// Current position
    pub position: Coordinate,
    /// Altitude above sea level, meters
    pub altitude_m: f64,
    /// Ground speed, km/h
    pub speed_kmh: f64,
    /// Camera subsystem state
    pub camera: CameraStatus,
}

/// Snapshot of one shoreline collection bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionBinReading {
    /// Unit id, e.g. "bin-01"
    pub id: String,
    /// Operational status
    pub status: DeviceStatus,
    /// Battery charge, percent
    pub battery_percent: f64,
    /// Anchor position
    pub position: Coordinate,
    /// Fill level, percent
    pub fill_percent: f64,
}

/// One complete fleet reading, regenerated wholesale per refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    /// When this snapshot was generated
    pub generated_at: DateTime<Utc>,
    /// The monitoring buoy
    pub buoy: BuoyReading,
    /// Survey drones
    pub drones: Vec<DroneReading>,
    /// Shoreline collection bins
    pub bins: Vec<CollectionBinReading>,
}
