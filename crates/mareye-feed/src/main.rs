//! MAREYE live feed
//!
//! Headless host for the telemetry simulator. Polls the staleness check
//! once a second, treats a line on stdin as the manual refresh button, and
//! writes each regenerated fleet snapshot as one JSON line on stdout for a
//! dashboard frontend to consume. No flags, no config files: defaults come
//! from the harbor profile.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mareye_core::prelude::*;

/// How often the host re-runs the staleness check
const POLL_PERIOD: Duration = Duration::from_secs(1);

/// One line of feed output: the current snapshot plus the map trail
#[derive(Serialize)]
struct FeedFrame<'a> {
    snapshot: &'a FleetSnapshot,
    track: Vec<&'a PositionSample>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let profile = SimulatorProfile::default();
    let assets = AssetLibrary::new("assets");
    if assets.resolve("logo.png") == AssetRef::Placeholder {
        warn!("logo asset missing; frontend will render the placeholder");
    }

    let mut simulator = TelemetrySimulator::new(profile.clone());
    let mut state = SessionState::for_profile(&profile);

    info!(
        profile = %profile.name,
        interval_secs = profile.refresh_interval_secs,
        version = mareye_core::VERSION,
        "mareye feed started"
    );

    let mut ticker = tokio::time::interval(POLL_PERIOD);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        let trigger = tokio::select! {
            _ = ticker.tick() => Trigger::Poll,
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(_)) => {
                    info!("manual refresh requested");
                    Trigger::Manual
                }
                // Closed or broken stdin; keep polling.
                _ => {
                    stdin_open = false;
                    continue;
                }
            },
        };

        if run_cycle(&mut state, &mut simulator, trigger, Utc::now()) == RefreshOutcome::Refreshed {
            if let Some(snapshot) = state.latest() {
                let frame = FeedFrame {
                    snapshot,
                    track: state.history.iter().collect(),
                };
                println!("{}", serde_json::to_string(&frame)?);
            }
        }
    }
}
