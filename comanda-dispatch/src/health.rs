//! Health Monitor - periodic availability probing
//!
//! Drives the controller's health state machine on a fixed, jitter-free
//! interval. An on-demand `refresh_health` call may run at any time; the
//! controller's probe epoch makes sure a stale interval probe never
//! overwrites a newer result.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;

use crate::PrintController;

/// Periodic health prober for the print backend
pub struct HealthMonitor {
    controller: Arc<PrintController>,
    probe_interval: Duration,
}

impl HealthMonitor {
    /// Default probe interval
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

    /// Create a new monitor over a shared controller
    pub fn new(controller: Arc<PrintController>, probe_interval: Duration) -> Self {
        Self {
            controller,
            probe_interval,
        }
    }

    /// Run the probe loop forever.
    ///
    /// The first tick fires immediately, so the session starts with a
    /// real availability reading instead of `Unknown`.
    pub async fn run(self) {
        let mut ticker = interval(self.probe_interval);
        loop {
            ticker.tick().await;
            self.controller.refresh_health().await;
        }
    }

    /// Spawn the probe loop on the runtime
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
