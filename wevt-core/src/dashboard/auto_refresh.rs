//! Recurring refresh timer.
//!
//! The timer is a spawned task owned by an [`AutoRefresh`] handle. Dropping
//! the handle aborts the task, so turning auto-refresh off and tearing the
//! dashboard down both go through `Drop`.

use super::DashboardHandle;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Default period between automatic refreshes.
pub const DEFAULT_AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Owns the auto-refresh task. The task stops when this is dropped.
#[derive(Debug)]
pub struct AutoRefresh {
    task: JoinHandle<()>,
    period: Duration,
}

impl AutoRefresh {
    /// Spawn a loop that refreshes `dashboard` every `period`.
    ///
    /// The first refresh happens one full period after spawning. Must be
    /// called from within a tokio runtime.
    pub fn spawn(dashboard: DashboardHandle, period: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                debug!(?period, "Auto-refresh tick");
                // Failures are logged by `refresh`; the next tick tries again.
                let _ = dashboard.refresh().await;
            }
        });
        info!(?period, "Auto-refresh enabled");
        Self { task, period }
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.task.abort();
        info!(period = ?self.period, "Auto-refresh disabled");
    }
}
