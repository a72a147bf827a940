//! Periodic check callbacks invoked by the host scheduler.
//!
//! Stateless and append-only, so overlapping invocations cannot corrupt
//! anything; at worst two notifications go out.

use std::fmt;

use tracing::{info, warn};

use crate::collaborators::Notification;
use crate::endpoints::Api;
use crate::envelope::{Envelope, UpgradeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Daily,
    Weekly,
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cadence::Daily => f.write_str("daily"),
            Cadence::Weekly => f.write_str("weekly"),
        }
    }
}

/// Scheduler entry point: run the check and, when an update is available,
/// publish a transient notification to the current user. Notification
/// failures are logged, never fatal.
pub async fn run_scheduled_check(api: &Api, cadence: Cadence) -> Envelope<UpgradeStatus> {
    info!(%cadence, "running scheduled upgrade check");
    let result = api.upgrade_status().await;

    if let Envelope::Success(status) = &result
        && status.update_available
    {
        let note = Notification {
            title: api.translator.tr("Desk Update Available"),
            message: format!(
                "{} {} {} {}",
                api.translator.tr("Version"),
                status.latest_version,
                api.translator.tr("is available. Current version:"),
                status.current_version
            ),
            indicator: "blue".to_string(),
        };
        if let Err(e) = api
            .notifier
            .publish("upgrade_available", &note, &api.user.user)
            .await
        {
            warn!(error = %e, "could not publish upgrade notification");
        }
    }

    result
}
