//! Mapping of Aiven service states onto last-operation outcomes

use aiven_broker_models::LastOperationState;
use chrono::{DateTime, Duration, Utc};

use crate::aiven::ServiceStatus;

/// Default window after an update during which the status is not trusted
pub const DEFAULT_UPDATE_DEBOUNCE_SECONDS: u64 = 60;

/// Upper bound accepted for the debounce window
pub const MAX_UPDATE_DEBOUNCE_SECONDS: u64 = 86_400;

/// Map an Aiven service state to a last-operation outcome
///
/// Unrecognised states are reported as in progress so that a poller waiting
/// for a terminal state keeps polling.
pub fn provider_states_mapping(status: &ServiceStatus) -> (LastOperationState, String) {
    match status {
        ServiceStatus::Running => (
            LastOperationState::Succeeded,
            "Last operation succeeded".to_string(),
        ),
        ServiceStatus::Rebuilding => (LastOperationState::InProgress, "Rebuilding".to_string()),
        ServiceStatus::Rebalancing => (LastOperationState::InProgress, "Rebalancing".to_string()),
        ServiceStatus::PowerOff => (
            LastOperationState::Failed,
            "Last operation failed: service is powered off".to_string(),
        ),
        ServiceStatus::Other(state) => (
            LastOperationState::InProgress,
            format!("Unknown state: {}", state),
        ),
    }
}

/// Status mapping with an update debounce window
///
/// Right after an update is accepted Aiven still reports the old RUNNING
/// state. Any service updated within the window is reported as in progress.
#[derive(Debug, Clone, Copy)]
pub struct StatusMapper {
    debounce: Duration,
}

impl Default for StatusMapper {
    fn default() -> Self {
        Self::new(DEFAULT_UPDATE_DEBOUNCE_SECONDS)
    }
}

impl StatusMapper {
    pub fn new(debounce_seconds: u64) -> Self {
        Self {
            debounce: Duration::seconds(debounce_seconds.min(MAX_UPDATE_DEBOUNCE_SECONDS) as i64),
        }
    }

    pub fn map(
        &self,
        status: &ServiceStatus,
        update_time: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> (LastOperationState, String) {
        if update_time > now - self.debounce {
            return (
                LastOperationState::InProgress,
                "Preparing to apply update".to_string(),
            );
        }
        provider_states_mapping(status)
    }
}
