use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the dashboard produces a DashboardEvent.
/// The CLI prints them; a GUI layer would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DashboardEvent {
    ProfileSelected {
        profile_id: i64,
        visible_events: usize,
        at: DateTime<Utc>,
    },
    SelectionCleared {
        visible_events: usize,
        at: DateTime<Utc>,
    },
    /// The summary collaborator resolved; the text is now stored.
    SummaryReady {
        summary: String,
        at: DateTime<Utc>,
    },
    /// The summary collaborator rejected; the fallback text is stored.
    SummaryFailed {
        message: String,
        at: DateTime<Utc>,
    },
    SchoolStatusChanged {
        in_school: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        selected_profile: Option<i64>,
        visible_events: usize,
        summary: String,
        is_loading: bool,
        in_school: bool,
        at: DateTime<Utc>,
    },
}
