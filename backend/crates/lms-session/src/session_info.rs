use crate::{MonitorState, SessionId};

use lms_core::Identity;

use chrono::{DateTime, Utc};

/// Snapshot of a tracked session
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub session_id: SessionId,
    pub identity: Identity,
    pub state: MonitorState,
    pub started_at: DateTime<Utc>,
}
