use lms_session::{MonitorState, SessionInfo};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionDto {
    pub session_id: String,
    pub user_id: String,
    pub email: String,
    pub state: MonitorState,
    pub started_at: DateTime<Utc>,
}

impl From<SessionInfo> for SessionDto {
    fn from(info: SessionInfo) -> Self {
        Self {
            session_id: info.session_id.to_string(),
            user_id: info.identity.id.to_string(),
            email: info.identity.email,
            state: info.state,
            started_at: info.started_at,
        }
    }
}
