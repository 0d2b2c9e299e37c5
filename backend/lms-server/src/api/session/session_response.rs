use crate::SessionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: SessionDto,
}
