use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub acknowledged: bool,
}
