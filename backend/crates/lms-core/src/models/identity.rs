use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated identity as issued by the external identity provider.
/// Immutable from this application's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(id: Uuid, email: &str) -> Self {
        Self {
            id,
            email: email.to_string(),
            display_name: None,
        }
    }
}
