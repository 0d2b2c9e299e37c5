use crate::Role;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-identity profile row. Created out-of-band by the provisioning
/// pipeline; this application only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub role: Role,
    pub full_name: Option<String>,
}

impl Profile {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self {
            id,
            role,
            full_name: None,
        }
    }

    pub fn satisfies(&self, required: Role) -> bool {
        self.role.satisfies(required)
    }
}
