use lms_core::{Profile, Role};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub role: Role,
    pub full_name: Option<String>,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            role: profile.role,
            full_name: profile.full_name,
        }
    }
}
