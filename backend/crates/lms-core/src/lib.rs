pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::access_decision::AccessDecision;
pub use models::identity::Identity;
pub use models::profile::Profile;
pub use models::role::Role;

#[cfg(test)]
mod tests;
