pub mod auth_session;
pub mod session_key;
