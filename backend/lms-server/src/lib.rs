pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    access::require_role,
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result, Result as ApiResult},
    extractors::{auth_session::AuthSession, session_key::SessionKey},
    profiles::{
        profile_dto::ProfileDto,
        profile_response::ProfileResponse,
        profiles::{get_me, get_profile},
    },
    session::{
        activity_response::ActivityResponse,
        session::{create_session, get_session, record_activity, sign_out},
        session_dto::SessionDto,
        session_response::SessionResponse,
        sign_out_response::SignOutResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
