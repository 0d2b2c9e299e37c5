use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignOutResponse {
    /// Local session state is always cleared; this is never false
    pub signed_out: bool,
    /// Whether the identity provider acknowledged the revocation
    pub provider_ack: bool,
}
