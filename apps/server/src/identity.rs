//! Caller identity.
//!
//! Authentication happens upstream; the proxy forwards the authenticated
//! user's id in the `x-user-id` header. This extractor only requires the
//! header's presence. Well-formedness is checked by the services so that
//! malformed ids report 400, not 401.

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};

pub const USER_ID_HEADER: &str = "x-user-id";

pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| UserId(value.to_string()))
            .ok_or((StatusCode::UNAUTHORIZED, "missing x-user-id header"))
    }
}
