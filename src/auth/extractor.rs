use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::session;
use crate::error::AppError;
use crate::state::SharedState;

/// The authenticated operator of the registration desk. Extracted from a
/// Bearer token or the session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub login: String,
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // Try Bearer token from Authorization header first
        if let Some(auth_header) = parts.headers.get("authorization") {
            let auth_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                let claims = session::decode_token(token, &state.config.jwt_secret)
                    .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;

                return Ok(AuthUser {
                    user_id: claims.sub,
                    login: claims.login,
                });
            }
        }

        // Fall back to the session cookie
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(session::SESSION_COOKIE) {
            let claims = session::decode_token(cookie.value(), &state.config.jwt_secret)
                .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;

            return Ok(AuthUser {
                user_id: claims.sub,
                login: claims.login,
            });
        }

        Err(AppError::Unauthorized(
            "Missing authentication token".to_string(),
        ))
    }
}
