use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::auth::session::{self, Claims, SESSION_COOKIE, SESSION_HOURS};
use crate::error::AppError;
use crate::models::User;
use crate::registration;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn session_cookie(token: &str) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(SESSION_HOURS))
        .build();
    CookieJar::new().add(cookie)
}

fn clear_session_cookie() -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(cookie)
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    if state.login_limiter.check(&req.login).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let user = match registration::authenticate(&state.pool, &req.login, &req.password).await {
        Ok(user) => user,
        Err(err @ AppError::Unauthorized(_)) => {
            state.login_limiter.record_failure(&req.login);
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let token = session::encode_token(
        &Claims::new(user.id, user.login.clone()),
        &state.config.jwt_secret,
    )
    .map_err(AppError::Internal)?;

    let jar = session_cookie(&token);
    Ok((jar, Json(LoginResponse { token, user })))
}

pub async fn logout() -> (CookieJar, Json<MessageResponse>) {
    (
        clear_session_cookie(),
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

pub async fn change_password(
    State(state): State<SharedState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    registration::change_password(
        &state.pool,
        auth.user_id,
        &req.current_password,
        &req.new_password,
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Password changed successfully".to_string(),
    }))
}
