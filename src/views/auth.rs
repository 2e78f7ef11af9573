use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::auth::session;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {}

pub async fn login_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    // Already logged in: straight to the person list
    if let Some(cookie) = jar.get(session::SESSION_COOKIE) {
        if session::decode_token(cookie.value(), &state.config.jwt_secret).is_ok() {
            return Redirect::to("/persons").into_response();
        }
    }

    let template = LoginTemplate {};
    Html(template.render().unwrap_or_default()).into_response()
}
