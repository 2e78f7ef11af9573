pub mod auth;
pub mod persons;
pub mod reports;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        // Persons
        .route("/api/v1/persons", get(persons::list).post(persons::create))
        .route(
            "/api/v1/persons/{id}",
            get(persons::get)
                .put(persons::update)
                .delete(persons::delete),
        )
        // Reports
        .route("/api/v1/reports/by-class", get(reports::by_class))
}
