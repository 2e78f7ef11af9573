pub mod auth;
pub mod persons;
pub mod reports;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Auth views
        .route("/", get(auth::login_page))
        .route("/auth/login", get(auth::login_page))
        // Persons
        .route("/persons", get(persons::list_page))
        .route("/persons/new", get(persons::new_page))
        .route("/persons/{id}/edit", get(persons::edit_page))
        // Reports
        .route("/reports/by-class", get(reports::by_class_page))
        .route("/reports/chart", get(reports::chart_page))
}
