use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Person, PersonInput};
use crate::registration;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Person>>, AppError> {
    let filter = params.q.unwrap_or_default();
    let persons = db::persons::search(&state.pool, &filter).await?;
    Ok(Json(persons))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(input): Json<PersonInput>,
) -> Result<Json<Person>, AppError> {
    let person = registration::register_person(&state.pool, &input).await?;
    Ok(Json(person))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Person>, AppError> {
    let person = db::persons::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;
    Ok(Json(person))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(input): Json<PersonInput>,
) -> Result<Json<Person>, AppError> {
    let person = registration::update_person(&state.pool, id, &input).await?;
    Ok(Json(person))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    registration::delete_person(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
