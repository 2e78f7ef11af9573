use axum::extract::State;
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::ClassCount;
use crate::state::SharedState;

pub async fn by_class(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<ClassCount>>, AppError> {
    let counts = db::persons::count_by_class(&state.pool).await?;
    Ok(Json(counts))
}
