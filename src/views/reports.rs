use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use chrono::Utc;

use crate::auth::extractor::AuthUser;
use crate::dates;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "reports/by_class.html")]
#[allow(dead_code)]
struct ByClassTemplate {
    operator: String,
    generated_at: String,
    total: i64,
    rows: Vec<ClassRow>,
}

#[allow(dead_code)]
struct ClassRow {
    class_name: String,
    total: i64,
}

#[derive(Template)]
#[template(path = "reports/chart.html")]
#[allow(dead_code)]
struct ChartTemplate {
    operator: String,
    generated_at: String,
    bars: Vec<Bar>,
}

#[allow(dead_code)]
struct Bar {
    class_name: String,
    total: i64,
    width_pct: i64,
}

pub async fn by_class_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = db::persons::count_by_class(&state.pool).await?;

    let total = counts.iter().map(|c| c.total).sum();
    let rows = counts
        .into_iter()
        .map(|c| ClassRow {
            class_name: c.class_name,
            total: c.total,
        })
        .collect();

    let template = ByClassTemplate {
        operator: auth.login,
        generated_at: dates::format_br_datetime(Utc::now()),
        total,
        rows,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn chart_page(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = db::persons::count_by_class(&state.pool).await?;

    let max = counts.iter().map(|c| c.total).max().unwrap_or(1).max(1);
    let bars = counts
        .into_iter()
        .map(|c| Bar {
            width_pct: c.total * 100 / max,
            class_name: c.class_name,
            total: c.total,
        })
        .collect();

    let template = ChartTemplate {
        operator: auth.login,
        generated_at: dates::format_br_datetime(Utc::now()),
        bars,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
