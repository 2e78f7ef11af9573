use serde::Serialize;

/// One row of the per-class aggregate report.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ClassCount {
    pub class_name: String,
    pub total: i64,
}
