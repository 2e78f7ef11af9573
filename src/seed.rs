use sqlx::PgPool;

use crate::auth::password;
use crate::config::Config;
use crate::db;
use crate::error::AppError;

/// Create the bootstrap administrative account when the user table is empty.
/// Guarded by an advisory lock so concurrent instances cannot both seed.
pub async fn seed_admin_if_empty(pool: &PgPool, config: &Config) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(1)")
        .execute(&mut *tx)
        .await?;

    if db::users::count_all(&mut *tx).await? > 0 {
        return Ok(());
    }

    let hash = password::hash(&config.bootstrap_password)?;
    db::users::create(&mut *tx, &config.bootstrap_login, &hash).await?;
    tx.commit().await?;

    tracing::warn!(
        login = %config.bootstrap_login,
        "Seeded bootstrap user with the configured default password; change it before exposing this instance"
    );
    Ok(())
}
