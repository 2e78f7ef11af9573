//! Registration desk operations: monthly registration codes, person
//! lifecycle, and credential verification.

use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password;
use crate::dates;
use crate::db;
use crate::error::AppError;
use crate::models::{Person, PersonInput, User};

/// Attempts before giving up when another process races us to a code.
const CODE_RETRY_ATTEMPTS: u32 = 3;

const MIN_PASSWORD_LEN: usize = 8;

/// `"YYYY.MM."` — the scope under which sequence numbers are issued.
pub fn month_prefix(year: i32, month: u32) -> String {
    format!("{year}.{month:02}.")
}

/// `"YYYY.MM.NNNN"` with the sequence zero-padded to four digits.
pub fn format_code(year: i32, month: u32, seq: i64) -> String {
    format!("{year}.{month:02}.{seq:04}")
}

/// Create a person and assign their registration code.
///
/// The code is derived from wall-clock time at call time, never from caller
/// input. Sequence reservation and the insert share one transaction: an
/// insert that fails rolls the reservation back, so months stay gap-free.
/// A duplicate code from another process (the counter upsert makes this
/// impossible within one database, but a restored backup can skew) is
/// retried a bounded number of times.
pub async fn register_person(pool: &PgPool, input: &PersonInput) -> Result<Person, AppError> {
    let birth_date = input.validate()?;

    if db::persons::find_by_national_id(pool, &input.national_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "A person with this national ID is already registered".to_string(),
        ));
    }

    let mut attempt = 0;
    loop {
        attempt += 1;

        let now = dates::now_display();
        let (year, month) = (now.year(), now.month());
        let prefix = month_prefix(year, month);

        let mut tx = pool.begin().await?;
        let issued = db::persons::count_with_code_prefix(&mut *tx, &prefix).await?;
        let seq = db::counters::next_seq(&mut *tx, year, month, issued).await?;
        let code = format_code(year, month, seq);

        match db::persons::insert(&mut *tx, &code, birth_date, input).await {
            Ok(person) => {
                tx.commit().await?;
                tracing::info!(code = %person.registration_code, "person registered");
                return Ok(person);
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tx.rollback().await?;
                if db_err.constraint() == Some("pessoa_registration_code_key") {
                    if attempt < CODE_RETRY_ATTEMPTS {
                        tracing::warn!(%code, attempt, "registration code collision, retrying");
                        continue;
                    }
                    return Err(AppError::Internal(format!(
                        "Could not assign a unique registration code after {attempt} attempts"
                    )));
                }
                return Err(AppError::Conflict(
                    "A person with this national ID is already registered".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Overwrite a person's fields. The registration code is never regenerated.
pub async fn update_person(
    pool: &PgPool,
    id: Uuid,
    input: &PersonInput,
) -> Result<Person, AppError> {
    let birth_date = input.validate()?;

    match db::persons::update(pool, id, birth_date, input).await {
        Ok(person) => Ok(person),
        Err(sqlx::Error::RowNotFound) => Err(AppError::NotFound("Person not found".to_string())),
        Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => Err(
            AppError::Conflict("A person with this national ID is already registered".to_string()),
        ),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_person(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let rows = db::persons::delete(pool, id).await?;
    if rows == 0 {
        return Err(AppError::NotFound("Person not found".to_string()));
    }
    Ok(())
}

/// Verify credentials and stamp the last-login time.
///
/// An unknown login and a wrong password produce the same error so the
/// response never reveals which factor failed. Failures leave
/// `last_login_at` untouched.
pub async fn authenticate(pool: &PgPool, login: &str, password: &str) -> Result<User, AppError> {
    let invalid = || AppError::Unauthorized("Invalid login or password".to_string());

    let user = db::users::find_by_login(pool, login)
        .await?
        .ok_or_else(invalid)?;

    if !password::verify(password, &user.password_hash)? {
        return Err(invalid());
    }

    let now = Utc::now();
    db::users::touch_last_login(pool, user.id, now).await?;

    Ok(User {
        last_login_at: Some(now),
        ..user
    })
}

/// Change a user's password after re-verifying the current one.
pub async fn change_password(
    pool: &PgPool,
    user_id: Uuid,
    current_password: &str,
    new_password: &str,
) -> Result<(), AppError> {
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let user = db::users::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    if !password::verify(current_password, &user.password_hash)? {
        return Err(AppError::Unauthorized(
            "Current password is incorrect".to_string(),
        ));
    }

    let new_hash = password::hash(new_password)?;
    db::users::update_password(pool, user.id, &new_hash).await?;
    Ok(())
}
