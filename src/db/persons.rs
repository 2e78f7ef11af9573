use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ClassCount, Person, PersonInput};

/// Optional free-text fields are stored as NULL when left blank so a
/// round-tripped record reads the same whether the field was omitted or
/// submitted empty.
fn blank_to_none(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    registration_code: &str,
    birth_date: NaiveDate,
    input: &PersonInput,
) -> Result<Person, sqlx::Error> {
    sqlx::query_as::<_, Person>(
        "INSERT INTO pessoa (full_name, national_id, birth_date, email, phone, role,
            registration_code, class_name, room, enrollment_year, sex, postal_code,
            street, number, complement, neighborhood, city, state, education_level,
            theology_course, leadership_course, baptized, occupation)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
            $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23)
         RETURNING *",
    )
    .bind(&input.full_name)
    .bind(&input.national_id)
    .bind(birth_date)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(blank_to_none(&input.role))
    .bind(registration_code)
    .bind(&input.class_name)
    .bind(blank_to_none(&input.room))
    .bind(blank_to_none(&input.enrollment_year))
    .bind(blank_to_none(&input.sex))
    .bind(blank_to_none(&input.postal_code))
    .bind(blank_to_none(&input.street))
    .bind(blank_to_none(&input.number))
    .bind(blank_to_none(&input.complement))
    .bind(blank_to_none(&input.neighborhood))
    .bind(blank_to_none(&input.city))
    .bind(blank_to_none(&input.state))
    .bind(blank_to_none(&input.education_level))
    .bind(blank_to_none(&input.theology_course))
    .bind(blank_to_none(&input.leadership_course))
    .bind(blank_to_none(&input.baptized))
    .bind(blank_to_none(&input.occupation))
    .fetch_one(executor)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>("SELECT * FROM pessoa WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_national_id(
    pool: &PgPool,
    national_id: &str,
) -> Result<Option<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>("SELECT * FROM pessoa WHERE national_id = $1")
        .bind(national_id)
        .fetch_optional(pool)
        .await
}

/// Case-insensitive substring match on the full name. An empty filter
/// returns every row, in insertion order.
pub async fn search(pool: &PgPool, name: &str) -> Result<Vec<Person>, sqlx::Error> {
    let pattern = format!("%{name}%");
    sqlx::query_as::<_, Person>(
        "SELECT * FROM pessoa WHERE full_name ILIKE $1 ORDER BY created_at, id",
    )
    .bind(pattern)
    .fetch_all(pool)
    .await
}

/// Count codes already issued under a `YYYY.MM.` prefix. Only consulted to
/// seed a month's counter row when rows predate the counter table.
pub async fn count_with_code_prefix<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    prefix: &str,
) -> Result<i64, sqlx::Error> {
    let row: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM pessoa WHERE registration_code LIKE $1 || '%'")
            .bind(prefix)
            .fetch_one(executor)
            .await?;
    Ok(row.0)
}

pub async fn count_by_class(pool: &PgPool) -> Result<Vec<ClassCount>, sqlx::Error> {
    sqlx::query_as::<_, ClassCount>(
        "SELECT class_name, COUNT(*) AS total FROM pessoa
         GROUP BY class_name ORDER BY class_name",
    )
    .fetch_all(pool)
    .await
}

/// Overwrites every field except `id` and `registration_code`.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    birth_date: NaiveDate,
    input: &PersonInput,
) -> Result<Person, sqlx::Error> {
    sqlx::query_as::<_, Person>(
        "UPDATE pessoa SET full_name = $2, national_id = $3, birth_date = $4, email = $5,
            phone = $6, role = $7, class_name = $8, room = $9, enrollment_year = $10,
            sex = $11, postal_code = $12, street = $13, number = $14, complement = $15,
            neighborhood = $16, city = $17, state = $18, education_level = $19,
            theology_course = $20, leadership_course = $21, baptized = $22,
            occupation = $23, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.full_name)
    .bind(&input.national_id)
    .bind(birth_date)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(blank_to_none(&input.role))
    .bind(&input.class_name)
    .bind(blank_to_none(&input.room))
    .bind(blank_to_none(&input.enrollment_year))
    .bind(blank_to_none(&input.sex))
    .bind(blank_to_none(&input.postal_code))
    .bind(blank_to_none(&input.street))
    .bind(blank_to_none(&input.number))
    .bind(blank_to_none(&input.complement))
    .bind(blank_to_none(&input.neighborhood))
    .bind(blank_to_none(&input.city))
    .bind(blank_to_none(&input.state))
    .bind(blank_to_none(&input.education_level))
    .bind(blank_to_none(&input.theology_course))
    .bind(blank_to_none(&input.leadership_course))
    .bind(blank_to_none(&input.baptized))
    .bind(blank_to_none(&input.occupation))
    .fetch_one(pool)
    .await
}

/// Returns the number of deleted rows (0 when the id is unknown).
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pessoa WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
