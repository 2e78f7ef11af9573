/// Reserve the next registration sequence number for a calendar month.
///
/// The upsert is a single atomic statement: concurrent reservations for the
/// same month serialize on the counter row, so no two callers ever see the
/// same sequence. `seed` is the number of codes already carrying the month's
/// prefix and only matters the first time a month's row is created (rows
/// issued before the counter table existed).
pub async fn next_seq<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    year: i32,
    month: u32,
    seed: i64,
) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO registration_counters (year, month, last_seq)
         VALUES ($1, $2, $3 + 1)
         ON CONFLICT (year, month)
         DO UPDATE SET last_seq = registration_counters.last_seq + 1
         RETURNING last_seq",
    )
    .bind(year as i16)
    .bind(month as i16)
    .bind(seed)
    .fetch_one(executor)
    .await?;
    Ok(row.0)
}
