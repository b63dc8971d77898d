use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// How many times an append retries after losing a sequence-key race
const KEY_CONFLICT_RETRIES: usize = 3;

/// Append-only location assignment log entry
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct DetailHistory {
    pub autokey: i64,
    pub code: String,
    pub item_code: String,
    pub location_code: String,
    pub remark1: String,
    pub remark2: String,
    pub remark3: String,
    pub recorded_at: DateTime<Utc>,
    pub recorded_by: String,
}

impl DetailHistory {
    /// Latest history row for a code, by descending sequence key
    pub async fn latest_for_code(code: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM item_detail_history
             WHERE UPPER(TRIM(code)) = $1
             ORDER BY autokey DESC
             LIMIT 1",
        )
        .bind(code)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Append a new assignment row.
    ///
    /// The sequence key is current max + 1, computed and inserted in one
    /// statement. A concurrent append can still win the same key; the
    /// loser trips the primary key and the insert retries.
    pub async fn append(
        code: &str,
        location_code: &str,
        remarks: &[String; 3],
        recorded_by: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        let mut last_err = None;
        for _ in 0..KEY_CONFLICT_RETRIES {
            let inserted = sqlx::query_as::<_, Self>(
                "INSERT INTO item_detail_history
                     (autokey, code, item_code, location_code,
                      remark1, remark2, remark3, recorded_at, recorded_by)
                 SELECT COALESCE(MAX(autokey), 0) + 1, $1, $1, $2, $3, $4, $5, now(), $6
                 FROM item_detail_history
                 RETURNING *",
            )
            .bind(code)
            .bind(location_code)
            .bind(&remarks[0])
            .bind(&remarks[1])
            .bind(&remarks[2])
            .bind(recorded_by)
            .fetch_one(pool)
            .await;

            match inserted {
                Ok(row) => return Ok(row),
                Err(e) if is_unique_violation(&e) => last_err = Some(e),
                Err(e) => return Err(e.into()),
            }
        }
        Err(last_err.expect("retry loop ran at least once").into())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}
