use anyhow::Result;
use sqlx::PgPool;

/// Storage location (reference data, no write path here)
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Location {
    pub code: String,
    pub description: String,
}

impl Location {
    /// Translate a location code to its human-readable description
    pub async fn description_for_code(code: &str, pool: &PgPool) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT TRIM(description) FROM locations WHERE UPPER(TRIM(code)) = UPPER(TRIM($1))",
        )
        .bind(code)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Translate a human-readable description to its location code
    /// (exact match, case-insensitive)
    pub async fn code_for_description(description: &str, pool: &PgPool) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT code FROM locations WHERE UPPER(TRIM(description)) = UPPER(TRIM($1))",
        )
        .bind(description)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// All distinct non-blank location descriptions, sorted
    pub async fn distinct_descriptions(pool: &PgPool) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT TRIM(description) FROM locations
             WHERE description IS NOT NULL AND TRIM(description) <> ''
             ORDER BY 1",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
