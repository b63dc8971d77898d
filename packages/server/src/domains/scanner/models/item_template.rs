use anyhow::Result;
use sqlx::PgPool;

/// Per-code template row, provisioned on first successful resolution
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ItemTemplate {
    pub code: String,
    pub description: String,
}

impl ItemTemplate {
    /// Whether a template row exists for the code
    pub async fn exists(code: &str, pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM item_templates WHERE UPPER(TRIM(code)) = $1)",
        )
        .bind(code)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert a template row unless one already exists for the code.
    ///
    /// The primary key on code collapses concurrent first resolutions into
    /// a single row.
    pub async fn insert_if_absent(code: &str, description: &str, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "INSERT INTO item_templates (code, description) VALUES ($1, $2)
             ON CONFLICT (code) DO NOTHING",
        )
        .bind(code)
        .bind(description)
        .execute(pool)
        .await?;
        Ok(())
    }
}
