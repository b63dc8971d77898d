use anyhow::Result;
use sqlx::PgPool;

/// Master item catalog entry (reference data, no write path here)
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CatalogItem {
    pub code: String,
    pub description: String,
}

impl CatalogItem {
    /// Find a catalog item by normalized code.
    ///
    /// Reference rows may carry padded or lower-cased codes, so the stored
    /// value is trimmed and uppercased for the comparison.
    pub async fn find_by_code(code: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT code, description FROM catalog_items WHERE UPPER(TRIM(code)) = $1",
        )
        .bind(code)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
