//! Test fixtures for accounts and inventory reference data.

use anyhow::Result;
use sqlx::PgPool;

pub async fn create_account(
    pool: &PgPool,
    code: &str,
    name: &str,
    email: &str,
    is_active: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO accounts (code, name, email, passwd, is_active)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(code)
    .bind(name)
    .bind(email)
    .bind("$2b$10$fixture-hash")
    .bind(is_active)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn set_account_active(pool: &PgPool, code: &str, is_active: &str) -> Result<()> {
    sqlx::query("UPDATE accounts SET is_active = $2 WHERE code = $1")
        .bind(code)
        .bind(is_active)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn create_catalog_item(pool: &PgPool, code: &str, description: &str) -> Result<()> {
    sqlx::query("INSERT INTO catalog_items (code, description) VALUES ($1, $2)")
        .bind(code)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn create_location(pool: &PgPool, code: &str, description: &str) -> Result<()> {
    sqlx::query("INSERT INTO locations (code, description) VALUES ($1, $2)")
        .bind(code)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn template_count(pool: &PgPool, code: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM item_templates WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
}

pub async fn history_count(pool: &PgPool, code: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM item_detail_history WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
}

pub async fn history_keys(pool: &PgPool, code: &str) -> Result<Vec<i64>> {
    sqlx::query_scalar::<_, i64>(
        "SELECT autokey FROM item_detail_history WHERE code = $1 ORDER BY autokey",
    )
    .bind(code)
    .fetch_all(pool)
    .await
    .map_err(Into::into)
}
