use anyhow::Result;
use sqlx::PgPool;

/// Registered operator account (read-only in this service).
///
/// The password hash column is never selected here; login runs entirely on
/// emailed one-time codes.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Account {
    pub code: String,
    pub name: String,
    pub email: String,
    pub is_active: String,
}

impl Account {
    /// Find an account by email (case-insensitive)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT code, name, email, is_active FROM accounts WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Whether the active flag evaluates true.
    ///
    /// Accepted truthy encodings: "1", "Y"/"y", "TRUE"/"true". Anything
    /// else counts as inactive.
    pub fn active(&self) -> bool {
        matches!(self.is_active.trim(), "1" | "Y" | "y" | "TRUE" | "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_with_flag(flag: &str) -> Account {
        Account {
            code: "U001".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            is_active: flag.to_string(),
        }
    }

    #[test]
    fn test_truthy_encodings() {
        for flag in ["1", "Y", "y", "TRUE", "true", " 1 "] {
            assert!(account_with_flag(flag).active(), "expected {:?} active", flag);
        }
    }

    #[test]
    fn test_everything_else_is_inactive() {
        for flag in ["0", "", "N", "no", "False", "True", "yes", "2"] {
            assert!(!account_with_flag(flag).active(), "expected {:?} inactive", flag);
        }
    }
}
