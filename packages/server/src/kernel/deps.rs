//! Server dependencies for domain actions (using traits for testability)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use mailer::MailerService;
use sqlx::PgPool;

use crate::domains::auth::ChallengeStore;
use crate::kernel::BaseMailer;

// =============================================================================
// MailerService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around MailerService that implements the BaseMailer trait
pub struct MailerAdapter(pub Arc<MailerService>);

impl MailerAdapter {
    pub fn new(service: Arc<MailerService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailer for MailerAdapter {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        self.0
            .send_email(to, subject, html_body)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub mailer: Arc<dyn BaseMailer>,
    /// Process-wide store of outstanding OTP challenges
    pub challenge_store: Arc<ChallengeStore>,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        mailer: Arc<dyn BaseMailer>,
        challenge_store: Arc<ChallengeStore>,
    ) -> Self {
        Self {
            db_pool,
            mailer,
            challenge_store,
        }
    }
}
