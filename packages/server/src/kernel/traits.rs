// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.

use anyhow::Result;
use async_trait::async_trait;

/// Outbound email capability
#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send an HTML email. Ok(()) means the transport accepted the message.
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()>;
}
