//! Recording mock for the email capability.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use server_core::kernel::BaseMailer;

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Captures outbound email instead of sending it; can be told to fail.
#[derive(Default)]
pub struct MockMailer {
    sent: RwLock<Vec<SentEmail>>,
    failing: RwLock<bool>,
}

impl MockMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn fail_sends(&self, failing: bool) {
        *self.failing.write().await = failing;
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }

    pub async fn last(&self) -> Option<SentEmail> {
        self.sent.read().await.last().cloned()
    }

    /// The 6-digit code inside the most recently delivered OTP email
    pub async fn last_otp(&self) -> Option<String> {
        self.last()
            .await
            .and_then(|mail| mail.body.rsplit(' ').next().map(str::to_string))
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        if *self.failing.read().await {
            return Err(anyhow!("mail transport unavailable"));
        }

        self.sent.write().await.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: html_body.to_string(),
        });
        Ok(())
    }
}
