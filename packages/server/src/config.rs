use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub mailer_api_url: String,
    pub mailer_api_key: String,
    pub mailer_from_address: String,
    pub mailer_from_name: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "scanner-api".to_string()),
            mailer_api_url: env::var("MAILER_API_URL").context("MAILER_API_URL must be set")?,
            mailer_api_key: env::var("MAILER_API_KEY").context("MAILER_API_KEY must be set")?,
            mailer_from_address: env::var("MAILER_FROM_ADDRESS")
                .context("MAILER_FROM_ADDRESS must be set")?,
            mailer_from_name: env::var("MAILER_FROM_NAME")
                .unwrap_or_else(|_| "Stockroom OTP".to_string()),
        })
    }
}
