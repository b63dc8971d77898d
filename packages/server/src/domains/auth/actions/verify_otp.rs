//! Verify OTP action

use tracing::info;

use crate::common::ApiError;
use crate::domains::auth::models::Account;
use crate::domains::auth::types::AuthenticatedIdentity;
use crate::kernel::ServerDeps;

/// Verify a submitted OTP against the stored challenge for the email.
///
/// Account existence and active status are re-checked here: either may
/// have changed since the challenge was issued. The challenge is not
/// consumed on success; it stays valid until replaced by a new issue.
pub async fn verify_otp(
    email: &str,
    otp: &str,
    deps: &ServerDeps,
) -> Result<AuthenticatedIdentity, ApiError> {
    if email.trim().is_empty() || otp.trim().is_empty() {
        return Err(ApiError::Validation("Email and OTP required".to_string()));
    }

    let Some(account) = Account::find_by_email(email, &deps.db_pool).await? else {
        return Err(ApiError::NotRegistered);
    };

    if !account.active() {
        return Err(ApiError::InactiveAccount);
    }

    if !deps.challenge_store.matches(email, otp).await {
        info!("OTP verification failed for {}", email);
        return Err(ApiError::InvalidOtp);
    }

    info!("OTP verified for account {}", account.code);
    Ok(AuthenticatedIdentity {
        email: account.email,
        name: account.name,
    })
}
