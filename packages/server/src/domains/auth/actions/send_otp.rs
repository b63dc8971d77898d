//! Send OTP action

use rand::Rng;
use tracing::{error, info};

use crate::common::ApiError;
use crate::domains::auth::models::Account;
use crate::kernel::ServerDeps;

const OTP_SUBJECT: &str = "Your OTP Code";

/// Issue a 6-digit OTP challenge for a registered account and email it.
///
/// The stored challenge replaces any prior one for the same email. On
/// delivery failure the challenge stays stored: the code remains valid
/// until a new one is issued.
pub async fn send_otp(email: &str, deps: &ServerDeps) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::Validation("Email is required".to_string()));
    }

    // 1. The email must belong to a registered, active account
    let Some(account) = Account::find_by_email(email, &deps.db_pool).await? else {
        info!("OTP requested for unregistered email: {}", email);
        return Err(ApiError::NotRegistered);
    };

    if !account.active() {
        info!("OTP requested for inactive account: {}", account.code);
        return Err(ApiError::InactiveAccount);
    }

    // 2. Generate and store the challenge before dispatch
    let otp = generate_otp();
    deps.challenge_store.put(email, otp.clone()).await;

    // 3. Dispatch through the email capability
    let body = format!("Your OTP code is: {}", otp);
    if let Err(e) = deps.mailer.send(email, OTP_SUBJECT, &body).await {
        error!("Failed to send OTP: {}", e);
        return Err(ApiError::Delivery(e.to_string()));
    }

    info!("OTP sent successfully to {}", email);
    Ok(())
}

/// 6-digit code drawn uniformly from 100000..=999999
fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..100 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
