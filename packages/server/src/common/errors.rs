use thiserror::Error;

/// User-visible error taxonomy for the scanner API
///
/// Every variant's Display text goes to the client as the failure message.
/// `Store` carries the raw database error; route handlers surface it in the
/// response `detail` field (see DESIGN.md on this known leak).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Email is not registered")]
    NotRegistered,

    #[error("Account is inactive")]
    InactiveAccount,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid or expired OTP")]
    InvalidOtp,

    #[error("Unknown location: {0}")]
    LocationNotFound(String),

    #[error("Failed to send OTP: {0}")]
    Delivery(String),

    #[error("Database error: {0}")]
    Store(#[from] anyhow::Error),
}
