//! Auth domain data types

/// Identity established after a successful OTP verification
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub email: String,
    pub name: String,
}
