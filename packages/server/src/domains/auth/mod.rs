//! Auth domain - email OTP login
//!
//! Responsibilities:
//! - Issue and verify one-time passcodes against registered accounts
//! - Sign the long-lived credential carried by the cookie layer

pub mod actions;
pub mod challenges;
pub mod jwt;
pub mod models;
pub mod types;

pub use challenges::ChallengeStore;
pub use jwt::{Claims, JwtService};
pub use types::AuthenticatedIdentity;
