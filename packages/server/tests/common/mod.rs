// Common test utilities
#![allow(dead_code)] // not every test binary uses every helper

pub mod fixtures;
pub mod harness;
pub mod mailer;

pub use harness::TestHarness;
pub use mailer::{MockMailer, SentEmail};
