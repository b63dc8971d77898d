// Stockroom Scanner - API Core
//
// Backend for the warehouse barcode-scanner tool: OTP login over email,
// code-to-location resolution, and an append-only location assignment log.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
