//! Scanner domain - code resolution and location assignment
//!
//! Responsibilities:
//! - Resolve a scanned inventory code to its item description and the most
//!   recently assigned storage location
//! - Lazily provision per-code template rows on first resolution
//! - Append location assignments to the history log

pub mod actions;
pub mod models;
