pub mod cookies;
pub mod session;

pub use cookies::*;
pub use session::{Session, SessionStore};
