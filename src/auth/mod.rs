//! Session gate for the admin back-office.
//!
//! A single fixed credential pair from configuration, bcrypt-verified at
//! login, exchanged for a signed session token. This gates the admin views;
//! it is deliberately not multi-user authentication.

mod middleware;
mod password;
mod session;

pub use middleware::require_session;
pub use password::{hash_password, verify_password};
pub use session::{create_session_token, decode_session_token, SessionClaims, SESSION_TTL_HOURS};
