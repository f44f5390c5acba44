//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::auth::hash_password;
use crate::config::{RateCard, Settings};
use crate::error::AppError;
use crate::storage::Datastore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// The configured storage backend (memory or postgres)
    pub store: Datastore,

    /// Surcharge amounts for the price estimator
    pub rates: RateCard,

    /// Admin username for the session gate
    pub admin_username: String,

    /// bcrypt hash of the admin password; the plaintext is dropped at startup
    pub admin_password_hash: String,

    /// Secret key for session token signing
    pub session_secret: String,
}

impl AppState {
    pub fn new(store: Datastore, settings: &Settings) -> Result<Self, AppError> {
        let admin_password_hash = hash_password(&settings.admin.password)?;

        Ok(Self {
            store,
            rates: settings.rates,
            admin_username: settings.admin.username.clone(),
            admin_password_hash,
            session_secret: settings.session_secret.clone(),
        })
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
