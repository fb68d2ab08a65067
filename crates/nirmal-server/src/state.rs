//! Shared application state.

use nirmal_core::AppConfig;
use nirmal_store::{ComplaintStore, UserStore};
use std::sync::Arc;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    users: UserStore,
    complaints: ComplaintStore,
}

impl AppState {
    /// Build the stores described by `config`.
    pub fn new(config: &AppConfig) -> Self {
        Self::from_stores(
            UserStore::new(
                config.storage.users_file.clone(),
                config.auth.officer_secret.clone(),
            ),
            ComplaintStore::new(
                config.storage.complaints_file.clone(),
                config.storage.id_strategy,
            ),
        )
    }

    pub fn from_stores(users: UserStore, complaints: ComplaintStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { users, complaints }),
        }
    }

    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    pub fn complaints(&self) -> &ComplaintStore {
        &self.inner.complaints
    }
}
