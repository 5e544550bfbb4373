//! Application state shared by front-end callers.
//!
//! This is the composition root: the store handle is constructed once and
//! injected into the repositories, rather than living as ambient global
//! state.

use crate::data::{AdRepository, AuthRepository, Store};
use crate::infra::app_config::{self, AppConfig};
use crate::infra::suggest::SuggestionClient;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<RwLock<AppConfig>>,
}

impl AppState {
    /// Open the default on-disk store and load the saved config.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_store(Arc::new(Store::open()?)))
    }

    /// Build state around an injected store. Tests pass in-memory instances.
    pub fn with_store(store: Arc<Store>) -> Self {
        Self {
            store,
            config: Arc::new(RwLock::new(app_config::load_config())),
        }
    }

    pub fn auth(&self) -> AuthRepository {
        AuthRepository::new(self.store.clone())
    }

    pub fn ads(&self) -> AdRepository {
        AdRepository::new(self.store.clone())
    }

    pub fn suggestions(&self) -> SuggestionClient {
        SuggestionClient::from_config(&self.config.read())
    }
}
