//! Application state - the explicit ownership root for the core services.
//!
//! Constructed once at startup from the persistent store; every command
//! handler mutates it and re-renders. Nothing here is global.

use std::sync::Arc;

use anyhow::Result;

use ripple_core::DomainError;
use ripple_core::domain::Theme;
use ripple_core::feed::PostRepository;
use ripple_core::ports::{Store, keys};
use ripple_core::session::SessionManager;
use ripple_infra::{InMemoryStore, JsonFileStore};

use crate::config::AppConfig;

/// Everything the command handlers operate on.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub feed: PostRepository,
    pub session: SessionManager,
    pub theme: Theme,
    /// Active search filter, applied at render time. `None` shows everything.
    pub filter: Option<String>,
    /// Data URI staged by `attach`, consumed by the next publish.
    pub pending_image: String,
}

impl AppState {
    /// Build the application state with the configured store backend.
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let store: Arc<dyn Store> = if config.ephemeral {
            tracing::info!("RIPPLE_EPHEMERAL set - state will not survive this run");
            Arc::new(InMemoryStore::new())
        } else {
            match JsonFileStore::open(&config.data_file).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::warn!(
                        "Cannot open {}: {}. Falling back to in-memory store.",
                        config.data_file.display(),
                        e
                    );
                    Arc::new(InMemoryStore::new())
                }
            }
        };

        let session = SessionManager::restore(store.clone()).await?;
        let theme = Theme::from_flag(store.get(keys::DARK_MODE).await?.as_deref());
        let mut feed = PostRepository::new(store.clone());
        feed.reload().await?;

        tracing::info!("Application state initialized");

        Ok(Self {
            store,
            feed,
            session,
            theme,
            filter: None,
            pending_image: String::new(),
        })
    }

    /// Flip the theme and persist the flag.
    pub async fn toggle_theme(&mut self) -> Result<Theme, DomainError> {
        self.theme = self.theme.toggled();
        self.store.set(keys::DARK_MODE, self.theme.flag()).await?;
        Ok(self.theme)
    }
}
