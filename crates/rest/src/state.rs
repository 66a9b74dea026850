//! Application state for the Mercado REST API.
//!
//! Shared state available to all request handlers: the storage backend,
//! the server configuration, and the webhook hub.

use std::sync::Arc;

use mercado_store::ProductStore;

use crate::config::ServerConfig;
use crate::webhooks::WebhookHub;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`ProductStore`])
///
/// # Example
///
/// ```rust,ignore
/// use mercado_rest::{AppState, ServerConfig};
/// use mercado_store::MemoryStore;
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,

    /// Webhook registrations and delivery.
    webhooks: Arc<WebhookHub>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to
// be Clone itself.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
            webhooks: Arc::clone(&self.webhooks),
        }
    }
}

impl<S: ProductStore> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
            webhooks: Arc::new(WebhookHub::new()),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns a reference to the webhook hub.
    pub fn webhooks(&self) -> &WebhookHub {
        &self.webhooks
    }

    /// Returns the default page size for product listings.
    pub fn default_page_size(&self) -> u64 {
        self.config.default_page_size
    }

    /// Returns the maximum page size for product listings.
    pub fn max_page_size(&self) -> u64 {
        self.config.max_page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercado_store::MemoryStore;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
        assert_eq!(state.storage().backend_name(), "memory");
        assert_eq!(state.default_page_size(), 10);
    }

    #[test]
    fn test_app_state_clone_shares_storage() {
        let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.storage, &cloned.storage));
        assert!(Arc::ptr_eq(&state.webhooks, &cloned.webhooks));
    }

    #[test]
    fn test_app_state_config_access() {
        let config = ServerConfig {
            default_page_size: 25,
            max_page_size: 250,
            ..ServerConfig::default()
        };
        let state = AppState::new(Arc::new(MemoryStore::new()), config);
        assert_eq!(state.default_page_size(), 25);
        assert_eq!(state.max_page_size(), 250);
    }
}
