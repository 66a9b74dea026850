//! Webhook registration and fire-and-forget delivery.
//!
//! Registrations are process-local: created via `POST /webhooks`, never
//! updated, and discarded on restart. Delivery is a detached unit of
//! work per target - the triggering request never waits on, observes, or
//! retries a delivery.

use std::sync::Mutex;

use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Event emitted after a product is created.
pub const EVENT_PRODUCT_CREATED: &str = "productos.created";
/// Event emitted after a product is updated (PUT, PATCH or restore).
pub const EVENT_PRODUCT_UPDATED: &str = "productos.updated";
/// Event emitted after a product is deleted (hard or soft).
pub const EVENT_PRODUCT_DELETED: &str = "productos.deleted";

/// A registered webhook target.
#[derive(Debug, Clone)]
pub struct WebhookRegistration {
    /// Server-assigned registration id.
    pub id: Uuid,
    /// Delivery target. Must be an http(s) URL.
    pub url: Url,
    /// Subscribed event names. Non-empty.
    pub events: Vec<String>,
}

/// Holds webhook registrations and dispatches event notifications.
pub struct WebhookHub {
    registrations: Mutex<Vec<WebhookRegistration>>,
    client: reqwest::Client,
}

impl WebhookHub {
    /// Creates an empty hub with a shared HTTP client.
    pub fn new() -> Self {
        WebhookHub {
            registrations: Mutex::new(Vec::new()),
            client: reqwest::Client::new(),
        }
    }

    /// Validates and stores a registration.
    ///
    /// # Errors
    ///
    /// * `ApiError::InvalidInput` - URL not http(s), or no events given
    pub fn register(&self, url: &str, events: Vec<String>) -> ApiResult<WebhookRegistration> {
        let url = Url::parse(url)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .ok_or_else(|| ApiError::invalid_input("Datos inválidos"))?;

        let events: Vec<String> = events
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if events.is_empty() {
            return Err(ApiError::invalid_input("Datos inválidos"));
        }

        let registration = WebhookRegistration {
            id: Uuid::new_v4(),
            url,
            events,
        };

        self.lock().push(registration.clone());
        debug!(url = %registration.url, id = %registration.id, "Webhook agregado");
        Ok(registration)
    }

    /// Number of stored registrations.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Notifies every registration subscribed to `event`.
    ///
    /// Each delivery is spawned as a detached task posting
    /// `{"event": ..., "data": ...}`. Failures are logged and never
    /// propagated to the caller; there are no retries.
    pub fn notify(&self, event: &str, data: Value) {
        let targets: Vec<Url> = self
            .lock()
            .iter()
            .filter(|hook| hook.events.iter().any(|e| e == event))
            .map(|hook| hook.url.clone())
            .collect();

        if targets.is_empty() {
            return;
        }

        let payload = json!({ "event": event, "data": data });
        for url in targets {
            let client = self.client.clone();
            let payload = payload.clone();
            let event = event.to_string();
            tokio::spawn(async move {
                match client.post(url.clone()).json(&payload).send().await {
                    Ok(response) => {
                        debug!(url = %url, event = %event, status = %response.status(), "Webhook entregado");
                    }
                    Err(error) => {
                        warn!(url = %url, event = %event, %error, "Error enviando webhook");
                    }
                }
            });
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<WebhookRegistration>> {
        self.registrations.lock().expect("webhook lock poisoned")
    }
}

impl Default for WebhookHub {
    fn default() -> Self {
        Self::new()
    }
}
