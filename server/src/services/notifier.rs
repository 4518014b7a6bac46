//! Reservation notification webhook
//!
//! Fire-and-forget POSTs on reservation events. A failed delivery is
//! logged and never fails the request that triggered it.

use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize)]
pub struct ReservationEvent {
    /// "created" | "status_changed" | "extended"
    pub event: String,
    pub reservation_id: String,
    pub status: String,
}

#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Deliver an event in the background
    pub fn notify(&self, event: ReservationEvent) {
        let Some(url) = self.webhook_url.clone() else {
            debug!(event = %event.event, "Notifier disabled, skipping");
            return;
        };

        let client = self.client.clone();
        tokio::spawn(async move {
            match client.post(&url).json(&event).send().await {
                Ok(resp) if resp.status().is_success() => {
                    debug!(event = %event.event, id = %event.reservation_id, "Notification delivered");
                }
                Ok(resp) => {
                    warn!(status = %resp.status(), "Notification webhook rejected event");
                }
                Err(e) => {
                    warn!(error = %e, "Notification webhook unreachable");
                }
            }
        });
    }
}
