//! Notification delivery to the LINE Notify push API

mod line;

pub use line::LineNotify;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::NotificationBatch;

/// Boundary to the external push API.
///
/// Handlers only see this trait, so tests can swap in a scripted
/// implementation instead of a live HTTP client.
#[async_trait]
pub trait PushService: Send + Sync {
    /// Deliver one batch as a single outbound call and return the API's
    /// parsed response body.
    async fn push(&self, batch: &NotificationBatch) -> Result<Value>;
}
