//! Outbound notification types

use std::fmt;

/// Credential authorizing a push to one LINE Notify channel.
///
/// Either the caller's bearer token or the configured fallback. The token is
/// a secret, so `Debug` renders a placeholder instead of the value.
#[derive(Clone, PartialEq, Eq)]
pub struct DeliveryToken(String);

impl DeliveryToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token value, for building the Authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeliveryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeliveryToken(***)")
    }
}

/// The formatted messages for one dispatch, plus the token authorizing it.
///
/// Construction refuses an empty message list, so holding a batch guarantees
/// there is something to send.
#[derive(Debug, Clone)]
pub struct NotificationBatch {
    messages: Vec<String>,
    token: DeliveryToken,
}

impl NotificationBatch {
    /// Build a batch, or `None` when `messages` is empty.
    pub fn new(messages: Vec<String>, token: DeliveryToken) -> Option<Self> {
        if messages.is_empty() {
            return None;
        }
        Some(Self { messages, token })
    }

    /// Messages in their original alert order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Token authorizing the dispatch.
    pub fn token(&self) -> &DeliveryToken {
        &self.token
    }
}
