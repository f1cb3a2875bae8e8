//! LINE Notify client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::LineConfig;
use crate::error::{Error, Result};
use crate::models::NotificationBatch;
use crate::notify::PushService;

/// Client for the LINE Notify push endpoint.
///
/// One instance is built at startup and shared across requests; the inner
/// `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct LineNotify {
    client: Client,
    api_url: String,
}

impl LineNotify {
    /// Create a client from the `[line]` configuration section.
    pub fn new(config: &LineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl PushService for LineNotify {
    async fn push(&self, batch: &NotificationBatch) -> Result<Value> {
        // LINE Notify takes a single `message` form field. Each formatted
        // message starts with a newline, so plain concatenation keeps the
        // alerts visually separated.
        let message = batch.messages().concat();
        let form = [("message", message.as_str())];

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(batch.token().as_str())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "LINE Notify rejected the push");
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = %status, "LINE Notify accepted the push");
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryToken;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config(api_url: String) -> LineConfig {
        LineConfig {
            api_url,
            default_token: None,
            timeout_secs: 5,
        }
    }

    fn create_test_batch(messages: &[&str]) -> NotificationBatch {
        NotificationBatch::new(
            messages.iter().map(ToString::to_string).collect(),
            DeliveryToken::new("test-token"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_push_sends_one_form_post_with_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/notify"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header(
                "Content-Type",
                "application/x-www-form-urlencoded",
            ))
            .and(body_string("message=%0AAlert+Name%3A+Test+Alert"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let notifier =
            LineNotify::new(&create_test_config(format!("{}/api/notify", server.uri()))).unwrap();

        let response = notifier
            .push(&create_test_batch(&["\nAlert Name: Test Alert"]))
            .await
            .unwrap();

        assert_eq!(response, json!({"status": 200, "message": "ok"}));
    }

    #[tokio::test]
    async fn test_push_concatenates_messages_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string("message=%0AStatus%3A+first%0AStatus%3A+second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = LineNotify::new(&create_test_config(server.uri())).unwrap();

        notifier
            .push(&create_test_batch(&[
                "\nStatus: first",
                "\nStatus: second",
            ]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_push_turns_rejection_into_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid access token"))
            .mount(&server)
            .await;

        let notifier = LineNotify::new(&create_test_config(server.uri())).unwrap();

        let err = notifier
            .push(&create_test_batch(&["\nStatus: Firing"]))
            .await
            .unwrap_err();

        match err {
            Error::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid access token");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_push_propagates_invalid_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let notifier = LineNotify::new(&create_test_config(server.uri())).unwrap();

        let err = notifier
            .push(&create_test_batch(&["\nStatus: Firing"]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(_)));
    }
}
