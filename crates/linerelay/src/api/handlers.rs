//! API handlers for the webhook relay

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::auth;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::message::build_messages;
use crate::models::{decode_alerts, extract_property, NotificationBatch};
use crate::notify::PushService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Push API client
    pub push: Arc<dyn PushService>,
    /// Prometheus exposition handle, absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Receive an Alertmanager webhook batch and forward it to LINE Notify.
///
/// The token check runs first: a request that can never be delivered is
/// rejected before its body is inspected. A missing or syntactically invalid
/// body is treated the same as a body without alerts.
pub async fn notify(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>> {
    info!("alert webhook received");
    let payload = body.ok().map(|Json(value)| value);
    if let Some(payload) = &payload {
        debug!(payload = %payload, "webhook payload");
    }

    let token = auth::resolve_token(
        bearer.as_ref().map(|auth| auth.token()),
        state.config.line.default_token.as_deref(),
    )?;

    let alerts = match extract_property(payload.as_ref(), "alerts") {
        Some(value) => decode_alerts(value).map_err(|e| {
            debug!(error = %e, "alerts field failed to decode");
            Error::NoAlerts
        })?,
        None => return Err(Error::NoAlerts),
    };

    let messages = build_messages(&alerts);
    let batch = NotificationBatch::new(messages, token).ok_or(Error::NoMessages)?;

    let response = state.push.push(&batch).await?;
    info!(
        alerts = alerts.len(),
        messages = batch.messages().len(),
        "alerts forwarded to LINE Notify"
    );

    Ok(Json(response))
}

/// Prometheus exposition endpoint
pub async fn metrics(
    State(state): State<AppState>,
) -> std::result::Result<String, (StatusCode, String)> {
    let handle = state.metrics.ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "metrics recorder not installed".to_string(),
    ))?;

    Ok(handle.render())
}

/// Landing page describing the relay
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
