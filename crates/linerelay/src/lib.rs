//! # LineRelay
//!
//! Webhook relay that forwards Prometheus Alertmanager alerts to LINE Notify.
//!
//! Alertmanager posts alert batches to `/notify`; each alert is formatted
//! into a short human-readable message with a severity marker, and the batch
//! is pushed to the LINE Notify API in a single call. The push is authorized
//! by the caller's bearer token, falling back to a configured default.
//!
//! ## Architecture
//!
//! - **API**: axum HTTP server with the webhook, health, and metrics routes
//! - **Message**: alert-to-text formatting with severity markers
//! - **Notify**: LINE Notify client behind the [`notify::PushService`] trait
//!
//! ## Quick Start
//!
//! ```bash
//! # Relay with a fallback token
//! LINERELAY__LINE__DEFAULT_TOKEN=xxxx linerelay
//!
//! # Point Alertmanager's webhook receiver at http://host:8080/notify
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod api;
pub mod config;
pub mod error;
pub mod message;
pub mod models;
pub mod notify;

pub use config::Config;
pub use error::{Error, Result};
