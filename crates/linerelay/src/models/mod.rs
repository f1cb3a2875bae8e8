//! Data models for LineRelay

pub mod alert;
pub mod notification;

pub use alert::{decode_alerts, extract_property, Alert};
pub use notification::{DeliveryToken, NotificationBatch};
