//! Delivery token resolution for inbound webhook requests

use crate::error::{Error, Result};
use crate::models::DeliveryToken;

/// Pick the token that authorizes the outbound push.
///
/// A non-empty bearer token from the request wins; otherwise the configured
/// default token is used. With neither, the caller is unauthorized. Empty
/// strings count as absent on both sides.
pub fn resolve_token(bearer: Option<&str>, default_token: Option<&str>) -> Result<DeliveryToken> {
    if let Some(token) = bearer.filter(|t| !t.is_empty()) {
        return Ok(DeliveryToken::new(token));
    }

    if let Some(token) = default_token.filter(|t| !t.is_empty()) {
        return Ok(DeliveryToken::new(token));
    }

    Err(Error::MissingToken)
}
