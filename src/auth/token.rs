//! Access tokens minted by the token endpoint.

// self
use crate::{_prelude::*, auth::Secret};

/// Access token held for the lifetime of one run; never cached or refreshed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
	/// Token value sent in the token header.
	pub secret: Secret,
	/// Token type reported by the endpoint (`xapp_token` for app tokens).
	pub kind: Option<String>,
	/// Expiry instant reported by the endpoint, when present and parseable.
	pub expires_at: Option<OffsetDateTime>,
}
impl AccessToken {
	/// Wraps a bare token value without type or expiry metadata.
	pub fn new(value: impl Into<String>) -> Self {
		Self { secret: Secret::new(value), kind: None, expires_at: None }
	}

	/// Returns `true` when the token carries no value and must not be sent.
	pub fn is_empty(&self) -> bool {
		self.secret.is_empty()
	}
}
