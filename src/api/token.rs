//! Client-credentials exchange against the token endpoint.

// crates.io
use time::format_description::well_known::Rfc3339;
// self
use crate::{
	_prelude::*,
	api::ArtsyClient,
	auth::{AccessToken, Credentials, Secret},
	http::ApiHttpClient,
	json,
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Token endpoint payload; only `token` is required.
#[derive(Deserialize)]
struct TokenResponse {
	token: String,
	#[serde(rename = "type", default)]
	kind: Option<String>,
	#[serde(default)]
	expires_at: Option<String>,
}

impl<C> ArtsyClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Exchanges `credentials` for an access token.
	///
	/// The credentials travel as query parameters of a `POST` to the token
	/// endpoint. A body without a string `token` field is a decode error.
	pub async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken> {
		const KIND: CallKind = CallKind::Token;

		let span = CallSpan::new(KIND, "acquire_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.token_url(credentials);
				let bytes = self.send(Method::POST, None, &url, &HeaderMap::new()).await?;
				let response: TokenResponse = json::decode(&url, &bytes)?;
				let token = AccessToken {
					secret: Secret::new(response.token),
					kind: response.kind,
					expires_at: response.expires_at.as_deref().and_then(parse_expiry),
				};

				tracing::debug!(kind = ?token.kind, expires_at = ?token.expires_at, "Acquired access token.");

				Ok(token)
			})
			.await;

		obs::record_call_result(KIND, &result);

		result
	}

	/// Token endpoint URL with the credentials appended, parameters sorted by key.
	pub fn token_url(&self, credentials: &Credentials) -> Url {
		let mut url = self.descriptor.endpoints.token.clone();

		url.query_pairs_mut().clear().extend_pairs(credentials.query_params());

		url
	}
}

fn parse_expiry(raw: &str) -> Option<OffsetDateTime> {
	match OffsetDateTime::parse(raw, &Rfc3339) {
		Ok(instant) => Some(instant),
		Err(e) => {
			tracing::warn!(raw, error = %e, "Ignoring unparseable token expiry.");

			None
		},
	}
}
