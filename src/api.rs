//! API client: token exchange, resource fetches, and the generic request primitive.
//!
//! [`ArtsyClient`] owns the transport and the [`ApiDescriptor`]. Every call goes
//! through [`ArtsyClient::request`], which attaches the token header when a
//! non-empty token is supplied, merges caller headers on top, rejects non-2xx
//! statuses with [`Error::Api`], and decodes the body into a [`Body`].

pub mod descriptor;

mod resource;
mod token;

pub use descriptor::*;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, redacted_url},
	http::{ApiHttpClient, ApiRequest, ReqwestHttpClient},
	json::{self, Body},
};

const ERROR_PREVIEW_CHARS: usize = 200;

/// Client bound to one API descriptor and one transport.
#[derive(Clone)]
pub struct ArtsyClient<C = ReqwestHttpClient>
where
	C: ?Sized + ApiHttpClient,
{
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Endpoints and token header.
	pub descriptor: ApiDescriptor,
}
impl<C> ArtsyClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(descriptor: ApiDescriptor, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), descriptor }
	}

	/// Sends one request and decodes the body as a JSON object.
	///
	/// The token header is set when `token` is present and non-empty; `headers`
	/// are applied afterwards and replace same-named entries.
	pub async fn request(
		&self,
		method: Method,
		token: Option<&AccessToken>,
		url: Url,
		headers: &HeaderMap,
	) -> Result<Body> {
		let bytes = self.send(method, token, &url, headers).await?;

		Ok(json::decode_object(&url, &bytes)?)
	}

	/// Sends one request and returns the raw body of a 2xx response.
	pub(crate) async fn send(
		&self,
		method: Method,
		token: Option<&AccessToken>,
		url: &Url,
		extra_headers: &HeaderMap,
	) -> Result<Vec<u8>> {
		let mut headers = HeaderMap::new();

		if let Some(value) = self.token_header_value(token)? {
			headers.insert(self.descriptor.token_header.clone(), value);
		}
		for (name, value) in extra_headers {
			headers.insert(name.clone(), value.clone());
		}

		tracing::debug!(%method, url = %redacted_url(url), "Sending API request.");

		let response =
			self.http_client.execute(ApiRequest { method, url: url.clone(), headers }).await?;

		if !response.status.is_success() {
			return Err(Error::Api {
				status: response.status.as_u16(),
				url: redacted_url(url),
				message: error_message(response.status, &response.body),
			});
		}

		Ok(response.body)
	}

	fn token_header_value(&self, token: Option<&AccessToken>) -> Result<Option<HeaderValue>> {
		let Some(token) = token.filter(|token| !token.is_empty()) else {
			return Ok(None);
		};
		let mut value = HeaderValue::from_str(token.secret.expose()).map_err(|_| {
			ConfigError::InvalidHeaderValue { name: self.descriptor.token_header.to_string() }
		})?;

		value.set_sensitive(true);

		Ok(Some(value))
	}
}
impl ArtsyClient<ReqwestHttpClient> {
	/// Creates a client for `descriptor` backed by a fresh reqwest transport.
	pub fn new(descriptor: ApiDescriptor) -> Result<Self> {
		Ok(Self::with_http_client(descriptor, ReqwestHttpClient::new()?))
	}
}
impl<C> Debug for ArtsyClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ArtsyClient").field("descriptor", &self.descriptor).finish()
	}
}

/// Picks the server's `message` (or `error`) field, falling back to a body preview.
///
/// Trailing periods are dropped; [`Error::Api`] adds its own.
fn error_message(status: StatusCode, body: &[u8]) -> String {
	let raw = server_message(body).unwrap_or_else(|| {
		String::from_utf8_lossy(body).trim().chars().take(ERROR_PREVIEW_CHARS).collect()
	});
	let message = raw.trim().trim_end_matches('.').trim_end();

	if message.is_empty() {
		return status.canonical_reason().unwrap_or("no message").to_owned();
	}

	message.to_owned()
}

fn server_message(body: &[u8]) -> Option<String> {
	let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
		return None;
	};

	["message", "error"].into_iter().find_map(|key| match map.get(key) {
		Some(Value::String(message)) => Some(message.clone()),
		_ => None,
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::fake::FakeHttpClient;

	const BASE: &str = "https://api.artsy.net/api";

	fn client(fake: FakeHttpClient) -> ArtsyClient<FakeHttpClient> {
		let descriptor = ApiDescriptor::from_base_str(BASE).expect("Failed to build descriptor.");

		ArtsyClient::with_http_client(descriptor, fake)
	}

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse request URL.")
	}

	#[tokio::test]
	async fn request_sets_token_header_and_merges_extra_headers() {
		let target = "https://api.artsy.net/api/artists/4d8b92b34eb68a1b2c0003f4";
		let client = client(FakeHttpClient::default().route(target, 200, "{\"name\":\"Andy Warhol\"}"));
		let mut extra = HeaderMap::new();

		extra.insert("accept", HeaderValue::from_static("application/vnd.artsy-v2+json"));

		let body = client
			.request(Method::GET, Some(&AccessToken::new("tok")), url(target), &extra)
			.await
			.expect("Routed request should succeed.");

		assert_eq!(body.get("name"), Some(&Value::from("Andy Warhol")));

		let recorded = client.http_client.recorded();
		let sent = &recorded[0].headers;

		assert_eq!(sent.get("x-xapp-token").and_then(|v| v.to_str().ok()), Some("tok"));
		assert_eq!(
			sent.get("accept").and_then(|v| v.to_str().ok()),
			Some("application/vnd.artsy-v2+json")
		);
	}

	#[tokio::test]
	async fn empty_or_absent_token_sends_no_header() {
		let target = "https://api.artsy.net/api/artworks";
		let client = client(FakeHttpClient::default().route(target, 200, "{}"));

		client
			.request(Method::GET, None, url(target), &HeaderMap::new())
			.await
			.expect("Request without token should succeed.");
		client
			.request(Method::GET, Some(&AccessToken::new("")), url(target), &HeaderMap::new())
			.await
			.expect("Request with empty token should succeed.");

		for request in client.http_client.recorded() {
			assert!(request.headers.get("x-xapp-token").is_none());
		}
	}

	#[tokio::test]
	async fn non_success_status_surfaces_server_message() {
		let target = "https://api.artsy.net/api/artists/missing";
		let client = client(FakeHttpClient::default().route(
			target,
			404,
			"{\"type\":\"error\",\"message\":\"Artist Not Found\"}",
		));
		let err = client
			.request(Method::GET, None, url(target), &HeaderMap::new())
			.await
			.expect_err("404 should fail.");

		match err {
			Error::Api { status, message, .. } => {
				assert_eq!(status, 404);
				assert_eq!(message, "Artist Not Found");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn error_message_falls_back_to_body_preview_and_reason() {
		assert_eq!(error_message(StatusCode::BAD_GATEWAY, b"upstream down"), "upstream down");
		assert_eq!(error_message(StatusCode::BAD_GATEWAY, b""), "Bad Gateway");
		assert_eq!(error_message(StatusCode::UNAUTHORIZED, b"{\"error\":\"Unauthorized\"}"), "Unauthorized");
		assert_eq!(error_message(StatusCode::NOT_FOUND, b"{\"message\":\"...\"}"), "Not Found");
	}

	#[tokio::test]
	async fn api_error_message_ends_with_a_single_period() {
		let target = "https://api.artsy.net/api/artworks/missing";
		let client = client(FakeHttpClient::default().route(
			target,
			404,
			"{\"type\":\"error\",\"message\":\"Artwork not found.\"}",
		));
		let err = client
			.request(Method::GET, None, url(target), &HeaderMap::new())
			.await
			.expect_err("404 should fail.");

		assert_eq!(
			err.to_string(),
			"API returned HTTP 404 for https://api.artsy.net/api/artworks/missing: Artwork not found."
		);
	}
}
