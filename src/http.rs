//! Transport primitives for API calls.
//!
//! [`ApiHttpClient`] is the client's only dependency on an HTTP stack. It takes a
//! fully assembled [`ApiRequest`] and hands back the raw status and body; status
//! interpretation and JSON decoding stay in [`crate::api`] so alternative
//! transports (test fakes, recording proxies) only need to move bytes.

// self
use crate::{_prelude::*, error::{ConfigError, TransportError}};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// Outbound request assembled by the client.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute target URL, including any query string.
	pub url: Url,
	/// Headers to send, token header included.
	pub headers: HeaderMap,
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status returned by the server.
	pub status: StatusCode,
	/// Full response body.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP transports capable of executing API requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be
/// shared behind an `Arc` by every call of a run.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and reads the full body. Non-2xx statuses are not errors at this layer.
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(ReqwestClient);
impl ReqwestHttpClient {
	/// Builds a client that identifies itself with [`ReqwestHttpClient::user_agent`].
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().user_agent(Self::user_agent()).build()?;

		Ok(Self(client))
	}

	/// User agent sent with every request.
	pub fn user_agent() -> &'static str {
		concat!("art-detective/", env!("CARGO_PKG_VERSION"))
	}
}
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_> {
		Box::pin(async move {
			let ApiRequest { method, url, headers } = request;
			let response = self
				.0
				.request(method, url.clone())
				.headers(headers)
				.send()
				.await
				.map_err(|e| TransportError::network(&url, e))?;
			let status = response.status();
			let body = response.bytes().await.map_err(|e| TransportError::network(&url, e))?;

			Ok(ApiResponse { status, body: body.to_vec() })
		})
	}
}


#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn user_agent_carries_crate_version() {
		assert_eq!(
			ReqwestHttpClient::user_agent(),
			format!("art-detective/{}", env!("CARGO_PKG_VERSION"))
		);
	}
}
