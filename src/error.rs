//! Crate-level error types shared by the client, the field resolver, and the CLI.

// self
use crate::{_prelude::*, api::DescriptorError, json::JsonKind};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Field path does not match the shape of the response.
	#[error(transparent)]
	Shape(#[from] crate::json::ShapeError),

	/// API answered with a non-success HTTP status.
	#[error("API returned HTTP {status} for {url}: {message}.")]
	Api {
		/// HTTP status code returned by the API.
		status: u16,
		/// Requested URL with the query string stripped.
		url: String,
		/// Server-supplied message or a preview of the body.
		message: String,
	},
}

/// Configuration and validation failures raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Required credentials are absent from the environment.
	#[error("Please set the ARTSY_CLIENT_ID and ARTSY_CLIENT_SECRET environment variables (missing: {missing}).")]
	MissingCredentials {
		/// Comma-separated names of the unset variables.
		missing: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Async runtime could not be started.
	#[error("Async runtime could not be started.")]
	Runtime {
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// A configured URL cannot be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Raw URL string.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// API descriptor failed validation.
	#[error(transparent)]
	Descriptor(#[from] DescriptorError),
	/// A header value cannot be encoded for the wire.
	#[error("Value for header `{name}` contains characters that cannot be sent.")]
	InvalidHeaderValue {
		/// Header the value was meant for.
		name: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {url}.")]
	Network {
		/// URL that was being requested.
		url: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error for the given URL.
	pub fn network(url: &Url, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { url: redacted_url(url), source: Box::new(src) }
	}
}

/// Failures decoding or rendering response bodies.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body is not valid JSON or misses a required field.
	#[error("Response from {url} could not be decoded at `{path}`.")]
	Json {
		/// URL that produced the body.
		url: String,
		/// JSON path where decoding stopped.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Body is valid JSON but its root is not an object.
	#[error("Response from {url} is a JSON {found}, expected an object.")]
	NotAnObject {
		/// URL that produced the body.
		url: String,
		/// Kind of the root value.
		found: JsonKind,
	},
	/// Final body could not be rendered back to JSON text.
	#[error("Response could not be rendered as JSON.")]
	Render {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Renders a URL for error messages without its query string, which may carry credentials.
pub(crate) fn redacted_url(url: &Url) -> String {
	let mut view = url.clone();

	view.set_query(None);
	view.set_fragment(None);

	view.to_string()
}
