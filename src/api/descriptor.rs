//! API descriptor data structures shared by every call.
//!
//! The descriptor holds validated endpoint URLs and the header used to carry
//! access tokens, so the client never hard-codes where it talks to.

/// Builder API for assembling API descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Production API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.artsy.net/api";
/// Header carrying the access token on resource requests.
pub const DEFAULT_TOKEN_HEADER: &str = "X-Xapp-Token";
/// Path segments of the token endpoint, relative to the base URL.
pub const TOKEN_ENDPOINT_SEGMENTS: [&str; 2] = ["tokens", "xapp_token"];

/// Endpoint set declared by a descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
	/// Base URL that resource collections hang off.
	pub base: Url,
	/// Token endpoint used for the client-credentials exchange.
	pub token: Url,
}

/// Immutable API descriptor consumed by [`crate::api::ArtsyClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiDescriptor {
	/// Endpoint definitions.
	pub endpoints: ApiEndpoints,
	/// Header name used to send the access token.
	pub token_header: HeaderName,
}
impl ApiDescriptor {
	/// Creates a new builder rooted at `base`.
	pub fn builder(base: Url) -> ApiDescriptorBuilder {
		ApiDescriptorBuilder::new(base)
	}

	/// Descriptor for the production API.
	pub fn production() -> Result<Self, ConfigError> {
		Self::from_base_str(DEFAULT_API_BASE)
	}

	/// Parses `base` and builds a descriptor with default token endpoint and header.
	pub fn from_base_str(base: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(base)
			.map_err(|source| ConfigError::InvalidUrl { url: base.to_owned(), source })?;

		Ok(Self::builder(url).build()?)
	}

	/// Returns `base` extended by `segments`, each percent-encoded as one path segment.
	pub fn url_under_base<I, S>(&self, segments: I) -> Result<Url, DescriptorError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		join_segments(&self.endpoints.base, segments)
	}
}
