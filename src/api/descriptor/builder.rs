// std
use std::net::IpAddr;
// crates.io
use url::Host;
// self
use crate::{
	_prelude::*,
	api::{ApiDescriptor, ApiEndpoints, DEFAULT_TOKEN_HEADER, TOKEN_ENDPOINT_SEGMENTS},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum DescriptorError {
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Base URL cannot have path segments appended (e.g. `mailto:`).
	#[error("Base URL cannot be extended with path segments: {url}.")]
	CannotBeABase {
		/// Offending URL.
		url: String,
	},
	/// Base URL carries a query string or fragment.
	#[error("Base URL must not carry a query or fragment: {url}.")]
	BaseWithQuery {
		/// Offending URL.
		url: String,
	},
	/// Token header name is not a valid HTTP header name.
	#[error("Token header `{name}` is not a valid HTTP header name.")]
	InvalidTokenHeader {
		/// Name that was supplied.
		name: String,
	},
}

/// Builder for [`ApiDescriptor`] values.
#[derive(Debug)]
pub struct ApiDescriptorBuilder {
	/// Base URL resource collections hang off.
	pub base: Url,
	/// Token endpoint; derived from the base when unset.
	pub token_endpoint: Option<Url>,
	/// Header name used to send access tokens.
	pub token_header: String,
}
impl ApiDescriptorBuilder {
	/// Creates a new builder rooted at `base`.
	pub fn new(base: Url) -> Self {
		Self { base, token_endpoint: None, token_header: DEFAULT_TOKEN_HEADER.into() }
	}

	/// Overrides the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Overrides the token header name.
	pub fn token_header(mut self, name: impl Into<String>) -> Self {
		self.token_header = name.into();

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ApiDescriptor, DescriptorError> {
		if self.base.query().is_some() || self.base.fragment().is_some() {
			return Err(DescriptorError::BaseWithQuery { url: self.base.to_string() });
		}

		let token = match self.token_endpoint {
			Some(url) => url,
			None => join_segments(&self.base, TOKEN_ENDPOINT_SEGMENTS)?,
		};
		let token_header = HeaderName::from_bytes(self.token_header.as_bytes())
			.map_err(|_| DescriptorError::InvalidTokenHeader { name: self.token_header.clone() })?;
		let descriptor =
			ApiDescriptor { endpoints: ApiEndpoints { base: self.base, token }, token_header };

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ApiDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), DescriptorError> {
		if self.endpoints.base.cannot_be_a_base() {
			return Err(DescriptorError::CannotBeABase { url: self.endpoints.base.to_string() });
		}

		validate_endpoint("base", &self.endpoints.base)?;
		validate_endpoint("token", &self.endpoints.token)?;

		Ok(())
	}
}

/// Appends `segments` to `base`, replacing a trailing empty segment.
pub(crate) fn join_segments<I, S>(base: &Url, segments: I) -> Result<Url, DescriptorError>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut url = base.clone();

	url.path_segments_mut()
		.map_err(|_| DescriptorError::CannotBeABase { url: base.to_string() })?
		.pop_if_empty()
		.extend(segments);

	Ok(url)
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), DescriptorError> {
	if is_secure_endpoint(url) {
		Ok(())
	} else {
		Err(DescriptorError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

/// Returns `true` for HTTPS URLs and for any URL that targets a loopback host.
pub(crate) fn is_secure_endpoint(url: &Url) -> bool {
	url.scheme() == "https" || is_loopback(url)
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
