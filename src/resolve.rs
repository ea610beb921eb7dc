//! Field resolution: walk a decoded body along a [`FieldPath`] and follow the link at its leaf.
//!
//! Every segment but the last must name a nested object; the last must name a
//! string holding an HTTPS (or loopback) URL. Resolving `a.b.c` against a body is the same as
//! resolving `b.c` against `body["a"]`: the walk is a bounded loop over the
//! segments that ends in exactly one `GET`.

pub mod path;

pub use path::*;

// self
use crate::{
	_prelude::*,
	api::{ArtsyClient, descriptor::builder::is_secure_endpoint},
	auth::AccessToken,
	error::redacted_url,
	http::ApiHttpClient,
	json::{self, Body, ShapeError},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Walks `body` along `path` and returns the URL stored at the leaf.
///
/// Relative links are joined beneath `base`; plain-HTTP links to remote hosts are rejected.
pub fn locate_link(base: &Url, body: &Body, path: &FieldPath) -> Result<Url, ShapeError> {
	let (leaf, parents) = path.split_leaf();
	let mut current = body;
	let mut walked = String::new();

	for segment in parents {
		push_segment(&mut walked, segment);

		current = json::object_field(current, segment, &walked)?;
	}

	push_segment(&mut walked, leaf);

	let raw = json::str_field(current, leaf, &walked)?;

	parse_link(base, raw, &walked)
}

/// Locates the link at `path` in `body` and `GET`s it with `token`.
pub async fn resolve<C>(
	client: &ArtsyClient<C>,
	body: &Body,
	path: &FieldPath,
	token: Option<&AccessToken>,
) -> Result<Body>
where
	C: ?Sized + ApiHttpClient,
{
	const KIND: CallKind = CallKind::Follow;

	let span = CallSpan::new(KIND, "resolve");

	obs::record_call_outcome(KIND, CallOutcome::Attempt);

	let result = span
		.instrument(async move {
			let url = locate_link(&client.descriptor.endpoints.base, body, path)?;

			tracing::debug!(field = %path, "Following link.");

			client.request(Method::GET, token, url, &HeaderMap::new()).await
		})
		.await;

	obs::record_call_result(KIND, &result);

	result
}

fn push_segment(walked: &mut String, segment: &str) {
	if !walked.is_empty() {
		walked.push('.');
	}

	walked.push_str(segment);
}

fn parse_link(base: &Url, raw: &str, walked: &str) -> Result<Url, ShapeError> {
	let invalid =
		|source| ShapeError::InvalidUrl { path: walked.to_owned(), value: raw.to_owned(), source };
	let url = match Url::parse(raw) {
		Ok(url) => url,
		Err(url::ParseError::RelativeUrlWithoutBase) =>
			as_directory(base).join(raw).map_err(invalid)?,
		Err(e) => return Err(invalid(e)),
	};

	if !is_secure_endpoint(&url) {
		return Err(ShapeError::InsecureUrl { path: walked.to_owned(), url: redacted_url(&url) });
	}

	Ok(url)
}

/// Copy of `base` ending in `/`, so relative links resolve beneath its last segment.
fn as_directory(base: &Url) -> Url {
	let mut dir = base.clone();

	if let Ok(mut segments) = dir.path_segments_mut() {
		segments.pop_if_empty().push("");
	}

	dir
}
