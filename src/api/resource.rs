//! Collection and single-resource fetches.

// self
use crate::{
	_prelude::*,
	api::{ArtsyClient, DescriptorError},
	auth::AccessToken,
	error::ConfigError,
	http::ApiHttpClient,
	json::Body,
	obs::{self, CallKind, CallOutcome, CallSpan},
	subject::Subject,
};

impl<C> ArtsyClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches `<base>/<subject>/<id>`, or the whole collection when `id` is absent or empty.
	pub async fn fetch_resource(
		&self,
		token: Option<&AccessToken>,
		subject: Subject,
		id: Option<&str>,
	) -> Result<Body> {
		const KIND: CallKind = CallKind::Resource;

		let span = CallSpan::new(KIND, "fetch_resource");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.resource_url(subject, id).map_err(ConfigError::from)?;

				self.request(Method::GET, token, url, &HeaderMap::new()).await
			})
			.await;

		obs::record_call_result(KIND, &result);

		result
	}

	/// Builds the resource URL; the id is percent-encoded as a single path segment.
	pub fn resource_url(&self, subject: Subject, id: Option<&str>) -> Result<Url, DescriptorError> {
		let id = id.filter(|id| !id.is_empty());

		self.descriptor.url_under_base(std::iter::once(subject.as_str()).chain(id))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{api::ApiDescriptor, http::fake::FakeHttpClient};

	fn client(fake: FakeHttpClient) -> ArtsyClient<FakeHttpClient> {
		let descriptor =
			ApiDescriptor::production().expect("Failed to build production descriptor.");

		ArtsyClient::with_http_client(descriptor, fake)
	}

	#[test]
	fn resource_url_has_no_trailing_segment_without_id() {
		let client = client(FakeHttpClient::default());

		for subject in Subject::ALL {
			let expected = format!("https://api.artsy.net/api/{subject}");

			assert_eq!(client.resource_url(subject, None).map(String::from), Ok(expected.clone()));
			assert_eq!(client.resource_url(subject, Some("")).map(String::from), Ok(expected));
		}
	}

	#[test]
	fn resource_url_appends_id_as_one_segment() {
		let client = client(FakeHttpClient::default());
		let url = client
			.resource_url(Subject::Artists, Some("4d8b92b34eb68a1b2c0003f4"))
			.expect("Resource URL should build.");

		assert_eq!(url.as_str(), "https://api.artsy.net/api/artists/4d8b92b34eb68a1b2c0003f4");

		let url = client
			.resource_url(Subject::Artworks, Some("a/b c"))
			.expect("Resource URL should build.");

		assert_eq!(url.as_str(), "https://api.artsy.net/api/artworks/a%2Fb%20c");
	}

	#[tokio::test]
	async fn fetch_resource_gets_collection_with_token() {
		let client = client(
			FakeHttpClient::default()
				.route("https://api.artsy.net/api/artworks", 200, "{\"total_count\":null}"),
		);
		let body = client
			.fetch_resource(Some(&AccessToken::new("tok")), Subject::Artworks, None)
			.await
			.expect("Collection fetch should succeed.");

		assert!(body.contains_key("total_count"));

		let recorded = client.http_client.recorded();

		assert_eq!(recorded[0].method, Method::GET);
		assert_eq!(recorded[0].url.as_str(), "https://api.artsy.net/api/artworks");
	}
}
