//! End-to-end investigation: token exchange, primary fetch, optional link following.

// self
use crate::{
	_prelude::*,
	api::ArtsyClient,
	auth::Credentials,
	http::ApiHttpClient,
	json::Body,
	resolve::{self, FieldPath},
	subject::Subject,
};

/// What to look up and which link, if any, to follow afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Investigation {
	/// Collection to query.
	pub subject: Subject,
	/// Resource id; `None` lists the collection.
	pub id: Option<String>,
	/// Link field to follow in the primary response.
	pub field: Option<FieldPath>,
}
impl Investigation {
	/// Creates an investigation that lists `subject`.
	pub fn new(subject: Subject) -> Self {
		Self { subject, id: None, field: None }
	}

	/// Targets a single resource; an empty id keeps the collection listing.
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into()).filter(|id: &String| !id.is_empty());

		self
	}

	/// Follows `field` after the primary fetch.
	pub fn with_field(mut self, field: FieldPath) -> Self {
		self.field = Some(field);

		self
	}

	/// One-line description logged before any network call.
	pub fn summary(&self) -> String {
		match &self.id {
			Some(id) => format!("Investigating subject \"{}\" with id \"{id}\".", self.subject),
			None => format!("Investigating subject \"{}\".", self.subject),
		}
	}
}

impl<C> ArtsyClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Runs the whole investigation and returns the body to print.
	///
	/// Any failure aborts the run: a failed token exchange or primary fetch is
	/// never papered over with an empty token or body.
	pub async fn investigate(
		&self,
		credentials: &Credentials,
		investigation: &Investigation,
	) -> Result<Body> {
		let token = self.acquire_token(credentials).await?;
		let body = self
			.fetch_resource(Some(&token), investigation.subject, investigation.id.as_deref())
			.await?;

		match &investigation.field {
			Some(path) => resolve::resolve(self, &body, path, Some(&token)).await,
			None => Ok(body),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{api::ApiDescriptor, http::fake::FakeHttpClient};

	const TOKEN_URL: &str =
		"https://api.artsy.net/api/tokens/xapp_token?client_id=cid&client_secret=csecret";
	const ARTIST_URL: &str = "https://api.artsy.net/api/artists/4d8b92b34eb68a1b2c0003f4";
	const SIMILAR_URL: &str =
		"https://api.artsy.net/api/artists?similar_to_artist_id=4d8b92b34eb68a1b2c0003f4";

	fn build_client(fake: FakeHttpClient) -> ArtsyClient<FakeHttpClient> {
		let descriptor = ApiDescriptor::production().expect("Failed to build descriptor.");

		ArtsyClient::with_http_client(descriptor, fake)
	}

	fn credentials() -> Credentials {
		Credentials::new("cid", "csecret")
	}

	#[test]
	fn summary_mentions_id_only_when_set() {
		let listing = Investigation::new(Subject::Artworks).with_id("");

		assert_eq!(listing.id, None);
		assert_eq!(listing.summary(), "Investigating subject \"artworks\".");
		assert_eq!(
			Investigation::new(Subject::Artists).with_id("abc").summary(),
			"Investigating subject \"artists\" with id \"abc\"."
		);
	}

	#[tokio::test]
	async fn investigation_chains_token_resource_and_link() {
		let client = build_client(
			FakeHttpClient::default()
				.route(TOKEN_URL, 201, "{\"type\":\"xapp_token\",\"token\":\"tok\"}")
				.route(
					ARTIST_URL,
					200,
					&format!("{{\"name\":\"Andy Warhol\",\"_links\":{{\"similar_artists\":{{\"href\":\"{SIMILAR_URL}\"}}}}}}"),
				)
				.route(SIMILAR_URL, 200, "{\"_embedded\":{\"artists\":[]}}"),
		);
		let investigation = Investigation::new(Subject::Artists)
			.with_id("4d8b92b34eb68a1b2c0003f4")
			.with_field("_links.similar_artists.href".parse().expect("Path should parse."));
		let body = client
			.investigate(&credentials(), &investigation)
			.await
			.expect("Investigation should succeed.");

		assert!(body.contains_key("_embedded"));

		let urls = client
			.http_client
			.recorded()
			.into_iter()
			.map(|request| request.url.to_string())
			.collect::<Vec<_>>();

		assert_eq!(urls, [TOKEN_URL, ARTIST_URL, SIMILAR_URL]);
	}

	#[tokio::test]
	async fn failed_token_exchange_stops_the_run() {
		let client = build_client(FakeHttpClient::default().route(
			TOKEN_URL,
			401,
			"{\"type\":\"auth_error\",\"message\":\"invalid client credentials\"}",
		));
		let err = client
			.investigate(&credentials(), &Investigation::new(Subject::Artworks))
			.await
			.expect_err("Token failure should abort.");

		assert!(matches!(err, Error::Api { status: 401, .. }));
		assert_eq!(client.http_client.recorded().len(), 1);
	}
}
