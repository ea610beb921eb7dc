//! Demonstrates an investigation that fetches an artist and follows its similar-artists link,
//! served by a local mock of the API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use art_detective::{
	api::{ApiDescriptor, ArtsyClient},
	auth::Credentials,
	http::ReqwestHttpClient,
	investigate::Investigation,
	json,
	subject::Subject,
};

const ARTIST_ID: &str = "4d8b92b34eb68a1b2c0003f4";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let similar_href = server.url(format!("/api/artists?similar_to_artist_id={ARTIST_ID}"));
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/tokens/xapp_token");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"type\":\"xapp_token\",\"token\":\"demo-token\"}");
		})
		.await;
	let artist_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/api/artists/{ARTIST_ID}"));
			then.status(200).header("content-type", "application/json").body(format!(
				"{{\"name\":\"Andy Warhol\",\"_links\":{{\"similar_artists\":{{\"href\":\"{similar_href}\"}}}}}}"
			));
		})
		.await;
	let similar_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/artists").query_param("similar_to_artist_id", ARTIST_ID);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"_embedded\":{\"artists\":[{\"name\":\"Roy Lichtenstein\"}]}}");
		})
		.await;
	let descriptor = ApiDescriptor::from_base_str(&server.url("/api"))?;
	let client = <ArtsyClient<ReqwestHttpClient>>::new(descriptor)?;
	let investigation = Investigation::new(Subject::Artists)
		.with_id(ARTIST_ID)
		.with_field("_links.similar_artists.href".parse()?);

	println!("{}", investigation.summary());

	let body = client.investigate(&Credentials::new("demo-id", "demo-secret"), &investigation).await?;

	println!("{}", json::render_pretty(&body)?);

	token_mock.assert_async().await;
	artist_mock.assert_async().await;
	similar_mock.assert_async().await;

	Ok(())
}
