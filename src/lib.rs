//! Artsy API client that follows link fields in JSON responses.
//!
//! A run exchanges client credentials for an app token, fetches an artwork or
//! artist (or the whole collection), and optionally walks a dot-separated path
//! of link fields in the response to fetch the resource it points at.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod cli;
pub mod error;
pub mod http;
pub mod investigate;
pub mod json;
pub mod obs;
pub mod resolve;
pub mod subject;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use reqwest::{
		Client as ReqwestClient, Error as ReqwestError, Method, StatusCode,
		header::{HeaderMap, HeaderName, HeaderValue},
	};
	pub use serde::Deserialize;
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)]
use {assert_cmd as _, color_eyre as _, httpmock as _, predicates as _};
