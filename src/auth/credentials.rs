//! Client credentials sourced from the process environment.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Environment variable holding the client identifier.
pub const CLIENT_ID_VAR: &str = "ARTSY_CLIENT_ID";
/// Environment variable holding the client secret.
pub const CLIENT_SECRET_VAR: &str = "ARTSY_CLIENT_SECRET";

/// Client identifier and secret exchanged once per run for an access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	/// Application client identifier.
	pub client_id: String,
	/// Application client secret.
	pub client_secret: Secret,
}
impl Credentials {
	/// Creates credentials from explicit values.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: Secret::new(client_secret) }
	}

	/// Reads [`CLIENT_ID_VAR`] and [`CLIENT_SECRET_VAR`] from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads both credentials through `lookup`; unset and empty values count as missing.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
		let client_id = read(CLIENT_ID_VAR);
		let client_secret = read(CLIENT_SECRET_VAR);

		match (client_id, client_secret) {
			(Some(id), Some(secret)) => Ok(Self::new(id, secret)),
			(id, secret) => {
				let missing = [(CLIENT_ID_VAR, id.is_none()), (CLIENT_SECRET_VAR, secret.is_none())]
					.into_iter()
					.filter_map(|(name, absent)| absent.then_some(name))
					.collect::<Vec<_>>()
					.join(", ");

				Err(ConfigError::MissingCredentials { missing })
			},
		}
	}

	/// Query parameters sent to the token endpoint, ordered by key.
	pub(crate) fn query_params(&self) -> BTreeMap<&'static str, &str> {
		BTreeMap::from([
			("client_id", self.client_id.as_str()),
			("client_secret", self.client_secret.expose()),
		])
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars = vars
			.iter()
			.map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
			.collect::<HashMap<_, _>>();

		move |name| vars.get(name).cloned()
	}

	#[test]
	fn reads_both_variables() {
		let creds = Credentials::from_lookup(lookup(&[
			(CLIENT_ID_VAR, "client"),
			(CLIENT_SECRET_VAR, "secret"),
		]))
		.expect("Both variables are set.");

		assert_eq!(creds.client_id, "client");
		assert_eq!(creds.client_secret.expose(), "secret");
		assert!(!format!("{creds:?}").contains("\"secret\""));
	}

	#[test]
	fn reports_each_missing_variable() {
		let err = Credentials::from_lookup(lookup(&[(CLIENT_ID_VAR, "client")]))
			.expect_err("Secret is missing.");

		assert!(
			matches!(err, ConfigError::MissingCredentials { ref missing } if missing == CLIENT_SECRET_VAR)
		);

		let err = Credentials::from_lookup(lookup(&[(CLIENT_ID_VAR, ""), (CLIENT_SECRET_VAR, "")]))
			.expect_err("Empty values count as missing.");

		assert!(matches!(
			err,
			ConfigError::MissingCredentials { ref missing }
				if missing == "ARTSY_CLIENT_ID, ARTSY_CLIENT_SECRET"
		));
	}

	#[test]
	fn query_params_are_sorted_by_key() {
		let creds = Credentials::new("client", "secret");
		let keys = creds.query_params().into_keys().collect::<Vec<_>>();

		assert_eq!(keys, ["client_id", "client_secret"]);
	}
}
