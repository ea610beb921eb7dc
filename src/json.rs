//! Decoded response bodies and the checked accessors used to walk them.
//!
//! Bodies stay untyped ([`Body`] is a `serde_json` object map) because the API
//! returns HAL documents whose shape varies per resource. Every lookup goes
//! through [`object_field`] or [`str_field`], which report a [`ShapeError`]
//! naming the offending path instead of panicking on an unexpected value.

// self
use crate::{_prelude::*, error::DecodeError};

/// Decoded JSON object returned by the API.
pub type Body = Map<String, Value>;

/// Kind tag for a JSON value, used in shape diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonKind {
	/// `null`.
	Null,
	/// `true` or `false`.
	Bool,
	/// Any JSON number.
	Number,
	/// A JSON string.
	String,
	/// A JSON array.
	Array,
	/// A JSON object.
	Object,
}
impl JsonKind {
	/// Classifies a decoded value.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}

	/// Returns a stable label suitable for messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}
impl Display for JsonKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Raised when a field lookup does not match the shape of the body.
#[derive(Debug, ThisError)]
pub enum ShapeError {
	/// The segment is absent from the object being walked.
	#[error("Response has no field `{segment}` (looked up as `{path}`).")]
	MissingField {
		/// Dotted path walked so far, ending with the missing segment.
		path: String,
		/// Segment that was not found.
		segment: String,
	},
	/// The field exists but holds a value of another kind.
	#[error("Field `{path}` is a {found}, expected {expected}.")]
	WrongType {
		/// Dotted path of the field.
		path: String,
		/// Kind required at this position.
		expected: JsonKind,
		/// Kind actually found.
		found: JsonKind,
	},
	/// The leaf string is not a usable URL.
	#[error("Field `{path}` does not hold a valid URL: {value}.")]
	InvalidUrl {
		/// Dotted path of the field.
		path: String,
		/// Raw string found at the leaf.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The leaf URL would send the token in cleartext to a remote host.
	#[error("Field `{path}` links to {url}, which is neither HTTPS nor loopback.")]
	InsecureUrl {
		/// Dotted path of the field.
		path: String,
		/// Resolved URL.
		url: String,
	},
}

/// Looks up `segment` in `object`, reporting `path` when it is missing.
pub fn field<'a>(object: &'a Body, segment: &str, path: &str) -> Result<&'a Value, ShapeError> {
	object.get(segment).ok_or_else(|| ShapeError::MissingField {
		path: path.to_owned(),
		segment: segment.to_owned(),
	})
}

/// Looks up `segment` and requires it to hold a nested object.
pub fn object_field<'a>(object: &'a Body, segment: &str, path: &str) -> Result<&'a Body, ShapeError> {
	match field(object, segment, path)? {
		Value::Object(inner) => Ok(inner),
		other => Err(wrong_type(path, JsonKind::Object, other)),
	}
}

/// Looks up `segment` and requires it to hold a string.
pub fn str_field<'a>(object: &'a Body, segment: &str, path: &str) -> Result<&'a str, ShapeError> {
	match field(object, segment, path)? {
		Value::String(inner) => Ok(inner),
		other => Err(wrong_type(path, JsonKind::String, other)),
	}
}

fn wrong_type(path: &str, expected: JsonKind, found: &Value) -> ShapeError {
	ShapeError::WrongType { path: path.to_owned(), expected, found: JsonKind::of(found) }
}

/// Decodes a response body into `T`, tracking the JSON path on failure.
pub(crate) fn decode<T>(url: &Url, bytes: &[u8]) -> Result<T, DecodeError>
where
	T: serde::de::DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| DecodeError::Json {
		url: crate::error::redacted_url(url),
		path: source.path().to_string(),
		source,
	})
}

/// Decodes a response body that must be a JSON object.
pub(crate) fn decode_object(url: &Url, bytes: &[u8]) -> Result<Body, DecodeError> {
	match decode::<Value>(url, bytes)? {
		Value::Object(body) => Ok(body),
		other => Err(DecodeError::NotAnObject {
			url: crate::error::redacted_url(url),
			found: JsonKind::of(&other),
		}),
	}
}

/// Renders a body as pretty-printed JSON with two-space indentation.
pub fn render_pretty(body: &Body) -> Result<String, DecodeError> {
	serde_json::to_string_pretty(body).map_err(|source| DecodeError::Render { source })
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn body(value: Value) -> Body {
		match value {
			Value::Object(map) => map,
			other => panic!("Test fixture must be an object, got {other:?}."),
		}
	}

	fn url() -> Url {
		Url::parse("https://api.artsy.net/api/artists").expect("Failed to parse fixture URL.")
	}

	#[test]
	fn accessors_report_missing_and_mistyped_fields() {
		let doc = body(json!({ "_links": { "self": { "href": 42 } } }));
		let err = object_field(&doc, "links", "links").expect_err("Missing field should fail.");

		assert!(
			matches!(err, ShapeError::MissingField { ref segment, .. } if segment == "links"),
			"Unexpected error: {err:?}."
		);

		let links = object_field(&doc, "_links", "_links").expect("Links object should resolve.");
		let this = object_field(links, "self", "_links.self").expect("Self object should resolve.");
		let err = str_field(this, "href", "_links.self.href").expect_err("Number leaf should fail.");

		assert!(matches!(
			err,
			ShapeError::WrongType { expected: JsonKind::String, found: JsonKind::Number, .. }
		));
		assert_eq!(err.to_string(), "Field `_links.self.href` is a number, expected string.");
	}

	#[test]
	fn decode_object_rejects_non_object_roots() {
		let err = decode_object(&url(), b"[1, 2]").expect_err("Arrays are not bodies.");

		assert!(matches!(err, DecodeError::NotAnObject { found: JsonKind::Array, .. }));

		let err = decode_object(&url(), b"{\"name\": ").expect_err("Truncated JSON should fail.");

		assert!(matches!(err, DecodeError::Json { .. }));
	}

	#[test]
	fn pretty_render_uses_two_spaces_and_keeps_every_pair() {
		let doc = body(json!({
			"name": "Andy Warhol",
			"birthday": "1928",
			"_links": { "thumbnail": { "href": "https://d32dm0rphc51dk.cloudfront.net/x.jpg" } },
			"hometown": null,
			"counts": [1, 2.5, true]
		}));
		let text = render_pretty(&doc).expect("Rendering a decoded body should succeed.");

		assert!(text.contains("\n  \"name\": \"Andy Warhol\""));

		let reparsed = decode_object(&url(), text.as_bytes()).expect("Rendered JSON should decode.");

		assert_eq!(reparsed, doc);
	}
}
