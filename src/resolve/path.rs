//! Dot-delimited field paths.

// self
use crate::_prelude::*;

/// Raised when a field path string cannot be split into usable segments.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum FieldPathError {
	/// The path has no segments at all.
	#[error("Field path is empty.")]
	Empty,
	/// A segment between dots is empty (`a..b`, `.a`, `a.`).
	#[error("Field path `{path}` has an empty segment at position {index}.")]
	EmptySegment {
		/// Path as supplied.
		path: String,
		/// Zero-based position of the empty segment.
		index: usize,
	},
}

/// Non-empty sequence of keys leading to a URL-valued field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<String>);
impl FieldPath {
	/// Builds a path from explicit segments.
	pub fn new<I, S>(segments: I) -> Result<Self, FieldPathError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let segments = segments.into_iter().map(Into::into).collect::<Vec<String>>();

		if segments.is_empty() {
			return Err(FieldPathError::Empty);
		}
		if let Some(index) = segments.iter().position(String::is_empty) {
			return Err(FieldPathError::EmptySegment { path: segments.join("."), index });
		}

		Ok(Self(segments))
	}

	/// Segments in walk order.
	pub fn segments(&self) -> &[String] {
		&self.0
	}

	/// Number of segments; always at least one.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always `false`; present for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Splits off the leaf segment from the object segments leading to it.
	pub fn split_leaf(&self) -> (&str, &[String]) {
		match self.0.split_last() {
			Some((leaf, parents)) => (leaf.as_str(), parents),
			None => ("", &[]),
		}
	}
}
impl Display for FieldPath {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0.join("."))
	}
}
impl FromStr for FieldPath {
	type Err = FieldPathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(FieldPathError::Empty);
		}

		Self::new(s.split('.'))
	}
}
