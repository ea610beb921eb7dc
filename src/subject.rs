//! Resource collections the client knows how to investigate.

// self
use crate::_prelude::*;

/// Raised when a subject name is not one of [`Subject::ALL`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SubjectError {
	/// Name does not match any supported collection.
	#[error("Subject \"{value}\" not supported.")]
	Unsupported {
		/// Name supplied by the caller.
		value: String,
	},
}

/// API resource collection being queried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Subject {
	/// The `artworks` collection.
	#[default]
	Artworks,
	/// The `artists` collection.
	Artists,
}
impl Subject {
	/// Every supported subject, in the order shown to users.
	pub const ALL: [Subject; 2] = [Subject::Artworks, Subject::Artists];

	/// Returns the collection's path segment.
	pub const fn as_str(self) -> &'static str {
		match self {
			Subject::Artworks => "artworks",
			Subject::Artists => "artists",
		}
	}
}
impl Display for Subject {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Subject {
	type Err = SubjectError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|subject| subject.as_str() == s)
			.ok_or_else(|| SubjectError::Unsupported { value: s.to_owned() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parses_supported_subjects_exactly() {
		assert_eq!("artworks".parse::<Subject>(), Ok(Subject::Artworks));
		assert_eq!("artists".parse::<Subject>(), Ok(Subject::Artists));
		assert_eq!(Subject::default(), Subject::Artworks);

		let err = "Artists".parse::<Subject>().expect_err("Matching is case-sensitive.");

		assert_eq!(err.to_string(), "Subject \"Artists\" not supported.");
		assert!("foo".parse::<Subject>().is_err());
	}
}
