use std::fmt;

use thiserror::Error;

use crate::model::validation::FieldError;

/// Errors returned by the library.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
	/// The form input did not pass validation.
	#[error("invalid input: {}", JoinedErrors(.0))]
	Validation(Vec<FieldError>),

	/// Sampling was requested from an alphabet with no characters.
	#[error("no character class selected, the alphabet is empty")]
	EmptyAlphabet,

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("config error: {0}")]
	Config(#[from] toml::de::Error),

	/// A setting parsed correctly but holds an unusable value.
	#[error("invalid setting: {0}")]
	InvalidSetting(String),
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;

struct JoinedErrors<'a>(&'a [FieldError]);

impl fmt::Display for JoinedErrors<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, err) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, "; ")?;
			}
			write!(f, "{err}")?;
		}
		Ok(())
	}
}
