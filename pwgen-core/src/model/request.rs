use std::fmt;

use super::charset::CharClasses;

/// Shortest password the form accepts.
pub const MIN_LENGTH: usize = 4;

/// Longest password the form accepts.
pub const MAX_LENGTH: usize = 16;

/// A password length known to be within `MIN_LENGTH..=MAX_LENGTH`.
///
/// # Invariants
/// - The wrapped value is always in bounds; the only constructor checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordLength(usize);

impl PasswordLength {
	/// Wraps `length` if it is within bounds.
	pub fn new(length: usize) -> Option<Self> {
		(MIN_LENGTH..=MAX_LENGTH).contains(&length).then_some(Self(length))
	}

	pub fn get(self) -> usize {
		self.0
	}
}

impl fmt::Display for PasswordLength {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Validated input for a single generation.
///
/// # Responsibilities
/// - Carry a bounded length and the class selection to the generator
///
/// # Notes
/// - The class selection may be empty at this level; the form validator
///   refuses it before a request is built, and the sampler reports it
///   as an error if a request is built by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	pub length: PasswordLength,
	pub classes: CharClasses,
}

impl GenerationRequest {
	pub fn new(length: PasswordLength, classes: CharClasses) -> Self {
		Self { length, classes }
	}
}
