use std::fmt;

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

use super::charset::Alphabet;
use super::request::GenerationRequest;
use crate::error::{Error, Result};

/// A freshly sampled password.
///
/// `Debug` is redacted so the value never leaks through logs;
/// `Display` and `as_str` give the raw text.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Number of characters (not bytes).
	pub fn len(&self) -> usize {
		self.0.chars().count()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for GeneratedPassword {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Debug for GeneratedPassword {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "GeneratedPassword(<{} chars>)", self.len())
	}
}

/// Draws `length` characters from `alphabet`, each index uniform in `[0, alphabet.len())`.
///
/// # Errors
/// Returns `Error::EmptyAlphabet` if there is nothing to draw from.
pub fn sample<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> Result<String> {
	let chars = alphabet.as_slice();
	if chars.is_empty() {
		return Err(Error::EmptyAlphabet);
	}

	let password = (0..length)
		.map(|_| chars[rng.random_range(0..chars.len())])
		.collect();
	Ok(password)
}

/// Password generator bound to a random number generator.
///
/// # Responsibilities
/// - Build the alphabet for a validated request
/// - Sample the password from it
///
/// The default instance uses the thread-local RNG; tests and callers
/// wanting reproducible output pass a seeded RNG to `with_rng`.
#[derive(Debug)]
pub struct Generator<R = ThreadRng> {
	rng: R,
}

impl Generator<ThreadRng> {
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for Generator<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator drawing from `rng`.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Generates one password for `request`.
	///
	/// # Errors
	/// Returns `Error::EmptyAlphabet` if the request enables no class.
	pub fn generate(&mut self, request: &GenerationRequest) -> Result<GeneratedPassword> {
		let alphabet = request.classes.alphabet();
		let password = sample(&alphabet, request.length.get(), &mut self.rng)?;
		debug!(
			"generated password of length {} from an alphabet of {} characters",
			request.length,
			alphabet.len()
		);
		Ok(GeneratedPassword(password))
	}
}
