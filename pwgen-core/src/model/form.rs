use rand::Rng;

use super::charset::{CharClass, CharClasses};
use super::generator::{GeneratedPassword, Generator};
use super::request::GenerationRequest;
use super::validation::{self, Field, FieldError};
use crate::error::Error;

/// State of the generator screen.
///
/// Owned by whichever front-end is showing the form; validation and
/// generation are pure functions of it.
///
/// # Invariants
/// - `password` is only ever set by a successful `submit`
/// - `reset` returns to the same state as `FormState::default()`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
	length_input: String,
	classes: CharClasses,
	password: Option<GeneratedPassword>,
}

impl FormState {
	/// Creates a form with the length field prefilled.
	pub fn new(length_input: impl Into<String>) -> Self {
		Self {
			length_input: length_input.into(),
			..Self::default()
		}
	}

	pub fn length_input(&self) -> &str {
		&self.length_input
	}

	/// Mutable access to the raw text, for widgets editing it in place.
	pub fn length_input_mut(&mut self) -> &mut String {
		&mut self.length_input
	}

	pub fn set_length_input(&mut self, text: impl Into<String>) {
		self.length_input = text.into();
	}

	pub fn classes(&self) -> &CharClasses {
		&self.classes
	}

	pub fn is_enabled(&self, class: CharClass) -> bool {
		self.classes.is_enabled(class)
	}

	pub fn set_class(&mut self, class: CharClass, enabled: bool) {
		self.classes.set(class, enabled);
	}

	pub fn toggle(&mut self, class: CharClass) {
		self.classes.toggle(class);
	}

	/// Last generated password, if any.
	pub fn password(&self) -> Option<&GeneratedPassword> {
		self.password.as_ref()
	}

	/// Validates the current input.
	pub fn validate(&self) -> Result<GenerationRequest, Vec<FieldError>> {
		validation::validate(&self.length_input, &self.classes)
	}

	/// All current field errors, length first.
	pub fn errors(&self) -> Vec<FieldError> {
		self.validate().err().unwrap_or_default()
	}

	/// First error message for `field`, if the field is invalid.
	pub fn error_for(&self, field: Field) -> Option<String> {
		self.errors()
			.into_iter()
			.find(|err| err.field == field)
			.map(|err| err.message)
	}

	pub fn is_valid(&self) -> bool {
		self.validate().is_ok()
	}

	/// Validates the form and generates a new password.
	///
	/// # Behavior
	/// - On success the password replaces the previous result and is returned.
	/// - On failure the previous result is left untouched.
	///
	/// # Errors
	/// - `Error::Validation` with every field error
	/// - `Error::EmptyAlphabet` cannot happen through the form, since an empty
	///   selection is a validation error, but is propagated if it does
	pub fn submit<R: Rng>(&mut self, generator: &mut Generator<R>) -> Result<&GeneratedPassword, Error> {
		let request = self.validate().map_err(Error::Validation)?;
		let password = generator.generate(&request)?;
		Ok(&*self.password.insert(password))
	}

	/// Clears the result and the length field and restores the default toggles.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}
