use std::fmt;

use super::charset::CharClasses;
use super::request::{GenerationRequest, MAX_LENGTH, MIN_LENGTH, PasswordLength};

/// Form field an error is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
	Length,
	Classes,
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Field::Length => f.write_str("length"),
			Field::Classes => f.write_str("classes"),
		}
	}
}

/// A human-readable message shown under one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
	pub field: Field,
	pub message: String,
}

impl FieldError {
	pub fn new(field: Field, message: impl Into<String>) -> Self {
		Self {
			field,
			message: message.into(),
		}
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.field, self.message)
	}
}

/// Why the length field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthError {
	Missing,
	NotANumber,
	NotWhole,
	TooShort,
	TooLong,
}

impl LengthError {
	/// Message displayed under the length field.
	pub fn message(self) -> String {
		match self {
			LengthError::Missing => "length is required!".to_owned(),
			LengthError::NotANumber => "Length must be a number".to_owned(),
			LengthError::NotWhole => "Length must be a whole number".to_owned(),
			LengthError::TooShort => format!("Should be a min of {MIN_LENGTH} characters long"),
			LengthError::TooLong => format!("Should be at most {MAX_LENGTH} characters long"),
		}
	}
}

impl From<LengthError> for FieldError {
	fn from(err: LengthError) -> Self {
		FieldError::new(Field::Length, err.message())
	}
}

/// Message attached to an empty class selection.
pub const NO_CLASS_SELECTED: &str = "Select at least one character type";

/// Validates the raw text of the length field.
///
/// # Behavior
/// - Surrounding whitespace is ignored.
/// - Rules are checked in order: present, numeric, whole, `>= MIN_LENGTH`,
///   `<= MAX_LENGTH`. The first failing rule is reported.
/// - Decimal input with a zero fraction (`"8.0"`) is accepted as `8`.
/// - Only decimal notation is numeric: `"0x10"` is not a number.
pub fn validate_length(raw: &str) -> Result<PasswordLength, LengthError> {
	let raw = raw.trim();
	if raw.is_empty() {
		return Err(LengthError::Missing);
	}

	let value: f64 = raw.parse().map_err(|_| LengthError::NotANumber)?;
	if !value.is_finite() {
		return Err(LengthError::NotANumber);
	}
	if value.fract() != 0.0 {
		return Err(LengthError::NotWhole);
	}
	if value < MIN_LENGTH as f64 {
		return Err(LengthError::TooShort);
	}
	if value > MAX_LENGTH as f64 {
		return Err(LengthError::TooLong);
	}

	PasswordLength::new(value as usize).ok_or(LengthError::TooLong)
}

/// Validates the class selection.
pub fn validate_classes(classes: &CharClasses) -> Result<(), FieldError> {
	if classes.is_empty() {
		return Err(FieldError::new(Field::Classes, NO_CLASS_SELECTED));
	}
	Ok(())
}

/// Validates the whole form and builds a request from it.
///
/// # Returns
/// - `Ok(GenerationRequest)` when every field is valid
/// - `Err(Vec<FieldError>)` with one entry per invalid field, length first
pub fn validate(length_input: &str, classes: &CharClasses) -> Result<GenerationRequest, Vec<FieldError>> {
	let length = validate_length(length_input);
	let selection = validate_classes(classes);

	match (length, selection) {
		(Ok(length), Ok(())) => Ok(GenerationRequest::new(length, *classes)),
		(length, selection) => {
			let mut errors = Vec::new();
			if let Err(err) = length {
				errors.push(err.into());
			}
			if let Err(err) = selection {
				errors.push(err);
			}
			Err(errors)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::charset::CharClass;

	#[test]
	fn accepts_every_length_in_range() {
		for length in MIN_LENGTH..=MAX_LENGTH {
			let parsed = validate_length(&length.to_string()).map(PasswordLength::get);
			assert_eq!(parsed, Ok(length));
		}
	}

	#[test]
	fn rejects_out_of_range() {
		assert_eq!(validate_length("3"), Err(LengthError::TooShort));
		assert_eq!(validate_length("17"), Err(LengthError::TooLong));
		assert_eq!(validate_length("-8"), Err(LengthError::TooShort));
		assert_eq!(validate_length("1000000000000000000000"), Err(LengthError::TooLong));
	}

	#[test]
	fn rejects_missing_and_garbage() {
		assert_eq!(validate_length(""), Err(LengthError::Missing));
		assert_eq!(validate_length("   "), Err(LengthError::Missing));
		assert_eq!(validate_length("abc"), Err(LengthError::NotANumber));
		assert_eq!(validate_length("8a"), Err(LengthError::NotANumber));
		assert_eq!(validate_length("NaN"), Err(LengthError::NotANumber));
		assert_eq!(validate_length("inf"), Err(LengthError::NotANumber));
		assert_eq!(validate_length("0x10"), Err(LengthError::NotANumber));
	}

	#[test]
	fn fractions_must_be_whole() {
		assert_eq!(validate_length("8.5"), Err(LengthError::NotWhole));
		assert_eq!(validate_length("8.0").map(PasswordLength::get), Ok(8));
		assert_eq!(validate_length(" 12 ").map(PasswordLength::get), Ok(12));
	}

	#[test]
	fn messages_name_the_bounds() {
		assert_eq!(LengthError::TooShort.message(), "Should be a min of 4 characters long");
		assert_eq!(LengthError::TooLong.message(), "Should be at most 16 characters long");
		assert_eq!(LengthError::Missing.message(), "length is required!");
	}

	#[test]
	fn form_collects_all_errors() {
		let errors = validate("2", &CharClasses::none()).unwrap_err();
		assert_eq!(
			errors,
			vec![
				FieldError::new(Field::Length, "Should be a min of 4 characters long"),
				FieldError::new(Field::Classes, NO_CLASS_SELECTED),
			]
		);
	}

	#[test]
	fn form_builds_request() {
		let classes = CharClasses::from_classes([CharClass::Digit]);
		let request = validate("6", &classes).unwrap();
		assert_eq!(request.length.get(), 6);
		assert_eq!(request.classes, classes);
	}
}
