//! Top-level module for the password generation system.
//!
//! This module groups:
//! - Character classes and alphabet construction (`CharClass`, `CharClasses`, `Alphabet`)
//! - Input validation (`validate_length`, `validate`, `FieldError`)
//! - The validated request type (`GenerationRequest`, `PasswordLength`)
//! - Password sampling (`Generator`, `GeneratedPassword`)
//! - The form state owned by a front-end (`FormState`)

/// Fixed character classes and the alphabet built from the enabled ones.
pub mod charset;

/// Uniform password sampling over an alphabet.
///
/// Generic over the random number generator so seeded runs are reproducible.
pub mod generator;

/// Validated generation parameters.
///
/// Only produced by the validators, which guarantees the length bounds.
pub mod request;

/// Pure validation of the raw form input.
pub mod validation;

/// Explicit state of the single generator screen.
pub mod form;
