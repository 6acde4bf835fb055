//! Random password generation library.
//!
//! This crate provides the logic behind the password generator form:
//! - Fixed character classes and the alphabet built from them
//! - Uniform sampling of passwords from an alphabet
//! - Validation of the raw form input (length field and class selection)
//! - An explicit form state object that front-ends own and drive
//!
//! Front-ends (desktop UI, command line) hold a `FormState` and a
//! `Generator`; everything else is kept behind those two types.

/// Character classes, validation and generation logic.
///
/// Exposes the form state and the generator while keeping the
/// alphabet construction details behind small, typed helpers.
pub mod model;

/// Runtime settings (window geometry, default length).
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// File helpers used by the configuration loader.
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
