//! Runtime settings.
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables:
//!
//! ```toml
//! [window]
//! width = 440.0
//! height = 380.0
//!
//! [form]
//! default_length = 8
//! ```
//!
//! `PWGEN_DEFAULT_LENGTH` overrides `form.default_length`.

use std::env;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::io;
use crate::model::request::{MAX_LENGTH, MIN_LENGTH};

/// Environment variable overriding the default password length.
pub const DEFAULT_LENGTH_ENV: &str = "PWGEN_DEFAULT_LENGTH";

/// Initial window geometry of the desktop form.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
	pub width: f32,
	pub height: f32,
}

impl Default for WindowSettings {
	fn default() -> Self {
		Self {
			width: 440.0,
			height: 380.0,
		}
	}
}

/// Form defaults.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FormSettings {
	/// Length prefilled in the form and used by the CLI when `--length` is absent.
	/// `None` leaves the field empty.
	pub default_length: Option<usize>,
}

/// All settings.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	pub window: WindowSettings,
	pub form: FormSettings,
}

impl Settings {
	/// Parses settings from TOML text and checks their values.
	///
	/// # Errors
	/// - `Error::Config` on malformed TOML or unknown keys
	/// - `Error::InvalidSetting` on out-of-range values
	pub fn from_toml_str(text: &str) -> Result<Self> {
		let settings: Settings = toml::from_str(text)?;
		settings.check()?;
		Ok(settings)
	}

	/// Loads settings from `path` (or the default location) and the environment.
	///
	/// A missing file is not an error: defaults are used instead.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let path = io::resolve_config_path(path);
		let mut settings = match io::read_optional_file(&path)? {
			Some(text) => {
				debug!("loading settings from {}", path.display());
				Self::from_toml_str(&text)?
			}
			None => {
				debug!("no settings file at {}, using defaults", path.display());
				Self::default()
			}
		};
		settings.apply_overrides(|key| env::var(key).ok())?;
		Ok(settings)
	}

	/// Applies overrides read through `lookup` (the process environment in `load`).
	pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(raw) = lookup(DEFAULT_LENGTH_ENV) {
			let raw = raw.trim();
			if raw.is_empty() {
				warn!("{DEFAULT_LENGTH_ENV} is set but empty, ignoring it");
			} else {
				let length = raw.parse::<usize>().map_err(|_| {
					Error::InvalidSetting(format!("{DEFAULT_LENGTH_ENV} must be a number, got {raw:?}"))
				})?;
				self.form.default_length = Some(length);
			}
		}
		self.check()
	}

	/// Text the length field starts with.
	pub fn initial_length_input(&self) -> String {
		self.form
			.default_length
			.map(|length| length.to_string())
			.unwrap_or_default()
	}

	fn check(&self) -> Result<()> {
		if let Some(length) = self.form.default_length {
			if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
				return Err(Error::InvalidSetting(format!(
					"default_length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {length}"
				)));
			}
		}
		if !(self.window.width > 0.0 && self.window.height > 0.0) {
			return Err(Error::InvalidSetting(format!(
				"window size must be positive, got {}x{}",
				self.window.width, self.window.height
			)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_text_gives_defaults() {
		let settings = Settings::from_toml_str("").unwrap();
		assert_eq!(settings, Settings::default());
		assert_eq!(settings.initial_length_input(), "");
	}

	#[test]
	fn partial_tables_keep_other_defaults() {
		let settings = Settings::from_toml_str("[form]\ndefault_length = 8\n").unwrap();
		assert_eq!(settings.form.default_length, Some(8));
		assert_eq!(settings.window, WindowSettings::default());
		assert_eq!(settings.initial_length_input(), "8");
	}

	#[test]
	fn out_of_range_length_is_rejected() {
		let err = Settings::from_toml_str("[form]\ndefault_length = 32\n").unwrap_err();
		assert!(matches!(err, Error::InvalidSetting(_)));
	}

	#[test]
	fn unknown_keys_are_rejected() {
		let err = Settings::from_toml_str("[form]\nlenght = 8\n").unwrap_err();
		assert!(matches!(err, Error::Config(_)));
	}

	#[test]
	fn env_override_replaces_file_value() {
		let mut settings = Settings::from_toml_str("[form]\ndefault_length = 8\n").unwrap();
		settings
			.apply_overrides(|key| (key == DEFAULT_LENGTH_ENV).then(|| "12".to_owned()))
			.unwrap();
		assert_eq!(settings.form.default_length, Some(12));
	}

	#[test]
	fn bad_env_override_is_an_error() {
		let mut settings = Settings::default();
		let err = settings
			.apply_overrides(|key| (key == DEFAULT_LENGTH_ENV).then(|| "twelve".to_owned()))
			.unwrap_err();
		assert!(matches!(err, Error::InvalidSetting(_)));
	}
}
