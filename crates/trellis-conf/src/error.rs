//! Error types for settings loading and validation.

use thiserror::Error;

/// Errors that can occur while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfError {
	/// The settings file could not be read.
	#[error("failed to read settings: {0}")]
	Io(#[from] std::io::Error),

	/// The settings document is not valid TOML for [`MapperSettings`](crate::MapperSettings).
	#[error("failed to parse settings: {0}")]
	Toml(#[from] toml::de::Error),

	/// The settings parsed but violate a constraint.
	#[error("invalid settings: {0}")]
	Invalid(String),
}
