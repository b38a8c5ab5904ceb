//! Mapper settings.
//!
//! Every field has a default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::{ConfError, ConfResult};

/// Characters that may not appear in a URL identifier segment.
const RESERVED_SEGMENT_CHARS: &[char] = &['/', '?', '#', '&', '='];

/// Settings shared by every mapper of an application.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperSettings {
	/// First path segment reserved for framework URLs.
	pub namespace: String,

	/// Second path segment of page-instance URLs (`/{namespace}/{page_identifier}?3`).
	pub page_identifier: String,

	/// Second path segment of generic bookmarkable URLs.
	pub bookmarkable_identifier: String,

	/// Listener interfaces registered in addition to the built-in ones.
	pub listener_interfaces: Vec<ListenerInterfaceSettings>,

	/// Logging configuration
	pub logging: LoggingSettings,
}

impl Default for MapperSettings {
	fn default() -> Self {
		Self {
			namespace: "wicket".to_string(),
			page_identifier: "page".to_string(),
			bookmarkable_identifier: "bookmarkable".to_string(),
			listener_interfaces: Vec::new(),
			logging: LoggingSettings::default(),
		}
	}
}

impl MapperSettings {
	/// Parses and validates settings from a TOML document.
	///
	/// # Errors
	///
	/// Returns [`ConfError::Toml`] for malformed documents and
	/// [`ConfError::Invalid`] when [`validate`](Self::validate) fails.
	pub fn from_toml_str(document: &str) -> ConfResult<Self> {
		let settings: Self = toml::from_str(document)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file.
	///
	/// # Errors
	///
	/// Returns [`ConfError::Io`] if the file cannot be read, otherwise the
	/// errors of [`from_toml_str`](Self::from_toml_str).
	pub fn from_file(path: impl AsRef<Path>) -> ConfResult<Self> {
		let document = std::fs::read_to_string(path)?;
		Self::from_toml_str(&document)
	}

	/// Checks identifiers and listener interface names.
	///
	/// # Errors
	///
	/// Returns [`ConfError::Invalid`] describing the first violation found.
	pub fn validate(&self) -> ConfResult<()> {
		for (field, value) in [
			("namespace", &self.namespace),
			("page_identifier", &self.page_identifier),
			("bookmarkable_identifier", &self.bookmarkable_identifier),
		] {
			if value.is_empty() || value.contains(RESERVED_SEGMENT_CHARS) {
				return Err(ConfError::Invalid(format!(
					"{} must be a non-empty path segment, got '{}'",
					field, value
				)));
			}
		}

		if self.page_identifier == self.bookmarkable_identifier {
			return Err(ConfError::Invalid(format!(
				"page_identifier and bookmarkable_identifier must differ (both '{}')",
				self.page_identifier
			)));
		}

		let mut seen = HashSet::new();
		for listener in &self.listener_interfaces {
			if !is_identifier(&listener.name) {
				return Err(ConfError::Invalid(format!(
					"listener interface name '{}' is not an identifier",
					listener.name
				)));
			}
			if !seen.insert(listener.name.as_str()) {
				return Err(ConfError::Invalid(format!(
					"listener interface '{}' declared twice",
					listener.name
				)));
			}
		}

		Ok(())
	}
}

/// A listener interface declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerInterfaceSettings {
	/// Name used on the wire, e.g. `IDragListener`.
	pub name: String,

	/// Whether the page is rendered again after the listener runs.
	#[serde(default)]
	pub renders_page: bool,
}

/// Logging configuration
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// `EnvFilter` directive, e.g. `info` or `trellis_mapper=debug`.
	pub level: String,

	/// Include the event target in formatted output.
	pub with_target: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			with_target: true,
		}
	}
}

/// ASCII identifier: letter or `_` first, then letters, digits or `_`.
pub fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
