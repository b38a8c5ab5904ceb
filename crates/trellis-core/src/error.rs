//! Error types for page parameter access.

use thiserror::Error;

/// Error returned when a page parameter cannot be read as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
	/// No value is stored under the given name.
	#[error("missing page parameter: {0}")]
	Missing(String),

	/// No indexed value exists at the given position.
	#[error("indexed parameter {index} out of range (have {len})")]
	IndexOutOfRange {
		/// Requested position.
		index: usize,
		/// Number of indexed values present.
		len: usize,
	},

	/// A value exists but does not parse as the requested type.
	#[error("failed to parse parameter '{name}' value '{raw_value}' as {param_type}: {reason}")]
	Parse {
		/// Parameter name, or the position for indexed values.
		name: String,
		/// Expected type name.
		param_type: &'static str,
		/// Raw string value that failed to parse.
		raw_value: String,
		/// Error message from parsing.
		reason: String,
	},
}
