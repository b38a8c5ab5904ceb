//! Page parameters carried by bookmarkable URLs.
//!
//! Parameters come in two flavours: *indexed* values, which are positional
//! (typically extra path segments after a mount path), and *named* values,
//! an ordered multi-map usually filled from the query string.

use indexmap::IndexMap;

use crate::error::ParameterError;

/// Indexed and named page parameters.
///
/// Named parameters keep first-insertion order of their names; each name can
/// hold several values in insertion order.
///
/// # Examples
///
/// ```
/// use trellis_core::PageParameters;
///
/// let params = PageParameters::new()
///     .with("a", "3")
///     .with("b", "4")
///     .with("a", "5");
///
/// assert_eq!(params.get("a"), Some("3"));
/// assert_eq!(params.values("a"), ["3", "5"]);
/// assert_eq!(params.names().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParameters {
	indexed: Vec<String>,
	named: IndexMap<String, Vec<String>>,
}

impl PageParameters {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` when there are neither indexed nor named values.
	pub fn is_empty(&self) -> bool {
		self.indexed.is_empty() && self.named.is_empty()
	}

	/// Builder-style variant of [`add`](Self::add).
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.add(name, value);
		self
	}

	/// Appends a value under `name`.
	pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.named.entry(name.into()).or_default().push(value.into());
		self
	}

	/// Replaces all values under `name` with a single value.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.named.insert(name.into(), vec![value.into()]);
		self
	}

	/// Removes `name` and returns its values.
	pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
		self.named.shift_remove(name)
	}

	/// Removes and returns the first value under `name`.
	///
	/// The name itself is dropped once its last value is taken.
	pub fn take_first(&mut self, name: &str) -> Option<String> {
		let values = self.named.get_mut(name)?;
		let first = (!values.is_empty()).then(|| values.remove(0));
		if values.is_empty() {
			self.named.shift_remove(name);
		}
		first
	}

	/// Returns the first value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.named
			.get(name)
			.and_then(|values| values.first())
			.map(String::as_str)
	}

	/// Returns every value stored under `name` (empty if absent).
	pub fn values(&self, name: &str) -> &[String] {
		self.named.get(name).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Iterates parameter names in first-insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.named.keys().map(String::as_str)
	}

	/// Iterates `(name, value)` pairs, one per value.
	pub fn named(&self) -> impl Iterator<Item = (&str, &str)> {
		self.named.iter().flat_map(|(name, values)| {
			values
				.iter()
				.map(move |value| (name.as_str(), value.as_str()))
		})
	}

	/// Number of distinct parameter names.
	pub fn named_count(&self) -> usize {
		self.named.len()
	}

	/// Appends a positional value.
	pub fn push_indexed(&mut self, value: impl Into<String>) -> &mut Self {
		self.indexed.push(value.into());
		self
	}

	/// Returns the positional value at `index`.
	pub fn indexed(&self, index: usize) -> Option<&str> {
		self.indexed.get(index).map(String::as_str)
	}

	/// Returns all positional values.
	pub fn indexed_values(&self) -> &[String] {
		&self.indexed
	}

	/// Copies every indexed and named value of `other` into `self`.
	pub fn merge(&mut self, other: &PageParameters) -> &mut Self {
		self.indexed.extend(other.indexed.iter().cloned());
		for (name, value) in other.named() {
			self.add(name, value);
		}
		self
	}

	/// Reads the first value under `name` as `T`.
	///
	/// # Errors
	///
	/// Returns [`ParameterError::Missing`] if no value exists and
	/// [`ParameterError::Parse`] if it does not parse.
	pub fn get_as<T: FromParameter>(&self, name: &str) -> Result<T, ParameterError> {
		let raw = self
			.get(name)
			.ok_or_else(|| ParameterError::Missing(name.to_string()))?;
		T::from_parameter(name, raw)
	}

	/// Reads the positional value at `index` as `T`.
	///
	/// # Errors
	///
	/// Returns [`ParameterError::IndexOutOfRange`] or [`ParameterError::Parse`].
	pub fn indexed_as<T: FromParameter>(&self, index: usize) -> Result<T, ParameterError> {
		let raw = self.indexed(index).ok_or(ParameterError::IndexOutOfRange {
			index,
			len: self.indexed.len(),
		})?;
		T::from_parameter(&index.to_string(), raw)
	}
}

/// Conversion from a raw parameter string into a typed value.
pub trait FromParameter: Sized {
	/// Parses `raw`; `name` is only used for error reporting.
	///
	/// # Errors
	///
	/// Returns [`ParameterError::Parse`] when `raw` is not a valid `Self`.
	fn from_parameter(name: &str, raw: &str) -> Result<Self, ParameterError>;
}

macro_rules! impl_from_parameter_for_primitive {
	($($ty:ty => $type_name:expr),* $(,)?) => {
		$(
			impl FromParameter for $ty {
				fn from_parameter(name: &str, raw: &str) -> Result<Self, ParameterError> {
					raw.parse::<$ty>().map_err(|e| ParameterError::Parse {
						name: name.to_string(),
						param_type: $type_name,
						raw_value: raw.to_string(),
						reason: e.to_string(),
					})
				}
			}
		)*
	};
}

impl_from_parameter_for_primitive! {
	i32 => "i32",
	i64 => "i64",
	u32 => "u32",
	u64 => "u64",
	bool => "bool",
}

impl FromParameter for String {
	fn from_parameter(_name: &str, raw: &str) -> Result<Self, ParameterError> {
		Ok(raw.to_string())
	}
}
