//! Structured URL value type.
//!
//! [`Url`] keeps the path as an ordered list of decoded segments and the query
//! as an ordered list of decoded name/value pairs. Parsing never fails: any
//! string yields some `Url`, and `Url::parse(s).to_string()` reproduces `s` up
//! to percent-encoding normalization. Escapes that do not decode to UTF-8 are
//! the exception, see [`Url::parse`].

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'%')
	.add(b'/')
	.add(b'<')
	.add(b'>')
	.add(b'?')
	.add(b'`')
	.add(b'{')
	.add(b'}');

/// Characters escaped inside a query parameter name or value.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'%')
	.add(b'&')
	.add(b'+')
	.add(b'<')
	.add(b'=')
	.add(b'>')
	.add(b'`');

/// A single `name[=value]` pair of the query string.
///
/// `?k` and `?k=` are distinct: the first is a flag without value, the second
/// carries an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryParameter {
	name: String,
	value: Option<String>,
}

impl QueryParameter {
	/// Creates a `name=value` query parameter.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: Some(value.into()),
		}
	}

	/// Creates a bare `name` query parameter without `=`.
	pub fn flag(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: None,
		}
	}

	/// Returns the decoded parameter name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the decoded parameter value (empty for a flag).
	pub fn value(&self) -> &str {
		self.value.as_deref().unwrap_or_default()
	}

	/// Returns `true` when the pair was written with `=`.
	pub fn has_value(&self) -> bool {
		self.value.is_some()
	}
}

impl fmt::Display for QueryParameter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", utf8_percent_encode(&self.name, QUERY_COMPONENT))?;
		if let Some(value) = &self.value {
			write!(f, "={}", utf8_percent_encode(value, QUERY_COMPONENT))?;
		}
		Ok(())
	}
}

/// Structured URL: path segments plus query parameters.
///
/// # Examples
///
/// ```
/// use trellis_core::Url;
///
/// let url = Url::parse("wicket/page/ignore/me?abc.4.5&a=3&b=3");
/// assert_eq!(url.segments().len(), 4);
/// assert_eq!(url.query_parameter_value("a"), Some("3"));
/// assert_eq!(url.to_string(), "wicket/page/ignore/me?abc.4.5&a=3&b=3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
	segments: Vec<String>,
	query_parameters: Vec<QueryParameter>,
}

impl Url {
	/// Creates an empty URL.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a URL from already decoded path segments.
	pub fn from_segments<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			segments: segments.into_iter().map(Into::into).collect(),
			query_parameters: Vec::new(),
		}
	}

	/// Parses a URL string.
	///
	/// The fragment (anything after `#`) is discarded. A leading `/` produces
	/// an empty first segment and a trailing `/` an empty last segment, so the
	/// shape of the path survives a round trip.
	///
	/// Percent escapes that do not form valid UTF-8 (`%FF`) decode to
	/// U+FFFD and serialize back as `%EF%BF%BD`.
	pub fn parse(input: &str) -> Self {
		let input = input.split_once('#').map_or(input, |(before, _)| before);
		let (path, query) = match input.split_once('?') {
			Some((path, query)) => (path, Some(query)),
			None => (input, None),
		};

		let segments = if path.is_empty() {
			Vec::new()
		} else {
			path.split('/').map(decode_path_segment).collect()
		};

		Self {
			segments,
			query_parameters: query.map(parse_query).unwrap_or_default(),
		}
	}

	/// Returns the decoded path segments.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Returns `true` when the URL has neither segments nor query parameters.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty() && self.query_parameters.is_empty()
	}

	/// Appends a path segment.
	pub fn push_segment(&mut self, segment: impl Into<String>) -> &mut Self {
		self.segments.push(segment.into());
		self
	}

	/// Removes the first `count` segments (all of them if fewer exist).
	pub fn remove_leading_segments(&mut self, count: usize) {
		let count = count.min(self.segments.len());
		self.segments.drain(..count);
	}

	/// Returns `true` if the path starts with exactly the given segments.
	pub fn starts_with_segments<S: AsRef<str>>(&self, prefix: &[S]) -> bool {
		prefix.len() <= self.segments.len()
			&& prefix
				.iter()
				.zip(&self.segments)
				.all(|(expected, actual)| expected.as_ref() == actual)
	}

	/// Returns the query parameters in their original order.
	pub fn query_parameters(&self) -> &[QueryParameter] {
		&self.query_parameters
	}

	/// Returns the first query parameter with the given name.
	pub fn query_parameter(&self, name: &str) -> Option<&QueryParameter> {
		self.query_parameters.iter().find(|p| p.name == name)
	}

	/// Returns the value of the first query parameter with the given name.
	pub fn query_parameter_value(&self, name: &str) -> Option<&str> {
		self.query_parameter(name).map(QueryParameter::value)
	}

	/// Appends a query parameter, keeping existing ones with the same name.
	pub fn add_query_parameter(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> &mut Self {
		self.query_parameters.push(QueryParameter::new(name, value));
		self
	}

	/// Appends a bare `name` query parameter without value.
	pub fn add_query_flag(&mut self, name: impl Into<String>) -> &mut Self {
		self.query_parameters.push(QueryParameter::flag(name));
		self
	}

	/// Replaces all query parameters with the given name by a single one.
	pub fn set_query_parameter(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> &mut Self {
		let name = name.into();
		self.remove_query_parameters(&name);
		self.query_parameters.push(QueryParameter::new(name, value));
		self
	}

	/// Removes every query parameter with the given name.
	pub fn remove_query_parameters(&mut self, name: &str) {
		self.query_parameters.retain(|p| p.name != name);
	}
}

impl fmt::Display for Url {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, segment) in self.segments.iter().enumerate() {
			if i > 0 {
				f.write_str("/")?;
			}
			write!(f, "{}", utf8_percent_encode(segment, PATH_SEGMENT))?;
		}
		for (i, parameter) in self.query_parameters.iter().enumerate() {
			f.write_str(if i == 0 { "?" } else { "&" })?;
			write!(f, "{}", parameter)?;
		}
		Ok(())
	}
}

impl FromStr for Url {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl From<&str> for Url {
	fn from(s: &str) -> Self {
		Self::parse(s)
	}
}

fn decode_path_segment(segment: &str) -> String {
	percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Decodes a query component: `+` is a space, then percent escapes apply.
pub(crate) fn decode_query_component(component: &str) -> String {
	let spaced = component.replace('+', " ");
	percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn parse_query(query: &str) -> Vec<QueryParameter> {
	query
		.split('&')
		.filter(|pair| !pair.is_empty())
		.map(|pair| match pair.split_once('=') {
			// Split on first '=' only so values may carry '=' (e.g. Base64)
			Some((name, value)) => {
				QueryParameter::new(decode_query_component(name), decode_query_component(value))
			}
			None => QueryParameter::flag(decode_query_component(pair)),
		})
		.collect()
}
