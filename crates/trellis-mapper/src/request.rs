//! The inbound request as seen by the mappers.

use trellis_core::Url;

/// An inbound request, reduced to its URL relative to the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
	url: Url,
}

impl Request {
	/// Wraps a parsed URL.
	pub fn new(url: Url) -> Self {
		Self { url }
	}

	/// Parses `url` into a request.
	pub fn parse(url: &str) -> Self {
		Self::new(Url::parse(url))
	}

	/// The request URL.
	pub fn url(&self) -> &Url {
		&self.url
	}
}

impl From<Url> for Request {
	fn from(url: Url) -> Self {
		Self::new(url)
	}
}

impl From<&str> for Request {
	fn from(url: &str) -> Self {
		Self::parse(url)
	}
}
