//! Request mappers: URL to handler and back.
//!
//! - [`BookmarkableMapper`]: the bookmarkable/hybrid/listener engine over a
//!   [`MountStrategy`]
//! - [`PageInstanceMapper`]: `/{namespace}/{page}?token` URLs
//! - [`CompoundRequestMapper`]: a chain of mappers ordered by score

mod bookmarkable;
mod compound;
mod generic;
mod home;
mod mounted;
mod page_instance;

pub use bookmarkable::{BookmarkableMapper, MountStrategy, UrlInfo};
pub use compound::CompoundRequestMapper;
pub use generic::GenericBookmarkableStrategy;
pub use home::HomePageStrategy;
pub use mounted::MountedStrategy;
pub use page_instance::PageInstanceMapper;

use trellis_core::{PageParameters, Url};

use crate::handler::RequestHandler;
use crate::info::PageComponentInfo;
use crate::request::Request;

/// Two-way mapping between requests and handlers.
///
/// Both directions return `None` when the input does not belong to the
/// mapper, which lets a chain try the next one.
pub trait RequestMapper: Send + Sync {
	/// Finds the handler for `request`.
	fn map_request(&self, request: &Request) -> Option<RequestHandler>;

	/// Renders the URL that maps back to `handler`.
	fn map_handler(&self, handler: &RequestHandler) -> Option<Url>;

	/// How well the mapper fits `request`; higher scores are tried first.
	fn compatibility_score(&self, request: &Request) -> i32;
}

/// Path segments without the empty segment a leading `/` produces.
pub(crate) fn path_segments(url: &Url) -> &[String] {
	match url.segments() {
		[first, rest @ ..] if first.is_empty() => rest,
		segments => segments,
	}
}

/// Splits the query into the info token and the named page parameters.
///
/// Only a first parameter written without `=` is considered a token, and
/// only if it parses. Otherwise every query parameter is a page parameter.
pub(crate) fn decode_query(url: &Url) -> (Option<PageComponentInfo>, PageParameters) {
	let parameters = url.query_parameters();
	let info = parameters
		.first()
		.filter(|first| !first.has_value())
		.and_then(|first| PageComponentInfo::parse(first.name()));
	let skip = usize::from(info.is_some());

	let mut named = PageParameters::new();
	for parameter in &parameters[skip..] {
		named.add(parameter.name(), parameter.value());
	}
	(info, named)
}

/// Appends the info token (when non-empty) and the named page parameters.
///
/// The token is the only parameter written without `=`; empty page
/// parameter values are written as `name=`.
pub(crate) fn encode_query(url: &mut Url, info: Option<&PageComponentInfo>, parameters: &PageParameters) {
	if let Some(info) = info.filter(|info| !info.is_empty()) {
		url.add_query_flag(info.to_string());
	}
	for (name, value) in parameters.named() {
		url.add_query_parameter(name, value);
	}
}
