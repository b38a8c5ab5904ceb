//! `/{namespace}/{bookmarkable}/{PageClass}[/indexed...]?[token][&params]`

use trellis_core::Url;

use super::bookmarkable::{MountStrategy, UrlInfo};
use super::{decode_query, encode_query, path_segments};
use crate::context::MapperContext;
use crate::request::Request;

/// Reaches any page class by name, without an explicit mount.
///
/// Only pages created from a bookmarkable URL get hybrid URLs here; other
/// pages are left to the page-instance mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericBookmarkableStrategy;

impl GenericBookmarkableStrategy {
	/// Creates the strategy.
	pub fn new() -> Self {
		Self
	}

	fn matches_prefix(url: &Url, context: &MapperContext) -> bool {
		matches!(
			path_segments(url),
			[namespace, identifier, class, ..]
				if namespace == context.namespace()
					&& identifier == context.bookmarkable_identifier()
					&& !class.is_empty()
		)
	}
}

impl MountStrategy for GenericBookmarkableStrategy {
	fn parse_request(&self, request: &Request, context: &MapperContext) -> Option<UrlInfo> {
		let url = request.url();
		if !Self::matches_prefix(url, context) {
			return None;
		}
		let segments = path_segments(url);
		let Some(page_class) = context.resolve_page_class(&segments[2]) else {
			tracing::debug!(class = %segments[2], "no page class for bookmarkable URL");
			return None;
		};

		let (info, mut parameters) = decode_query(url);
		for segment in segments[3..].iter().filter(|segment| !segment.is_empty()) {
			parameters.push_indexed(segment.as_str());
		}
		Some(UrlInfo::new(info, page_class, parameters))
	}

	fn build_url(&self, info: &UrlInfo, context: &MapperContext) -> Option<Url> {
		let mut url = Url::from_segments([
			context.namespace(),
			context.bookmarkable_identifier(),
			info.page_class().name(),
		]);
		for segment in info.page_parameters().indexed_values() {
			url.push_segment(segment.as_str());
		}
		encode_query(&mut url, info.page_component_info(), info.page_parameters());
		Some(url)
	}

	fn page_must_have_been_created_bookmarkable(&self) -> bool {
		true
	}

	fn compatibility_score(&self, request: &Request, context: &MapperContext) -> i32 {
		i32::from(Self::matches_prefix(request.url(), context))
	}
}
