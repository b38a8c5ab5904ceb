//! The application root.

use trellis_core::Url;

use super::bookmarkable::{MountStrategy, UrlInfo};
use super::{decode_query, encode_query, path_segments};
use crate::context::MapperContext;
use crate::page::PageClass;
use crate::request::Request;

/// Maps the empty path to the home page class.
#[derive(Debug, Clone)]
pub struct HomePageStrategy {
	page_class: PageClass,
}

impl HomePageStrategy {
	/// Mounts `page_class` at the root.
	pub fn new(page_class: impl Into<PageClass>) -> Self {
		Self {
			page_class: page_class.into(),
		}
	}

	/// The home page class.
	pub fn page_class(&self) -> &PageClass {
		&self.page_class
	}

	fn is_root(url: &Url) -> bool {
		path_segments(url).iter().all(String::is_empty)
	}
}

impl MountStrategy for HomePageStrategy {
	fn parse_request(&self, request: &Request, _context: &MapperContext) -> Option<UrlInfo> {
		let url = request.url();
		if !Self::is_root(url) {
			return None;
		}
		let (info, parameters) = decode_query(url);
		Some(UrlInfo::new(info, self.page_class.clone(), parameters))
	}

	fn build_url(&self, info: &UrlInfo, _context: &MapperContext) -> Option<Url> {
		// The root path has no room for positional values.
		if !info.page_parameters().indexed_values().is_empty() {
			return None;
		}
		let mut url = Url::new();
		encode_query(&mut url, info.page_component_info(), info.page_parameters());
		Some(url)
	}

	fn page_must_have_been_created_bookmarkable(&self) -> bool {
		false
	}

	fn check_page_class(&self, page_class: &PageClass) -> bool {
		*page_class == self.page_class
	}

	fn compatibility_score(&self, request: &Request, _context: &MapperContext) -> i32 {
		i32::from(Self::is_root(request.url()))
	}
}
