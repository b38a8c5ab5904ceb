//! A page class mounted at a fixed path.

use std::collections::HashSet;

use trellis_core::Url;

use super::bookmarkable::{MountStrategy, UrlInfo};
use super::{decode_query, encode_query, path_segments};
use crate::context::MapperContext;
use crate::page::PageClass;
use crate::request::Request;
use crate::{MapperError, MapperResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum MountSegment {
	Literal(String),
	Placeholder(String),
}

/// Mounts one page class at a path such as `/users/{id}/profile`.
///
/// `{name}` segments bind the matching URL segment to the named page
/// parameter `name`. Segments after the mount path become indexed
/// parameters.
///
/// # Examples
///
/// ```
/// use trellis_mapper::MountedStrategy;
///
/// let strategy = MountedStrategy::new("/users/{id}/profile", "UserProfile").unwrap();
/// assert_eq!(strategy.placeholders().collect::<Vec<_>>(), ["id"]);
/// assert!(MountedStrategy::new("/users/{id}/{id}", "UserProfile").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MountedStrategy {
	mount_path: String,
	segments: Vec<MountSegment>,
	page_class: PageClass,
}

impl MountedStrategy {
	/// Mounts `page_class` at `mount_path`.
	///
	/// # Errors
	///
	/// [`MapperError::InvalidMountPath`] for an empty path, empty segments,
	/// malformed or repeated placeholders.
	pub fn new(mount_path: &str, page_class: impl Into<PageClass>) -> MapperResult<Self> {
		let invalid = |reason: &str| MapperError::InvalidMountPath {
			path: mount_path.to_string(),
			reason: reason.to_string(),
		};

		let trimmed = mount_path.trim_matches('/');
		if trimmed.is_empty() {
			return Err(invalid("mount path is empty"));
		}

		let mut names = HashSet::new();
		let mut segments = Vec::new();
		for segment in trimmed.split('/') {
			if segment.is_empty() {
				return Err(invalid("empty segment"));
			}
			match segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
				Some(name) => {
					if name.is_empty() || name.contains(['{', '}']) {
						return Err(invalid("malformed placeholder"));
					}
					if !names.insert(name) {
						return Err(invalid("placeholder used twice"));
					}
					segments.push(MountSegment::Placeholder(name.to_string()));
				}
				None if segment.contains(['{', '}']) => return Err(invalid("malformed placeholder")),
				None => segments.push(MountSegment::Literal(segment.to_string())),
			}
		}

		Ok(Self {
			mount_path: mount_path.to_string(),
			segments,
			page_class: page_class.into(),
		})
	}

	/// The mount path as given.
	pub fn mount_path(&self) -> &str {
		&self.mount_path
	}

	/// The mounted page class.
	pub fn page_class(&self) -> &PageClass {
		&self.page_class
	}

	/// Placeholder names in path order.
	pub fn placeholders(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|segment| match segment {
			MountSegment::Placeholder(name) => Some(name.as_str()),
			MountSegment::Literal(_) => None,
		})
	}

	fn literal_count(&self) -> usize {
		self.segments
			.iter()
			.filter(|segment| matches!(segment, MountSegment::Literal(_)))
			.count()
	}

	fn matches(&self, segments: &[String]) -> bool {
		segments.len() >= self.segments.len()
			&& self.segments.iter().zip(segments).all(|(mount, actual)| match mount {
				MountSegment::Literal(literal) => literal == actual,
				MountSegment::Placeholder(_) => !actual.is_empty(),
			})
	}
}

impl MountStrategy for MountedStrategy {
	fn parse_request(&self, request: &Request, _context: &MapperContext) -> Option<UrlInfo> {
		let url = request.url();
		let segments = path_segments(url);
		if !self.matches(segments) {
			return None;
		}

		let (info, query) = decode_query(url);
		let mut parameters = trellis_core::PageParameters::new();
		for (mount, actual) in self.segments.iter().zip(segments) {
			if let MountSegment::Placeholder(name) = mount {
				parameters.add(name.as_str(), actual.as_str());
			}
		}
		parameters.merge(&query);
		for segment in segments[self.segments.len()..]
			.iter()
			.filter(|segment| !segment.is_empty())
		{
			parameters.push_indexed(segment.as_str());
		}
		Some(UrlInfo::new(info, self.page_class.clone(), parameters))
	}

	fn build_url(&self, info: &UrlInfo, _context: &MapperContext) -> Option<Url> {
		let mut parameters = info.page_parameters().clone();
		let mut url = Url::new();
		for segment in &self.segments {
			match segment {
				MountSegment::Literal(literal) => {
					url.push_segment(literal.as_str());
				}
				MountSegment::Placeholder(name) => {
					let Some(value) = parameters.take_first(name).filter(|value| !value.is_empty()) else {
						tracing::debug!(
							mount_path = %self.mount_path,
							placeholder = %name,
							"missing value for mount placeholder"
						);
						return None;
					};
					url.push_segment(value);
				}
			}
		}
		for segment in parameters.indexed_values() {
			url.push_segment(segment.as_str());
		}
		encode_query(&mut url, info.page_component_info(), &parameters);
		Some(url)
	}

	fn page_must_have_been_created_bookmarkable(&self) -> bool {
		false
	}

	fn check_page_class(&self, page_class: &PageClass) -> bool {
		*page_class == self.page_class
	}

	fn compatibility_score(&self, request: &Request, _context: &MapperContext) -> i32 {
		if self.matches(path_segments(request.url())) {
			i32::try_from(self.literal_count()).unwrap_or(i32::MAX)
		} else {
			0
		}
	}
}
