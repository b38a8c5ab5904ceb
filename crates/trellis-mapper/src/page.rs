//! Pages, page classes and component paths as seen by the mappers.
//!
//! The component tree itself lives elsewhere; mappers only need a page's
//! identity, its provenance and a way to check that a component path still
//! exists.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use trellis_core::PageParameters;

use crate::{MapperError, MapperResult};

/// Name of a bookmarkable page type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageClass(Arc<str>);

impl PageClass {
	/// Creates a page class from its name.
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self(name.into())
	}

	/// The class name, used as-is in generic bookmarkable URLs.
	pub fn name(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PageClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for PageClass {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

/// Separator between component ids in a [`ComponentPath`].
pub const COMPONENT_PATH_SEPARATOR: char = ':';

/// Path of a component below its page, e.g. `form:items:0:check`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentPath {
	segments: Vec<String>,
}

impl ComponentPath {
	/// Builds a path from component ids.
	///
	/// # Errors
	///
	/// Returns [`MapperError::InvalidComponentPath`] when there are no ids, or
	/// an id is empty or contains `:`.
	pub fn new<I, S>(segments: I) -> MapperResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
		let valid = !segments.is_empty()
			&& segments
				.iter()
				.all(|segment| !segment.is_empty() && !segment.contains(COMPONENT_PATH_SEPARATOR));
		if !valid {
			return Err(MapperError::InvalidComponentPath(
				segments.join(&COMPONENT_PATH_SEPARATOR.to_string()),
			));
		}
		Ok(Self { segments })
	}

	/// Parses a `:` separated path.
	///
	/// # Errors
	///
	/// Same as [`new`](Self::new).
	pub fn parse(path: &str) -> MapperResult<Self> {
		Self::new(path.split(COMPONENT_PATH_SEPARATOR))
	}

	/// Component ids from the page down.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Number of ids in the path (at least one).
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Always `false`; paths have at least one id.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}
}

impl fmt::Display for ComponentPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, segment) in self.segments.iter().enumerate() {
			if index > 0 {
				write!(f, "{}", COMPONENT_PATH_SEPARATOR)?;
			}
			f.write_str(segment)?;
		}
		Ok(())
	}
}

impl FromStr for ComponentPath {
	type Err = MapperError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

/// A page instance that URLs can point back to.
pub trait RequestablePage: Send + Sync + fmt::Debug {
	/// Id of the instance within its session.
	fn page_id(&self) -> u32;

	/// Type of the page.
	fn page_class(&self) -> PageClass;

	/// Number of times the page has been rendered.
	fn render_count(&self) -> u32;

	/// Page map the instance belongs to.
	fn page_map_name(&self) -> Option<&str> {
		None
	}

	/// Whether the instance was created by requesting a bookmarkable URL.
	fn was_created_bookmarkable(&self) -> bool;

	/// Stateless pages are not stored, so URLs never carry their id.
	fn is_page_stateless(&self) -> bool {
		false
	}

	/// Whether `path` still names a component of this page.
	fn contains_component(&self, path: &ComponentPath) -> bool {
		let _ = path;
		true
	}
}

/// Shared handle to a page instance.
pub type PageRef = Arc<dyn RequestablePage>;

/// `Class#id` label used in diagnostics.
pub(crate) fn page_label(page: &dyn RequestablePage) -> String {
	format!("{}#{}", page.page_class(), page.page_id())
}

/// Creates and looks up page instances on behalf of the mappers.
///
/// Implementations own the session page store and decide what happens when
/// a requested instance is gone or has moved on to another render count.
pub trait PageSource: Send + Sync {
	/// Creates a fresh instance of `class`.
	///
	/// # Errors
	///
	/// Any error the page constructor reports.
	fn new_page_instance(&self, class: &PageClass, parameters: &PageParameters) -> MapperResult<PageRef>;

	/// Looks up an existing instance.
	///
	/// `class` and `render_count` are expectations carried by the URL; an
	/// implementation may fall back to a new instance of `class` when the
	/// stored page is missing.
	///
	/// # Errors
	///
	/// [`MapperError::PageNotFound`] or [`MapperError::PageExpired`] when the
	/// instance cannot be resumed.
	fn page_instance(
		&self,
		page_id: u32,
		class: Option<&PageClass>,
		parameters: &PageParameters,
		render_count: Option<u32>,
	) -> MapperResult<PageRef>;

	/// Maps a class name found in an URL to a page class.
	fn resolve_page_class(&self, name: &str) -> Option<PageClass>;
}
