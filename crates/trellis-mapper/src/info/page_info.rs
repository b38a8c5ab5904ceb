use std::fmt;

use super::{INFO_SEPARATOR, parse_number};
use crate::page::RequestablePage;
use crate::{MapperError, MapperResult};

/// Page identity carried by hybrid and listener URLs.
///
/// A page info without a page id stands for a page that has not been
/// created yet. The render count is `0` in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PageInfo {
	page_map_name: Option<String>,
	page_id: Option<u32>,
	render_count: u32,
}

impl PageInfo {
	/// Validating constructor.
	///
	/// # Errors
	///
	/// [`MapperError::InvalidPageMapName`] for names that could be confused
	/// with a page id or contain separators, and
	/// [`MapperError::RenderCountWithoutPage`] for a non-zero render count
	/// without a page id.
	pub fn new(page_map_name: Option<&str>, page_id: Option<u32>, render_count: u32) -> MapperResult<Self> {
		if let Some(name) = page_map_name
			&& !is_page_map_name(name)
		{
			return Err(MapperError::InvalidPageMapName(name.to_string()));
		}
		if page_id.is_none() && render_count != 0 {
			return Err(MapperError::RenderCountWithoutPage(render_count));
		}
		Ok(Self {
			page_map_name: page_map_name.map(str::to_string),
			page_id,
			render_count,
		})
	}

	/// Page info for an existing page id.
	pub fn for_page_id(page_id: u32, render_count: u32) -> Self {
		Self {
			page_map_name: None,
			page_id: Some(page_id),
			render_count,
		}
	}

	/// Identity of `page`. Page map names that cannot be encoded are dropped.
	pub fn from_page(page: &dyn RequestablePage) -> Self {
		let page_map_name = page.page_map_name().filter(|name| {
			let valid = is_page_map_name(name);
			if !valid {
				tracing::debug!(page_map = name, "page map name cannot be encoded, dropping it");
			}
			valid
		});
		Self {
			page_map_name: page_map_name.map(str::to_string),
			page_id: Some(page.page_id()),
			render_count: page.render_count(),
		}
	}

	/// Page map the page belongs to.
	pub fn page_map_name(&self) -> Option<&str> {
		self.page_map_name.as_deref()
	}

	/// Page instance id.
	pub fn page_id(&self) -> Option<u32> {
		self.page_id
	}

	/// Render count of the page when the URL was produced.
	pub fn render_count(&self) -> u32 {
		self.render_count
	}

	/// Returns `true` when the info encodes to an empty token.
	pub fn is_empty(&self) -> bool {
		self.page_map_name.is_none() && self.page_id.is_none()
	}

	pub(crate) fn with_render_count(mut self, render_count: u32) -> Self {
		self.render_count = render_count;
		self
	}

	/// Decodes `[pageMap.]pageId[.renderCount]` or a lone page map name.
	///
	/// Returns `None` for anything else.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_mapper::PageInfo;
	///
	/// let info = PageInfo::parse("abc.4.5").unwrap();
	/// assert_eq!(info.page_map_name(), Some("abc"));
	/// assert_eq!(info.page_id(), Some(4));
	/// assert_eq!(info.render_count(), 5);
	///
	/// assert_eq!(PageInfo::parse("4").unwrap().render_count(), 0);
	/// assert!(PageInfo::parse("4.x").is_none());
	/// ```
	pub fn parse(token: &str) -> Option<Self> {
		let fields: Vec<&str> = token.split(INFO_SEPARATOR).collect();
		let (page_map_name, page_id, render_count) = match fields.as_slice() {
			[single] => match parse_number(single) {
				Some(id) => (None, Some(id), 0),
				None => (Some(*single), None, 0),
			},
			[first, second] => {
				let id_or_count = parse_number(second)?;
				match parse_number(first) {
					Some(id) => (None, Some(id), id_or_count),
					None => (Some(*first), Some(id_or_count), 0),
				}
			}
			[name, id, count] => (Some(*name), Some(parse_number(id)?), parse_number(count)?),
			_ => return None,
		};
		Self::new(page_map_name, page_id, render_count).ok()
	}
}

impl fmt::Display for PageInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut separate = false;
		if let Some(name) = &self.page_map_name {
			f.write_str(name)?;
			separate = true;
		}
		if let Some(id) = self.page_id {
			if separate {
				write!(f, "{}", INFO_SEPARATOR)?;
			}
			write!(f, "{}", id)?;
			if self.render_count != 0 {
				write!(f, "{}{}", INFO_SEPARATOR, self.render_count)?;
			}
		}
		Ok(())
	}
}

/// Letters, digits or `_`, with at least one non-digit.
fn is_page_map_name(name: &str) -> bool {
	name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
		&& name.chars().any(|c| !c.is_ascii_digit())
}
