use std::fmt;

use super::{COMPONENT_SEPARATOR, ComponentInfo, PageInfo};
use crate::listener::ListenerInterfaceRegistry;
use crate::{MapperError, MapperResult};

/// A page info with an optional callback target.
///
/// # Examples
///
/// ```
/// use trellis_mapper::PageComponentInfo;
///
/// let info = PageComponentInfo::parse("abc.4.5-ILinkListener-a-b-c").unwrap();
/// assert_eq!(info.page_info().page_id(), Some(4));
///
/// let component = info.component_info().unwrap();
/// assert_eq!(component.render_count(), 5);
/// assert_eq!(component.component_path().to_string(), "a:b:c");
/// assert_eq!(info.to_string(), "abc.4.5-ILinkListener-a-b-c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PageComponentInfo {
	page_info: PageInfo,
	component_info: Option<ComponentInfo>,
}

impl PageComponentInfo {
	/// Pairs a page info with a component info.
	///
	/// The component's render count wins over the page info's, since both
	/// share one field on the wire.
	///
	/// # Errors
	///
	/// [`MapperError::ComponentWithoutPage`] when a component info is given
	/// and the page info has no page id.
	pub fn new(page_info: PageInfo, component_info: Option<ComponentInfo>) -> MapperResult<Self> {
		let page_info = match &component_info {
			Some(_) if page_info.page_id().is_none() => return Err(MapperError::ComponentWithoutPage),
			Some(component) => page_info.with_render_count(component.render_count()),
			None => page_info,
		};
		Ok(Self {
			page_info,
			component_info,
		})
	}

	/// Hybrid info without a callback target.
	pub fn from_page_info(page_info: PageInfo) -> Self {
		Self {
			page_info,
			component_info: None,
		}
	}

	/// The page part.
	pub fn page_info(&self) -> &PageInfo {
		&self.page_info
	}

	/// The callback part.
	pub fn component_info(&self) -> Option<&ComponentInfo> {
		self.component_info.as_ref()
	}

	/// Returns `true` when the info encodes to an empty token.
	pub fn is_empty(&self) -> bool {
		self.page_info.is_empty() && self.component_info.is_none()
	}

	/// Decodes a token syntactically; interface names are not checked.
	pub fn parse(token: &str) -> Option<Self> {
		match token.split_once(COMPONENT_SEPARATOR) {
			Some((page_part, component_part)) => {
				let page_info = PageInfo::parse(page_part)?;
				page_info.page_id()?;
				let component_info = ComponentInfo::parse(page_info.render_count(), component_part)?;
				Self::new(page_info, Some(component_info)).ok()
			}
			None => PageInfo::parse(token).map(Self::from_page_info),
		}
	}

	/// Like [`parse`](Self::parse), also requiring a registered interface.
	pub fn decode(token: &str, registry: &ListenerInterfaceRegistry) -> Option<Self> {
		Self::parse(token).filter(|info| {
			info.component_info()
				.is_none_or(|component| registry.resolve(component.listener_interface()).is_some())
		})
	}
}

impl fmt::Display for PageComponentInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.page_info)?;
		if let Some(component) = &self.component_info {
			write!(f, "{}{}", COMPONENT_SEPARATOR, component)?;
		}
		Ok(())
	}
}
