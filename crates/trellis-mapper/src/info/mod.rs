//! The page/component info token carried in mapper URLs.
//!
//! The token is the first query parameter of framework URLs:
//!
//! | form | token |
//! |---|---|
//! | bookmarkable | none, or `pageMap` |
//! | hybrid | `[pageMap.]pageId[.renderCount]` |
//! | listener | `[pageMap.]pageId[.renderCount]-Interface[.behaviorIndex]-seg-seg...` |
//!
//! Render counts of zero are omitted. Inside component ids `~` and `-` are
//! escaped as `~~` and `~-`.

mod component_info;
mod page_component_info;
mod page_info;

pub use component_info::ComponentInfo;
pub use page_component_info::PageComponentInfo;
pub use page_info::PageInfo;

/// Separates the fields of a page info.
pub const INFO_SEPARATOR: char = '.';

/// Separates the page info, the interface and each component id.
pub const COMPONENT_SEPARATOR: char = '-';

/// Escape character for component ids.
pub const ESCAPE: char = '~';

/// Strict decimal parse: ASCII digits only, no sign.
pub(crate) fn parse_number(field: &str) -> Option<u32> {
	if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	field.parse().ok()
}
