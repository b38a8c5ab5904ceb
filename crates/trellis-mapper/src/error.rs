//! Error types for URL mapping and page resolution.
//!
//! Parsing failures are never reported through [`MapperError`]: an URL that
//! does not fit a mapper yields `None` so the next mapper can be tried. The
//! variants below cover invalid construction input and state mismatches
//! that must reach the request cycle's exception mapper.

use thiserror::Error;

/// Errors raised while building mapper values or resolving pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
	/// Page-map names must contain a non-digit and only ASCII letters, digits or `_`.
	#[error("invalid page map name '{0}': expected letters, digits or '_' with at least one non-digit")]
	InvalidPageMapName(String),

	/// A render count only makes sense for an existing page instance.
	#[error("render count {0} given without a page id")]
	RenderCountWithoutPage(u32),

	/// Listener callbacks always target a concrete page instance.
	#[error("component info requires a page id")]
	ComponentWithoutPage,

	/// Component paths are non-empty `:` separated lists of non-empty names.
	#[error("invalid component path '{0}'")]
	InvalidComponentPath(String),

	/// Listener interface names must be identifiers.
	#[error("invalid listener interface name '{0}'")]
	InvalidListenerName(String),

	/// Each listener interface name can be registered once.
	#[error("listener interface '{0}' is already registered")]
	DuplicateListenerInterface(String),

	/// Mount paths are `/` separated literals and `{name}` placeholders.
	#[error("invalid mount path '{path}': {reason}")]
	InvalidMountPath {
		/// The rejected mount path.
		path: String,
		/// What is wrong with it.
		reason: String,
	},

	/// Mapper settings failed validation.
	#[error("invalid mapper settings: {0}")]
	Settings(String),

	/// A page provider was asked for a page without a page source.
	#[error("no page source available to provide {0}")]
	MissingPageSource(String),

	/// No page class is registered under the name.
	#[error("page class '{0}' not found")]
	PageClassNotFound(String),

	/// The page store does not know the page id.
	#[error("page {0} not found")]
	PageNotFound(u32),

	/// The page exists but no longer at the requested render count.
	#[error("page {page_id} expired (requested render count {render_count})")]
	PageExpired {
		/// Id of the requested page.
		page_id: u32,
		/// Render count carried by the URL.
		render_count: u32,
	},

	/// A callback targets a component that is not part of the page.
	#[error(
		"listener target '{component_path}' does not exist on page {page_path}; the component hierarchy may have changed since the URL was rendered"
	)]
	StaleComponent {
		/// Page class and id, e.g. `HomePage#4`.
		page_path: String,
		/// Component path carried by the URL.
		component_path: String,
	},

	/// A request handler failed while responding.
	#[error("request handler failed: {0}")]
	Handler(String),
}
