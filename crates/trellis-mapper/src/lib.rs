//! Bookmarkable URL mapping for Trellis.
//!
//! This crate translates between request handlers and URLs:
//!
//! - [`info`]: the `[pageMap.]pageId[.renderCount][-Interface-path...]` token
//! - [`listener`]: listener interfaces and their registry
//! - [`mapper`]: the bookmarkable engine, mount strategies, the
//!   page-instance mapper and the mapper chain
//! - [`cycle`]: processing of one request through the mappers
//!
//! # Quick Start
//!
//! ```rust
//! use trellis_mapper::{PageComponentInfo, PageInfo};
//!
//! let info = PageComponentInfo::parse("pm1.15.4").unwrap();
//! assert_eq!(info.page_info(), &PageInfo::new(Some("pm1"), Some(15), 4).unwrap());
//! assert_eq!(info.to_string(), "pm1.15.4");
//! ```
//!
//! Mappers share a [`MapperContext`]: settings, the listener registry and the
//! [`PageSource`] that creates and looks up pages. Parsing failures are
//! reported as `None` so that a [`CompoundRequestMapper`] can try the next
//! mapper; state mismatches surface as [`MapperError`]s when the handler
//! responds.

pub mod context;
pub mod cycle;
pub mod error;
pub mod handler;
pub mod info;
pub mod listener;
pub mod mapper;
pub mod page;
pub mod provider;
pub mod request;

pub use context::MapperContext;
pub use cycle::{
	ExceptionMapper, HandlerExecutor, RequestCycle, RequestCycleContext, RequestCycleListener,
};
pub use error::MapperError;
pub use handler::{
	BookmarkableListenerInterfaceRequestHandler, BookmarkablePageRequestHandler,
	ListenerInterfaceRequestHandler, RenderPageRequestHandler, RequestHandler,
};
pub use info::{ComponentInfo, PageComponentInfo, PageInfo};
pub use listener::{
	BEHAVIOR_LISTENER, BUILTIN_LISTENERS, FORM_SUBMIT_LISTENER, LINK_LISTENER, ListenerInterfaceRegistry,
	ON_CHANGE_LISTENER, REDIRECT_LISTENER, RESOURCE_LISTENER, RequestListenerInterface,
};
pub use mapper::{
	BookmarkableMapper, CompoundRequestMapper, GenericBookmarkableStrategy, HomePageStrategy,
	MountStrategy, MountedStrategy, PageInstanceMapper, RequestMapper, UrlInfo,
};
pub use page::{ComponentPath, PageClass, PageRef, PageSource, RequestablePage};
pub use provider::{PageAndComponentProvider, PageProvider};
pub use request::Request;

/// Result type for mapper operations.
pub type MapperResult<T> = Result<T, MapperError>;
