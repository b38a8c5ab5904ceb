//! Request handlers produced and consumed by the mappers.

use trellis_core::PageParameters;

use crate::MapperResult;
use crate::listener::RequestListenerInterface;
use crate::page::{ComponentPath, PageClass, PageRef};
use crate::provider::{PageAndComponentProvider, PageProvider};

/// Renders a fresh instance of a bookmarkable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkablePageRequestHandler {
	page_class: PageClass,
	parameters: PageParameters,
}

impl BookmarkablePageRequestHandler {
	/// Creates the handler.
	pub fn new(page_class: PageClass, parameters: PageParameters) -> Self {
		Self {
			page_class,
			parameters,
		}
	}

	/// Class of the page to create.
	pub fn page_class(&self) -> &PageClass {
		&self.page_class
	}

	/// Parameters for the new page.
	pub fn page_parameters(&self) -> &PageParameters {
		&self.parameters
	}
}

/// Renders a page provided by a [`PageProvider`].
#[derive(Debug, Clone)]
pub struct RenderPageRequestHandler {
	provider: PageProvider,
}

impl RenderPageRequestHandler {
	/// Creates the handler.
	pub fn new(provider: PageProvider) -> Self {
		Self { provider }
	}

	/// Renders an already resolved page.
	pub fn from_page(page: PageRef) -> Self {
		Self::new(PageProvider::from_page(page))
	}

	/// The provider.
	pub fn page_provider(&self) -> &PageProvider {
		&self.provider
	}

	/// Page parameters carried by the provider.
	pub fn page_parameters(&self) -> &PageParameters {
		self.provider.page_parameters()
	}

	/// Resolves the page.
	///
	/// # Errors
	///
	/// See [`PageProvider::page`].
	pub fn page(&self) -> MapperResult<PageRef> {
		self.provider.page()
	}
}

/// Invokes a listener interface on a component of a page instance.
#[derive(Debug, Clone)]
pub struct ListenerInterfaceRequestHandler {
	provider: PageAndComponentProvider,
	listener_interface: RequestListenerInterface,
	behavior_index: Option<u32>,
}

impl ListenerInterfaceRequestHandler {
	/// Creates the handler.
	pub fn new(
		provider: PageAndComponentProvider,
		listener_interface: RequestListenerInterface,
		behavior_index: Option<u32>,
	) -> Self {
		Self {
			provider,
			listener_interface,
			behavior_index,
		}
	}

	/// Targets `component_path` on an already resolved page.
	pub fn for_page(
		page: PageRef,
		component_path: ComponentPath,
		listener_interface: RequestListenerInterface,
		behavior_index: Option<u32>,
	) -> Self {
		Self::new(
			PageAndComponentProvider::new(PageProvider::from_page(page), component_path),
			listener_interface,
			behavior_index,
		)
	}

	/// The provider.
	pub fn provider(&self) -> &PageAndComponentProvider {
		&self.provider
	}

	/// Path of the target component.
	pub fn component_path(&self) -> &ComponentPath {
		self.provider.component_path()
	}

	/// Interface to invoke.
	pub fn listener_interface(&self) -> &RequestListenerInterface {
		&self.listener_interface
	}

	/// Target behavior, `None` for the component itself.
	pub fn behavior_index(&self) -> Option<u32> {
		self.behavior_index
	}

	/// Resolves the page.
	///
	/// # Errors
	///
	/// See [`PageProvider::page`].
	pub fn page(&self) -> MapperResult<PageRef> {
		self.provider.page()
	}
}

/// A listener invocation whose URL is rendered in bookmarkable form.
#[derive(Debug, Clone)]
pub struct BookmarkableListenerInterfaceRequestHandler {
	target: ListenerInterfaceRequestHandler,
}

impl BookmarkableListenerInterfaceRequestHandler {
	/// Creates the handler.
	pub fn new(
		provider: PageAndComponentProvider,
		listener_interface: RequestListenerInterface,
		behavior_index: Option<u32>,
	) -> Self {
		Self {
			target: ListenerInterfaceRequestHandler::new(provider, listener_interface, behavior_index),
		}
	}

	/// Targets `component_path` on an already resolved page.
	pub fn for_page(
		page: PageRef,
		component_path: ComponentPath,
		listener_interface: RequestListenerInterface,
		behavior_index: Option<u32>,
	) -> Self {
		Self {
			target: ListenerInterfaceRequestHandler::for_page(
				page,
				component_path,
				listener_interface,
				behavior_index,
			),
		}
	}

	/// The underlying listener invocation.
	pub fn target(&self) -> &ListenerInterfaceRequestHandler {
		&self.target
	}

	/// Page parameters carried by the provider.
	pub fn page_parameters(&self) -> &PageParameters {
		self.target.provider().page_provider().page_parameters()
	}

	/// Resolves the page.
	///
	/// # Errors
	///
	/// See [`PageProvider::page`].
	pub fn page(&self) -> MapperResult<PageRef> {
		self.target.page()
	}
}

/// Every handler kind the mappers understand.
#[derive(Debug, Clone)]
pub enum RequestHandler {
	/// Fresh bookmarkable page.
	BookmarkablePage(BookmarkablePageRequestHandler),
	/// Existing or provided page.
	RenderPage(RenderPageRequestHandler),
	/// Listener invocation on a page instance.
	ListenerInterface(ListenerInterfaceRequestHandler),
	/// Listener invocation rendered as a bookmarkable URL.
	BookmarkableListenerInterface(BookmarkableListenerInterfaceRequestHandler),
}

impl RequestHandler {
	/// Short name of the variant for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::BookmarkablePage(_) => "bookmarkable-page",
			Self::RenderPage(_) => "render-page",
			Self::ListenerInterface(_) => "listener-interface",
			Self::BookmarkableListenerInterface(_) => "bookmarkable-listener-interface",
		}
	}
}

impl From<BookmarkablePageRequestHandler> for RequestHandler {
	fn from(handler: BookmarkablePageRequestHandler) -> Self {
		Self::BookmarkablePage(handler)
	}
}

impl From<RenderPageRequestHandler> for RequestHandler {
	fn from(handler: RenderPageRequestHandler) -> Self {
		Self::RenderPage(handler)
	}
}

impl From<ListenerInterfaceRequestHandler> for RequestHandler {
	fn from(handler: ListenerInterfaceRequestHandler) -> Self {
		Self::ListenerInterface(handler)
	}
}

impl From<BookmarkableListenerInterfaceRequestHandler> for RequestHandler {
	fn from(handler: BookmarkableListenerInterfaceRequestHandler) -> Self {
		Self::BookmarkableListenerInterface(handler)
	}
}
