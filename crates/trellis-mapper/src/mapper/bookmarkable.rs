//! The bookmarkable mapper engine.
//!
//! A [`MountStrategy`] knows the URL shape of one mount; the engine decides
//! what a decoded URL means and which handlers may be rendered as URLs.

use trellis_core::{PageParameters, Url};

use super::RequestMapper;
use crate::context::MapperContext;
use crate::handler::{
	BookmarkableListenerInterfaceRequestHandler, ListenerInterfaceRequestHandler, RenderPageRequestHandler,
	RequestHandler,
};
use crate::info::{ComponentInfo, PageComponentInfo, PageInfo};
use crate::page::PageClass;
use crate::provider::{PageAndComponentProvider, PageProvider};
use crate::request::Request;

/// What a mount strategy extracted from, or needs for, one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlInfo {
	page_component_info: Option<PageComponentInfo>,
	page_class: PageClass,
	page_parameters: PageParameters,
}

impl UrlInfo {
	/// Creates the record.
	pub fn new(
		page_component_info: Option<PageComponentInfo>,
		page_class: PageClass,
		page_parameters: PageParameters,
	) -> Self {
		Self {
			page_component_info,
			page_class,
			page_parameters,
		}
	}

	/// The info token, if the URL carries one.
	pub fn page_component_info(&self) -> Option<&PageComponentInfo> {
		self.page_component_info.as_ref()
	}

	/// The page class.
	pub fn page_class(&self) -> &PageClass {
		&self.page_class
	}

	/// Indexed and named page parameters.
	pub fn page_parameters(&self) -> &PageParameters {
		&self.page_parameters
	}
}

/// URL shape of one kind of bookmarkable mount.
pub trait MountStrategy: Send + Sync {
	/// Extracts the page class, parameters and token, or `None` when the
	/// URL does not belong to this mount.
	fn parse_request(&self, request: &Request, context: &MapperContext) -> Option<UrlInfo>;

	/// Renders `info` as an URL of this mount.
	fn build_url(&self, info: &UrlInfo, context: &MapperContext) -> Option<Url>;

	/// Whether hybrid URLs are limited to pages created from a bookmarkable URL.
	fn page_must_have_been_created_bookmarkable(&self) -> bool;

	/// Whether pages of `page_class` may be rendered as URLs of this mount.
	fn check_page_class(&self, page_class: &PageClass) -> bool {
		let _ = page_class;
		true
	}

	/// See [`RequestMapper::compatibility_score`].
	fn compatibility_score(&self, request: &Request, context: &MapperContext) -> i32;
}

/// Maps bookmarkable, hybrid and listener URLs of one mount.
///
/// Without a token, or with a token lacking a page id, a request creates a
/// new page. A page id resumes that instance, and a component part invokes
/// a listener on it.
#[derive(Debug, Clone)]
pub struct BookmarkableMapper<S> {
	strategy: S,
	context: MapperContext,
}

impl<S: MountStrategy> BookmarkableMapper<S> {
	/// Creates a mapper for `strategy`.
	pub fn new(strategy: S, context: MapperContext) -> Self {
		Self { strategy, context }
	}

	/// The mount strategy.
	pub fn strategy(&self) -> &S {
		&self.strategy
	}

	/// The shared collaborators.
	pub fn context(&self) -> &MapperContext {
		&self.context
	}

	fn process_bookmarkable(&self, page_class: PageClass, parameters: PageParameters) -> RequestHandler {
		let provider = PageProvider::for_class(page_class, parameters)
			.with_page_source(self.context.page_source().clone());
		RenderPageRequestHandler::new(provider).into()
	}

	fn process_hybrid(
		&self,
		page_info: &PageInfo,
		page_id: u32,
		page_class: PageClass,
		parameters: PageParameters,
	) -> RequestHandler {
		let provider = PageProvider::for_instance(
			page_id,
			Some(page_class),
			parameters,
			Some(page_info.render_count()),
		)
		.with_page_source(self.context.page_source().clone());
		RenderPageRequestHandler::new(provider).into()
	}

	fn process_listener(
		&self,
		page_id: u32,
		component_info: &ComponentInfo,
		page_class: PageClass,
		parameters: PageParameters,
	) -> Option<RequestHandler> {
		let Some(interface) = self.context.listener_interface(component_info.listener_interface()) else {
			tracing::warn!(
				listener_interface = component_info.listener_interface(),
				page_class = %page_class,
				"unknown listener interface in request URL"
			);
			return None;
		};
		let page = PageProvider::for_instance(
			page_id,
			Some(page_class),
			parameters,
			Some(component_info.render_count()),
		)
		.with_page_source(self.context.page_source().clone());
		let provider = PageAndComponentProvider::new(page, component_info.component_path().clone());
		Some(
			ListenerInterfaceRequestHandler::new(
				provider,
				interface.clone(),
				component_info.behavior_index(),
			)
			.into(),
		)
	}

	fn build_url(&self, info: UrlInfo) -> Option<Url> {
		let url = self.strategy.build_url(&info, &self.context);
		if url.is_none() {
			tracing::debug!(page_class = %info.page_class(), "mount strategy could not build URL");
		}
		url
	}

	fn map_render_page(&self, handler: &RenderPageRequestHandler) -> Option<Url> {
		let page = match handler.page() {
			Ok(page) => page,
			Err(error) => {
				tracing::debug!(%error, "page for render-page handler unavailable");
				return None;
			}
		};
		let page_class = page.page_class();
		if !self.strategy.check_page_class(&page_class) {
			return None;
		}
		if self.strategy.page_must_have_been_created_bookmarkable() && !page.was_created_bookmarkable() {
			return None;
		}
		let info = (!page.is_page_stateless())
			.then(|| PageComponentInfo::from_page_info(PageInfo::from_page(page.as_ref())));
		self.build_url(UrlInfo::new(info, page_class, handler.page_parameters().clone()))
	}

	fn map_bookmarkable_listener(&self, handler: &BookmarkableListenerInterfaceRequestHandler) -> Option<Url> {
		let page = match handler.page() {
			Ok(page) => page,
			Err(error) => {
				tracing::debug!(%error, "page for listener handler unavailable");
				return None;
			}
		};
		let page_class = page.page_class();
		if !self.strategy.check_page_class(&page_class) {
			return None;
		}
		let target = handler.target();
		let interface_name = self.context.listener_interface_name(target.listener_interface())?;
		let component_info = ComponentInfo::new(
			page.render_count(),
			interface_name,
			target.component_path().clone(),
			target.behavior_index(),
		);
		let info = PageComponentInfo::new(PageInfo::from_page(page.as_ref()), Some(component_info)).ok()?;
		self.build_url(UrlInfo::new(Some(info), page_class, handler.page_parameters().clone()))
	}
}

impl<S: MountStrategy> RequestMapper for BookmarkableMapper<S> {
	fn map_request(&self, request: &Request) -> Option<RequestHandler> {
		let UrlInfo {
			page_component_info,
			page_class,
			page_parameters,
		} = self.strategy.parse_request(request, &self.context)?;

		let Some(info) = page_component_info else {
			return Some(self.process_bookmarkable(page_class, page_parameters));
		};
		let page_info = info.page_info();
		match (page_info.page_id(), info.component_info()) {
			(None, _) => Some(self.process_bookmarkable(page_class, page_parameters)),
			(Some(page_id), None) => Some(self.process_hybrid(page_info, page_id, page_class, page_parameters)),
			(Some(page_id), Some(component)) => {
				self.process_listener(page_id, component, page_class, page_parameters)
			}
		}
	}

	fn map_handler(&self, handler: &RequestHandler) -> Option<Url> {
		match handler {
			RequestHandler::BookmarkablePage(handler) => {
				if !self.strategy.check_page_class(handler.page_class()) {
					return None;
				}
				let info = PageComponentInfo::from_page_info(PageInfo::default());
				self.build_url(UrlInfo::new(
					Some(info),
					handler.page_class().clone(),
					handler.page_parameters().clone(),
				))
			}
			RequestHandler::RenderPage(handler) => self.map_render_page(handler),
			RequestHandler::BookmarkableListenerInterface(handler) => self.map_bookmarkable_listener(handler),
			RequestHandler::ListenerInterface(_) => None,
		}
	}

	fn compatibility_score(&self, request: &Request) -> i32 {
		self.strategy.compatibility_score(request, &self.context)
	}
}
