//! `/{namespace}/{page}[/ignored...]?token[&params]`

use trellis_core::{PageParameters, Url};

use super::{RequestMapper, decode_query, encode_query, path_segments};
use crate::context::MapperContext;
use crate::MapperResult;
use crate::handler::{ListenerInterfaceRequestHandler, RenderPageRequestHandler, RequestHandler};
use crate::info::{ComponentInfo, PageComponentInfo, PageInfo};
use crate::page::PageRef;
use crate::provider::{PageAndComponentProvider, PageProvider};
use crate::request::Request;

/// Maps URLs of existing page instances, independent of the page class.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use trellis_core::PageParameters;
/// # use trellis_conf::MapperSettings;
/// # use trellis_mapper::*;
/// # struct NoPages;
/// # impl PageSource for NoPages {
/// #     fn new_page_instance(&self, c: &PageClass, _: &PageParameters) -> MapperResult<PageRef> {
/// #         Err(MapperError::PageClassNotFound(c.to_string()))
/// #     }
/// #     fn page_instance(&self, id: u32, _: Option<&PageClass>, _: &PageParameters, _: Option<u32>) -> MapperResult<PageRef> {
/// #         Err(MapperError::PageNotFound(id))
/// #     }
/// #     fn resolve_page_class(&self, _: &str) -> Option<PageClass> { None }
/// # }
/// let context = MapperContext::from_settings(MapperSettings::default(), Arc::new(NoPages)).unwrap();
/// let mapper = PageInstanceMapper::new(context);
///
/// let Some(RequestHandler::RenderPage(handler)) = mapper.map_request(&Request::parse("wicket/page?4.5")) else {
///     panic!("expected a render-page handler");
/// };
/// assert_eq!(handler.page_provider().page_id(), Some(4));
/// assert_eq!(handler.page_provider().render_count(), Some(5));
///
/// assert!(mapper.map_request(&Request::parse("wicket/page?abc")).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PageInstanceMapper {
	context: MapperContext,
}

impl PageInstanceMapper {
	/// Creates the mapper.
	pub fn new(context: MapperContext) -> Self {
		Self { context }
	}

	fn matches_prefix(&self, url: &Url) -> bool {
		matches!(
			path_segments(url),
			[namespace, identifier, ..]
				if namespace == self.context.namespace() && identifier == self.context.page_identifier()
		)
	}

	fn provider(&self, page_id: u32, render_count: u32, parameters: PageParameters) -> PageProvider {
		PageProvider::for_instance(page_id, None, parameters, Some(render_count))
			.with_page_source(self.context.page_source().clone())
	}

	fn build_url(&self, info: PageComponentInfo) -> Url {
		let mut url = Url::from_segments([self.context.namespace(), self.context.page_identifier()]);
		encode_query(&mut url, Some(&info), &PageParameters::new());
		url
	}

	fn resolve(&self, page: MapperResult<PageRef>) -> Option<PageRef> {
		match page {
			Ok(page) if page.is_page_stateless() => None,
			Ok(page) => Some(page),
			Err(error) => {
				tracing::debug!(%error, "page for handler unavailable");
				None
			}
		}
	}
}

impl RequestMapper for PageInstanceMapper {
	fn map_request(&self, request: &Request) -> Option<RequestHandler> {
		let url = request.url();
		if !self.matches_prefix(url) {
			return None;
		}
		let (info, parameters) = decode_query(url);
		let info = info?;
		let page_id = info.page_info().page_id()?;

		match info.component_info() {
			None => {
				let provider = self.provider(page_id, info.page_info().render_count(), parameters);
				Some(RenderPageRequestHandler::new(provider).into())
			}
			Some(component) => {
				let Some(interface) = self.context.listener_interface(component.listener_interface()) else {
					tracing::warn!(
						listener_interface = component.listener_interface(),
						page_id,
						"unknown listener interface in request URL"
					);
					return None;
				};
				let provider = PageAndComponentProvider::new(
					self.provider(page_id, component.render_count(), parameters),
					component.component_path().clone(),
				);
				Some(
					ListenerInterfaceRequestHandler::new(provider, interface.clone(), component.behavior_index())
						.into(),
				)
			}
		}
	}

	fn map_handler(&self, handler: &RequestHandler) -> Option<Url> {
		match handler {
			RequestHandler::RenderPage(handler) => {
				let page = self.resolve(handler.page())?;
				let info = PageComponentInfo::from_page_info(PageInfo::from_page(page.as_ref()));
				Some(self.build_url(info))
			}
			RequestHandler::ListenerInterface(handler) => {
				let page = self.resolve(handler.page())?;
				let name = self.context.listener_interface_name(handler.listener_interface())?;
				let component = ComponentInfo::new(
					page.render_count(),
					name,
					handler.component_path().clone(),
					handler.behavior_index(),
				);
				let info = PageComponentInfo::new(PageInfo::from_page(page.as_ref()), Some(component)).ok()?;
				Some(self.build_url(info))
			}
			RequestHandler::BookmarkablePage(_) | RequestHandler::BookmarkableListenerInterface(_) => None,
		}
	}

	fn compatibility_score(&self, request: &Request) -> i32 {
		if self.matches_prefix(request.url()) { 2 } else { 0 }
	}
}
