//! An application assembled from settings through the facade crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};
use trellis::conf::ListenerInterfaceSettings;
use trellis::mapper::{
	BookmarkableListenerInterfaceRequestHandler, PageAndComponentProvider, PageProvider, RenderPageRequestHandler,
	RequestListenerInterface,
};
use trellis::prelude::*;

#[derive(Debug)]
struct Page {
	class: PageClass,
	id: u32,
	render_count: u32,
}

impl RequestablePage for Page {
	fn page_id(&self) -> u32 {
		self.id
	}

	fn page_class(&self) -> PageClass {
		self.class.clone()
	}

	fn render_count(&self) -> u32 {
		self.render_count
	}

	fn was_created_bookmarkable(&self) -> bool {
		true
	}
}

#[derive(Default)]
struct Store {
	pages: Mutex<HashMap<u32, PageRef>>,
}

impl PageSource for Store {
	fn new_page_instance(&self, class: &PageClass, _parameters: &PageParameters) -> MapperResult<PageRef> {
		let mut pages = self.pages.lock().unwrap();
		let id = u32::try_from(pages.len()).unwrap();
		let page: PageRef = Arc::new(Page {
			class: class.clone(),
			id,
			render_count: 0,
		});
		pages.insert(id, page.clone());
		Ok(page)
	}

	fn page_instance(
		&self,
		page_id: u32,
		_class: Option<&PageClass>,
		_parameters: &PageParameters,
		_render_count: Option<u32>,
	) -> MapperResult<PageRef> {
		self.pages
			.lock()
			.unwrap()
			.get(&page_id)
			.cloned()
			.ok_or(MapperError::PageNotFound(page_id))
	}

	fn resolve_page_class(&self, name: &str) -> Option<PageClass> {
		["Home", "Article"].contains(&name).then(|| PageClass::from(name))
	}
}

#[fixture]
fn application() -> (CompoundRequestMapper, Arc<Store>) {
	let settings = MapperSettings::from_toml_str(
		r#"
		namespace = "app"

		[[listener_interfaces]]
		name = "IDragListener"
		"#,
	)
	.unwrap();
	let store = Arc::new(Store::default());
	let context = MapperContext::from_settings(settings, store.clone()).unwrap();

	let mapper = CompoundRequestMapper::new()
		.with(BookmarkableMapper::new(
			MountedStrategy::new("/articles/{slug}", "Article").unwrap(),
			context.clone(),
		))
		.with(BookmarkableMapper::new(HomePageStrategy::new("Home"), context.clone()))
		.with(BookmarkableMapper::new(GenericBookmarkableStrategy::new(), context.clone()))
		.with(PageInstanceMapper::new(context));
	(mapper, store)
}

#[rstest]
fn test_bookmarkable_then_hybrid_then_listener(application: (CompoundRequestMapper, Arc<Store>)) {
	let (mapper, _store) = application;

	// first visit creates the page
	let Some(RequestHandler::RenderPage(first)) = mapper.map_request(&Request::parse("articles/rust")) else {
		panic!("article not mapped");
	};
	let page = first.page().unwrap();
	assert_eq!(page.page_class(), PageClass::from("Article"));
	assert_eq!(first.page_parameters().get("slug"), Some("rust"));

	// the rendered page links back to itself as a hybrid URL
	let provider = PageProvider::from_page(page).with_parameters(first.page_parameters().clone());
	let hybrid = mapper
		.map_handler(&RenderPageRequestHandler::new(provider.clone()).into())
		.unwrap();
	assert_eq!(hybrid.to_string(), "articles/rust?0");

	// callbacks use a listener interface declared in settings
	let callback = BookmarkableListenerInterfaceRequestHandler::new(
		PageAndComponentProvider::new(provider, ComponentPath::parse("list:item").unwrap()),
		RequestListenerInterface::new("IDragListener", false),
		None,
	);
	let callback = mapper.map_handler(&callback.into()).unwrap();
	assert_eq!(callback.to_string(), "articles/rust?0-IDragListener-list-item");

	let Some(RequestHandler::ListenerInterface(listener)) = mapper.map_request(&Request::new(callback)) else {
		panic!("callback not mapped");
	};
	assert_eq!(listener.listener_interface().name(), "IDragListener");
	assert_eq!(listener.page().unwrap().page_id(), 0);
}

#[rstest]
#[case("", Some("Home"))]
#[case("app/bookmarkable/Article", Some("Article"))]
#[case("app/bookmarkable/Missing", None)]
#[case("wicket/page?1", None)]
fn test_namespace_from_settings(
	application: (CompoundRequestMapper, Arc<Store>),
	#[case] url: &str,
	#[case] class: Option<&str>,
) {
	let (mapper, _store) = application;

	let handler = mapper.map_request(&Request::parse(url));

	let mapped = match handler {
		Some(RequestHandler::RenderPage(handler)) => {
			handler.page_provider().page_class().map(|class| class.name().to_string())
		}
		_ => None,
	};
	assert_eq!(mapped.as_deref(), class);
}

#[rstest]
fn test_invalid_settings_are_rejected() {
	let mut settings = MapperSettings::default();
	settings.listener_interfaces.push(ListenerInterfaceSettings {
		name: "ILinkListener".to_string(),
		renders_page: true,
	});

	let result = MapperContext::from_settings(settings, Arc::new(Store::default()));

	assert_eq!(
		result.unwrap_err(),
		MapperError::DuplicateListenerInterface("ILinkListener".to_string())
	);
}
