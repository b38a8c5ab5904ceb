//! Shared test doubles: in-memory pages and a page source.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use trellis_conf::MapperSettings;
use trellis_core::PageParameters;
use trellis_mapper::{
	ComponentPath, ListenerInterfaceRegistry, MapperContext, MapperError, MapperResult, PageClass,
	PageRef, PageSource, RequestablePage,
};

/// A page with fixed identity and a fixed set of component paths.
#[derive(Debug, Clone)]
pub struct MockPage {
	pub class: PageClass,
	pub id: u32,
	pub render_count: u32,
	pub page_map_name: Option<String>,
	pub created_bookmarkable: bool,
	pub stateless: bool,
	pub components: Vec<String>,
}

impl MockPage {
	pub fn new(class: &str, id: u32) -> Self {
		Self {
			class: PageClass::from(class),
			id,
			render_count: 0,
			page_map_name: None,
			created_bookmarkable: false,
			stateless: false,
			components: Vec::new(),
		}
	}

	pub fn render_count(mut self, render_count: u32) -> Self {
		self.render_count = render_count;
		self
	}

	pub fn page_map(mut self, name: &str) -> Self {
		self.page_map_name = Some(name.to_string());
		self
	}

	pub fn bookmarkable(mut self) -> Self {
		self.created_bookmarkable = true;
		self
	}

	pub fn stateless(mut self) -> Self {
		self.stateless = true;
		self
	}

	pub fn component(mut self, path: &str) -> Self {
		self.components.push(path.to_string());
		self
	}

	pub fn into_ref(self) -> PageRef {
		Arc::new(self)
	}
}

impl RequestablePage for MockPage {
	fn page_id(&self) -> u32 {
		self.id
	}

	fn page_class(&self) -> PageClass {
		self.class.clone()
	}

	fn render_count(&self) -> u32 {
		self.render_count
	}

	fn page_map_name(&self) -> Option<&str> {
		self.page_map_name.as_deref()
	}

	fn was_created_bookmarkable(&self) -> bool {
		self.created_bookmarkable
	}

	fn is_page_stateless(&self) -> bool {
		self.stateless
	}

	fn contains_component(&self, path: &ComponentPath) -> bool {
		self.components.iter().any(|component| *component == path.to_string())
	}
}

/// Page store keyed by id; new pages get ids from 100 upwards.
#[derive(Debug, Default)]
pub struct MockPageSource {
	classes: Vec<PageClass>,
	pages: Mutex<HashMap<u32, PageRef>>,
	next_id: AtomicU32,
}

impl MockPageSource {
	pub fn new(classes: &[&str]) -> Self {
		Self {
			classes: classes.iter().map(|name| PageClass::from(*name)).collect(),
			pages: Mutex::new(HashMap::new()),
			next_id: AtomicU32::new(100),
		}
	}

	pub fn store(&self, page: MockPage) -> PageRef {
		let page = page.into_ref();
		self.pages.lock().unwrap().insert(page.page_id(), page.clone());
		page
	}
}

impl PageSource for MockPageSource {
	fn new_page_instance(&self, class: &PageClass, _parameters: &PageParameters) -> MapperResult<PageRef> {
		if !self.classes.contains(class) {
			return Err(MapperError::PageClassNotFound(class.to_string()));
		}
		let id = self.next_id.fetch_add(1, Ordering::SeqCst);
		Ok(self.store(MockPage::new(class.name(), id).bookmarkable()))
	}

	fn page_instance(
		&self,
		page_id: u32,
		_class: Option<&PageClass>,
		_parameters: &PageParameters,
		render_count: Option<u32>,
	) -> MapperResult<PageRef> {
		let page = self
			.pages
			.lock()
			.unwrap()
			.get(&page_id)
			.cloned()
			.ok_or(MapperError::PageNotFound(page_id))?;
		match render_count {
			Some(requested) if requested > page.render_count() => Err(MapperError::PageExpired {
				page_id,
				render_count: requested,
			}),
			_ => Ok(page),
		}
	}

	fn resolve_page_class(&self, name: &str) -> Option<PageClass> {
		self.classes.iter().find(|class| class.name() == name).cloned()
	}
}

pub const PAGE_CLASSES: &[&str] = &["HomePage", "UserPage", "SearchPage"];

/// Default settings, built-in listeners, a [`MockPageSource`] over [`PAGE_CLASSES`].
pub fn context() -> (MapperContext, Arc<MockPageSource>) {
	let source = Arc::new(MockPageSource::new(PAGE_CLASSES));
	let context = MapperContext::new(
		MapperSettings::default(),
		ListenerInterfaceRegistry::with_builtins(),
		source.clone(),
	);
	(context, source)
}
