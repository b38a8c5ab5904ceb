//! Lazy page resolution for request handlers.
//!
//! A provider records what an URL says about a page and asks the
//! [`PageSource`] for the instance only when a handler needs it.

use std::fmt;
use std::sync::Arc;

use trellis_core::PageParameters;

use crate::page::{ComponentPath, PageClass, PageRef, PageSource, page_label};
use crate::{MapperError, MapperResult};

/// Resolves a page by class (new instance) or by id (existing instance).
#[derive(Clone)]
pub struct PageProvider {
	page_id: Option<u32>,
	page_class: Option<PageClass>,
	parameters: PageParameters,
	render_count: Option<u32>,
	page: Option<PageRef>,
	source: Option<Arc<dyn PageSource>>,
}

impl PageProvider {
	/// A new instance of `class`.
	pub fn for_class(class: PageClass, parameters: PageParameters) -> Self {
		Self {
			page_id: None,
			page_class: Some(class),
			parameters,
			render_count: None,
			page: None,
			source: None,
		}
	}

	/// An existing instance; `class` and `render_count` are expectations.
	pub fn for_instance(
		page_id: u32,
		class: Option<PageClass>,
		parameters: PageParameters,
		render_count: Option<u32>,
	) -> Self {
		Self {
			page_id: Some(page_id),
			page_class: class,
			parameters,
			render_count,
			page: None,
			source: None,
		}
	}

	/// An already resolved page.
	pub fn from_page(page: PageRef) -> Self {
		Self {
			page_id: Some(page.page_id()),
			page_class: Some(page.page_class()),
			parameters: PageParameters::new(),
			render_count: Some(page.render_count()),
			page: Some(page),
			source: None,
		}
	}

	/// Sets the source used by [`page`](Self::page).
	pub fn with_page_source(mut self, source: Arc<dyn PageSource>) -> Self {
		self.source = Some(source);
		self
	}

	/// Page parameters carried by the URL.
	pub fn with_parameters(mut self, parameters: PageParameters) -> Self {
		self.parameters = parameters;
		self
	}

	/// Id of the requested instance; `None` for a new instance.
	pub fn page_id(&self) -> Option<u32> {
		self.page_id
	}

	/// Expected class of the page.
	pub fn page_class(&self) -> Option<&PageClass> {
		self.page_class.as_ref()
	}

	/// Page parameters passed on to the page source.
	pub fn page_parameters(&self) -> &PageParameters {
		&self.parameters
	}

	/// Expected render count of an existing instance.
	pub fn render_count(&self) -> Option<u32> {
		self.render_count
	}

	/// Returns `true` when resolving creates a page.
	pub fn is_new_page_instance(&self) -> bool {
		self.page.is_none() && self.page_id.is_none()
	}

	/// Resolves the page.
	///
	/// # Errors
	///
	/// [`MapperError::MissingPageSource`] when there is neither a page nor a
	/// source, otherwise whatever the source reports.
	pub fn page(&self) -> MapperResult<PageRef> {
		if let Some(page) = &self.page {
			return Ok(Arc::clone(page));
		}
		let source = self
			.source
			.as_ref()
			.ok_or_else(|| MapperError::MissingPageSource(self.describe()))?;
		match (self.page_id, &self.page_class) {
			(Some(page_id), class) => {
				source.page_instance(page_id, class.as_ref(), &self.parameters, self.render_count)
			}
			(None, Some(class)) => source.new_page_instance(class, &self.parameters),
			(None, None) => Err(MapperError::MissingPageSource(self.describe())),
		}
	}

	fn describe(&self) -> String {
		match (&self.page_class, self.page_id) {
			(Some(class), Some(id)) => format!("{}#{}", class, id),
			(Some(class), None) => format!("new {}", class),
			(None, Some(id)) => format!("page #{}", id),
			(None, None) => "an unspecified page".to_string(),
		}
	}
}

impl fmt::Debug for PageProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PageProvider")
			.field("page_id", &self.page_id)
			.field("page_class", &self.page_class)
			.field("parameters", &self.parameters)
			.field("render_count", &self.render_count)
			.field("page", &self.page)
			.field("has_source", &self.source.is_some())
			.finish()
	}
}

/// A page provider plus the path of a component on that page.
#[derive(Debug, Clone)]
pub struct PageAndComponentProvider {
	page: PageProvider,
	component_path: ComponentPath,
}

impl PageAndComponentProvider {
	/// Creates the provider.
	pub fn new(page: PageProvider, component_path: ComponentPath) -> Self {
		Self {
			page,
			component_path,
		}
	}

	/// The page part.
	pub fn page_provider(&self) -> &PageProvider {
		&self.page
	}

	/// Path of the target component.
	pub fn component_path(&self) -> &ComponentPath {
		&self.component_path
	}

	/// Resolves the page. See [`PageProvider::page`].
	///
	/// # Errors
	///
	/// See [`PageProvider::page`].
	pub fn page(&self) -> MapperResult<PageRef> {
		self.page.page()
	}

	/// Resolves the page and checks that the component is still on it.
	///
	/// # Errors
	///
	/// [`MapperError::StaleComponent`] when the page no longer contains the
	/// component, otherwise the errors of [`page`](Self::page).
	pub fn resolve_component(&self) -> MapperResult<PageRef> {
		let page = self.page()?;
		if !page.contains_component(&self.component_path) {
			return Err(MapperError::StaleComponent {
				page_path: page_label(page.as_ref()),
				component_path: self.component_path.to_string(),
			});
		}
		Ok(page)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::page::RequestablePage;
	use rstest::rstest;
	use std::sync::Mutex;

	#[derive(Debug)]
	struct TestPage {
		id: u32,
		components: Vec<&'static str>,
	}

	impl RequestablePage for TestPage {
		fn page_id(&self) -> u32 {
			self.id
		}
		fn page_class(&self) -> PageClass {
			PageClass::from("TestPage")
		}
		fn render_count(&self) -> u32 {
			0
		}
		fn was_created_bookmarkable(&self) -> bool {
			true
		}
		fn contains_component(&self, path: &ComponentPath) -> bool {
			self.components.contains(&path.to_string().as_str())
		}
	}

	#[derive(Default)]
	struct RecordingSource {
		calls: Mutex<Vec<String>>,
	}

	impl PageSource for RecordingSource {
		fn new_page_instance(&self, class: &PageClass, _parameters: &PageParameters) -> MapperResult<PageRef> {
			self.calls.lock().unwrap().push(format!("new {}", class));
			Ok(Arc::new(TestPage {
				id: 1,
				components: vec![],
			}))
		}

		fn page_instance(
			&self,
			page_id: u32,
			_class: Option<&PageClass>,
			_parameters: &PageParameters,
			render_count: Option<u32>,
		) -> MapperResult<PageRef> {
			self.calls
				.lock()
				.unwrap()
				.push(format!("get {} {:?}", page_id, render_count));
			Ok(Arc::new(TestPage {
				id: page_id,
				components: vec!["form:submit"],
			}))
		}

		fn resolve_page_class(&self, name: &str) -> Option<PageClass> {
			Some(PageClass::from(name))
		}
	}

	#[rstest]
	fn test_for_class_creates_page() {
		let source = Arc::new(RecordingSource::default());
		let provider = PageProvider::for_class(PageClass::from("Home"), PageParameters::new())
			.with_page_source(source.clone());

		assert!(provider.is_new_page_instance());
		assert_eq!(provider.page().unwrap().page_id(), 1);
		assert_eq!(*source.calls.lock().unwrap(), ["new Home"]);
	}

	#[rstest]
	fn test_for_instance_looks_up_page() {
		let source = Arc::new(RecordingSource::default());
		let provider =
			PageProvider::for_instance(4, None, PageParameters::new(), Some(5)).with_page_source(source.clone());

		assert!(!provider.is_new_page_instance());
		assert_eq!(provider.page().unwrap().page_id(), 4);
		assert_eq!(*source.calls.lock().unwrap(), ["get 4 Some(5)"]);
	}

	#[rstest]
	fn test_missing_source() {
		let provider = PageProvider::for_instance(4, None, PageParameters::new(), None);
		assert_eq!(
			provider.page().unwrap_err(),
			MapperError::MissingPageSource("page #4".to_string())
		);
	}

	#[rstest]
	fn test_from_page_needs_no_source() {
		let page: PageRef = Arc::new(TestPage {
			id: 9,
			components: vec![],
		});
		let provider = PageProvider::from_page(page);

		assert_eq!(provider.page_id(), Some(9));
		assert_eq!(provider.page_class(), Some(&PageClass::from("TestPage")));
		assert_eq!(provider.page().unwrap().page_id(), 9);
	}

	#[rstest]
	#[case("form:submit", true)]
	#[case("form:gone", false)]
	fn test_resolve_component(#[case] path: &str, #[case] present: bool) {
		// Arrange
		let source = Arc::new(RecordingSource::default());
		let provider = PageAndComponentProvider::new(
			PageProvider::for_instance(3, None, PageParameters::new(), None).with_page_source(source),
			ComponentPath::parse(path).unwrap(),
		);

		// Act
		let result = provider.resolve_component();

		// Assert
		if present {
			assert_eq!(result.unwrap().page_id(), 3);
		} else {
			assert_eq!(
				result.unwrap_err(),
				MapperError::StaleComponent {
					page_path: "TestPage#3".to_string(),
					component_path: path.to_string(),
				}
			);
		}
	}
}
