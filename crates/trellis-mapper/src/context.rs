//! Collaborators shared by every mapper of an application.

use std::fmt;
use std::sync::Arc;

use trellis_conf::MapperSettings;

use crate::MapperResult;
use crate::error::MapperError;
use crate::listener::{ListenerInterfaceRegistry, RequestListenerInterface};
use crate::page::{PageClass, PageSource};

/// Settings, listener registry and page source of one application.
///
/// Cloning is cheap; all parts are shared.
#[derive(Clone)]
pub struct MapperContext {
	settings: Arc<MapperSettings>,
	registry: Arc<ListenerInterfaceRegistry>,
	page_source: Arc<dyn PageSource>,
}

impl MapperContext {
	/// Assembles a context from already validated parts.
	pub fn new(
		settings: MapperSettings,
		registry: ListenerInterfaceRegistry,
		page_source: Arc<dyn PageSource>,
	) -> Self {
		Self {
			settings: Arc::new(settings),
			registry: Arc::new(registry),
			page_source,
		}
	}

	/// Validates `settings` and builds the registry they declare.
	///
	/// # Errors
	///
	/// [`MapperError::Settings`] for invalid settings and the registration
	/// errors of [`ListenerInterfaceRegistry::from_settings`].
	pub fn from_settings(settings: MapperSettings, page_source: Arc<dyn PageSource>) -> MapperResult<Self> {
		settings
			.validate()
			.map_err(|e| MapperError::Settings(e.to_string()))?;
		let registry = ListenerInterfaceRegistry::from_settings(&settings)?;
		Ok(Self::new(settings, registry, page_source))
	}

	/// The settings.
	pub fn settings(&self) -> &MapperSettings {
		&self.settings
	}

	/// First segment of framework URLs.
	pub fn namespace(&self) -> &str {
		&self.settings.namespace
	}

	/// Second segment of page-instance URLs.
	pub fn page_identifier(&self) -> &str {
		&self.settings.page_identifier
	}

	/// Second segment of generic bookmarkable URLs.
	pub fn bookmarkable_identifier(&self) -> &str {
		&self.settings.bookmarkable_identifier
	}

	/// The listener interface registry.
	pub fn registry(&self) -> &ListenerInterfaceRegistry {
		&self.registry
	}

	/// The page source.
	pub fn page_source(&self) -> &Arc<dyn PageSource> {
		&self.page_source
	}

	/// Resolves a listener interface by wire name.
	pub fn listener_interface(&self, name: &str) -> Option<&RequestListenerInterface> {
		self.registry.resolve(name)
	}

	/// Wire name of a registered listener interface.
	pub fn listener_interface_name(&self, interface: &RequestListenerInterface) -> Option<&str> {
		self.registry.name_of(interface)
	}

	/// Resolves a page class by name through the page source.
	pub fn resolve_page_class(&self, name: &str) -> Option<PageClass> {
		self.page_source.resolve_page_class(name)
	}
}

impl fmt::Debug for MapperContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MapperContext")
			.field("settings", &self.settings)
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}
