//! Listener interfaces and their name registry.
//!
//! A listener URL names the callback contract it targets. The registry maps
//! those names back to interfaces; it is filled at startup and shared
//! read-only afterwards.

use std::borrow::Cow;
use std::collections::HashMap;

use trellis_conf::{MapperSettings, is_identifier};

use crate::{MapperError, MapperResult};

/// A named callback contract implemented by components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestListenerInterface {
	name: Cow<'static, str>,
	renders_page: bool,
}

impl RequestListenerInterface {
	/// Creates an interface with a static name.
	pub const fn from_static(name: &'static str, renders_page: bool) -> Self {
		Self {
			name: Cow::Borrowed(name),
			renders_page,
		}
	}

	/// Creates an interface with an owned name.
	pub fn new(name: impl Into<String>, renders_page: bool) -> Self {
		Self {
			name: Cow::Owned(name.into()),
			renders_page,
		}
	}

	/// Name used on the wire.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Whether the page is rendered again after the callback.
	pub fn renders_page(&self) -> bool {
		self.renders_page
	}
}

/// Link clicks.
pub const LINK_LISTENER: RequestListenerInterface =
	RequestListenerInterface::from_static("ILinkListener", true);

/// Form submissions.
pub const FORM_SUBMIT_LISTENER: RequestListenerInterface =
	RequestListenerInterface::from_static("IFormSubmitListener", true);

/// Selection changes of choice components.
pub const ON_CHANGE_LISTENER: RequestListenerInterface =
	RequestListenerInterface::from_static("IOnChangeListener", true);

/// Behavior callbacks, usually Ajax.
pub const BEHAVIOR_LISTENER: RequestListenerInterface =
	RequestListenerInterface::from_static("IBehaviorListener", false);

/// Redirects to the current page.
pub const REDIRECT_LISTENER: RequestListenerInterface =
	RequestListenerInterface::from_static("IRedirectListener", true);

/// Resource streaming.
pub const RESOURCE_LISTENER: RequestListenerInterface =
	RequestListenerInterface::from_static("IResourceListener", false);

/// Interfaces every registry built by [`ListenerInterfaceRegistry::with_builtins`] knows.
pub const BUILTIN_LISTENERS: [RequestListenerInterface; 6] = [
	LINK_LISTENER,
	FORM_SUBMIT_LISTENER,
	ON_CHANGE_LISTENER,
	BEHAVIOR_LISTENER,
	REDIRECT_LISTENER,
	RESOURCE_LISTENER,
];

/// Name to interface lookup.
///
/// Registration takes `&mut self`; once the registry is wrapped in an `Arc`
/// and handed to the mappers it can only be read.
///
/// # Examples
///
/// ```
/// use trellis_mapper::{LINK_LISTENER, ListenerInterfaceRegistry, RequestListenerInterface};
///
/// let mut registry = ListenerInterfaceRegistry::with_builtins();
/// registry.register(RequestListenerInterface::new("IDragListener", false)).unwrap();
///
/// assert_eq!(registry.resolve("ILinkListener"), Some(&LINK_LISTENER));
/// assert_eq!(registry.name_of(&LINK_LISTENER), Some("ILinkListener"));
/// assert!(registry.resolve("IUnknownListener").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListenerInterfaceRegistry {
	interfaces: HashMap<String, RequestListenerInterface>,
}

impl ListenerInterfaceRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding [`BUILTIN_LISTENERS`].
	pub fn with_builtins() -> Self {
		let interfaces = BUILTIN_LISTENERS
			.into_iter()
			.map(|interface| (interface.name().to_string(), interface))
			.collect();
		Self { interfaces }
	}

	/// Built-in interfaces plus those declared in `settings`.
	///
	/// # Errors
	///
	/// Returns [`MapperError::DuplicateListenerInterface`] when a configured
	/// name shadows another interface and [`MapperError::InvalidListenerName`]
	/// for names that are not identifiers.
	pub fn from_settings(settings: &MapperSettings) -> MapperResult<Self> {
		let mut registry = Self::with_builtins();
		for declared in &settings.listener_interfaces {
			registry.register(RequestListenerInterface::new(
				declared.name.clone(),
				declared.renders_page,
			))?;
		}
		Ok(registry)
	}

	/// Adds an interface.
	///
	/// # Errors
	///
	/// See [`from_settings`](Self::from_settings).
	pub fn register(&mut self, interface: RequestListenerInterface) -> MapperResult<()> {
		if !is_identifier(interface.name()) {
			return Err(MapperError::InvalidListenerName(interface.name().to_string()));
		}
		if self.interfaces.contains_key(interface.name()) {
			return Err(MapperError::DuplicateListenerInterface(
				interface.name().to_string(),
			));
		}
		tracing::debug!(name = interface.name(), "listener interface registered");
		self.interfaces.insert(interface.name().to_string(), interface);
		Ok(())
	}

	/// Looks up an interface by its wire name.
	pub fn resolve(&self, name: &str) -> Option<&RequestListenerInterface> {
		self.interfaces.get(name)
	}

	/// Wire name of a registered interface.
	///
	/// `None` when the interface is not registered, or another interface is
	/// registered under the same name.
	pub fn name_of(&self, interface: &RequestListenerInterface) -> Option<&str> {
		self.interfaces
			.get(interface.name())
			.filter(|registered| *registered == interface)
			.map(RequestListenerInterface::name)
	}

	/// Number of registered interfaces.
	pub fn len(&self) -> usize {
		self.interfaces.len()
	}

	/// Returns `true` if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.interfaces.is_empty()
	}

	/// Iterates registered interfaces in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &RequestListenerInterface> {
		self.interfaces.values()
	}
}
