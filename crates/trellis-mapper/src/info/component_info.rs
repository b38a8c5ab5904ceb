use std::fmt;

use trellis_conf::is_identifier;

use super::{COMPONENT_SEPARATOR, ESCAPE, INFO_SEPARATOR, parse_number};
use crate::listener::ListenerInterfaceRegistry;
use crate::page::ComponentPath;

/// Callback target carried by listener URLs.
///
/// The render count is not part of the encoded component segment; it is
/// shared with the page info in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentInfo {
	render_count: u32,
	listener_interface: String,
	component_path: ComponentPath,
	behavior_index: Option<u32>,
}

impl ComponentInfo {
	/// Creates a component info. `listener_interface` is the wire name.
	pub fn new(
		render_count: u32,
		listener_interface: impl Into<String>,
		component_path: ComponentPath,
		behavior_index: Option<u32>,
	) -> Self {
		Self {
			render_count,
			listener_interface: listener_interface.into(),
			component_path,
			behavior_index,
		}
	}

	/// Render count of the page when the callback URL was rendered.
	pub fn render_count(&self) -> u32 {
		self.render_count
	}

	/// Wire name of the listener interface.
	pub fn listener_interface(&self) -> &str {
		&self.listener_interface
	}

	/// Path of the target component.
	pub fn component_path(&self) -> &ComponentPath {
		&self.component_path
	}

	/// Index of the target behavior on the component, if any.
	pub fn behavior_index(&self) -> Option<u32> {
		self.behavior_index
	}

	/// Decodes `Interface[.behaviorIndex]-seg-seg...`.
	///
	/// Fails on an interface name that is not an identifier, a malformed
	/// behavior index, a dangling escape or an empty component id.
	pub fn parse(render_count: u32, encoded: &str) -> Option<Self> {
		let mut fields = split_fields(encoded)?.into_iter();
		let interface_field = fields.next()?;
		let (listener_interface, behavior_index) = match interface_field.split_once(INFO_SEPARATOR) {
			Some((name, index)) => (name.to_string(), Some(parse_number(index)?)),
			None => (interface_field, None),
		};
		if !is_identifier(&listener_interface) {
			return None;
		}
		let component_path = ComponentPath::new(fields).ok()?;
		Some(Self {
			render_count,
			listener_interface,
			component_path,
			behavior_index,
		})
	}

	/// Like [`parse`](Self::parse), also requiring a registered interface.
	pub fn decode(render_count: u32, encoded: &str, registry: &ListenerInterfaceRegistry) -> Option<Self> {
		Self::parse(render_count, encoded)
			.filter(|info| registry.resolve(info.listener_interface()).is_some())
	}
}

impl fmt::Display for ComponentInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.listener_interface)?;
		if let Some(index) = self.behavior_index {
			write!(f, "{}{}", INFO_SEPARATOR, index)?;
		}
		for segment in self.component_path.segments() {
			write!(f, "{}", COMPONENT_SEPARATOR)?;
			for c in segment.chars() {
				if c == ESCAPE || c == COMPONENT_SEPARATOR {
					write!(f, "{}", ESCAPE)?;
				}
				write!(f, "{}", c)?;
			}
		}
		Ok(())
	}
}

/// Splits on unescaped separators and unescapes each field.
fn split_fields(encoded: &str) -> Option<Vec<String>> {
	let mut fields = vec![String::new()];
	let mut chars = encoded.chars();
	while let Some(c) = chars.next() {
		match c {
			ESCAPE => match chars.next()? {
				escaped @ (ESCAPE | COMPONENT_SEPARATOR) => fields.last_mut()?.push(escaped),
				_ => return None,
			},
			COMPONENT_SEPARATOR => fields.push(String::new()),
			other => fields.last_mut()?.push(other),
		}
	}
	Some(fields)
}
