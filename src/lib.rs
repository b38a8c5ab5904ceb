//! # Trellis
//!
//! A component-oriented web framework core. Trellis maps incoming requests
//! to stateful pages and routes callbacks (link clicks, form submissions,
//! behaviors) back to the component that rendered them, through compact
//! bookmarkable URLs.
//!
//! ## Feature Flags
//!
//! - `core` - URL value type, page parameters and request path helpers
//! - `conf` - TOML settings and logging setup
//! - `mapper` - info token codec, listener registry, mappers and request cycle
//! - `full` (default) - everything above
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # {
//! use trellis::prelude::*;
//!
//! let url = Url::parse("wicket/page?abc.4.5-ILinkListener-a-b-c");
//! let token = url.query_parameters()[0].name();
//! let info = PageComponentInfo::parse(token).unwrap();
//!
//! assert_eq!(info.page_info().page_map_name(), Some("abc"));
//! assert_eq!(info.component_info().unwrap().component_path().to_string(), "a:b:c");
//! # }
//! ```
//!
//! ## Crates
//!
//! | module | crate |
//! |---|---|
//! | [`core`] | `trellis-core` |
//! | [`conf`] | `trellis-conf` |
//! | [`mapper`] | `trellis-mapper` |

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "mapper")]
pub mod mapper;

/// Types most applications need.
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use trellis_conf::{ConfError, MapperSettings, init_logging};

	#[cfg(feature = "core")]
	pub use trellis_core::{PageParameters, Url, remove_double_dots, to_absolute_path};

	#[cfg(feature = "mapper")]
	pub use trellis_mapper::{
		BookmarkableMapper, ComponentPath, CompoundRequestMapper, GenericBookmarkableStrategy,
		HomePageStrategy, LINK_LISTENER, ListenerInterfaceRegistry, MapperContext, MapperError,
		MapperResult, MountedStrategy, PageClass, PageComponentInfo, PageInfo, PageInstanceMapper,
		PageRef, PageSource, Request, RequestCycle, RequestHandler, RequestMapper, RequestablePage,
	};
}
