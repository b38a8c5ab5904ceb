//! Configuration for the Trellis URL mappers.
//!
//! Settings are plain serde structs loaded from TOML, in the spirit of a
//! Django-style settings module:
//!
//! ```rust
//! use trellis_conf::MapperSettings;
//!
//! let settings = MapperSettings::from_toml_str(
//!     r#"
//!     namespace = "app"
//!
//!     [[listener_interfaces]]
//!     name = "IDragListener"
//!     renders_page = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.namespace, "app");
//! assert_eq!(settings.page_identifier, "page");
//! assert_eq!(settings.listener_interfaces[0].name, "IDragListener");
//! ```

pub mod error;
pub mod logging;
pub mod settings;

pub use error::ConfError;
pub use logging::{build_filter, init_logging};
pub use settings::{ListenerInterfaceSettings, LoggingSettings, MapperSettings, is_identifier};

/// Result type for configuration operations.
pub type ConfResult<T> = Result<T, ConfError>;
