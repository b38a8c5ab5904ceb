//! Settings and logging.
//!
//! # Examples
//!
//! ```rust
//! use trellis::conf::MapperSettings;
//!
//! let settings = MapperSettings::from_toml_str("namespace = \"app\"").unwrap();
//! assert_eq!(settings.namespace, "app");
//! ```

pub use trellis_conf::*;
