//! URL value type, page parameters and request path helpers.
//!
//! # Examples
//!
//! ```rust
//! use trellis::core::{remove_double_dots, to_absolute_path};
//!
//! assert_eq!(to_absolute_path("http://x/a/b/c", "../../d"), "http://x/d");
//! assert_eq!(remove_double_dots("a/b/../c/"), "a/c/");
//! ```

pub use trellis_core::*;
