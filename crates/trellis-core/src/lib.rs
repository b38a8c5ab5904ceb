//! Core value types for the Trellis web framework.
//!
//! This crate holds the request-independent building blocks shared by the
//! URL mappers:
//!
//! - [`Url`]: a structured URL (path segments + ordered query parameters)
//! - [`PageParameters`]: indexed and named multi-valued page parameters
//! - [`request_utils`]: relative path resolution and query-string decoding
//!
//! # Quick Start
//!
//! ```rust
//! use trellis_core::{PageParameters, Url};
//!
//! let url = Url::parse("wicket/page?4.5&a=3");
//! assert_eq!(url.segments(), ["wicket", "page"]);
//! assert_eq!(url.query_parameters()[0].name(), "4.5");
//!
//! let mut params = PageParameters::new();
//! params.add("a", "3");
//! assert_eq!(params.get_as::<i32>("a").unwrap(), 3);
//! ```

pub mod error;
pub mod parameters;
pub mod request_utils;
pub mod url;

pub use error::ParameterError;
pub use parameters::{FromParameter, PageParameters};
pub use request_utils::{decode_parameters, remove_double_dots, to_absolute_path};
pub use url::{QueryParameter, Url};

/// Result type for typed parameter access.
pub type ParameterResult<T> = Result<T, ParameterError>;
