//! Request mappers, handlers and the request cycle.

pub use trellis_mapper::*;
