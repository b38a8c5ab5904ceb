//! A chain of mappers.

use std::fmt;
use std::sync::Arc;

use trellis_core::Url;

use super::RequestMapper;
use crate::handler::RequestHandler;
use crate::request::Request;

/// Tries its mappers in turn.
///
/// Requests go to the mappers in descending compatibility score, ties in
/// registration order. Handlers go to the mappers in registration order.
#[derive(Clone, Default)]
pub struct CompoundRequestMapper {
	mappers: Vec<Arc<dyn RequestMapper>>,
}

impl CompoundRequestMapper {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a mapper.
	pub fn add(&mut self, mapper: impl RequestMapper + 'static) -> &mut Self {
		self.add_shared(Arc::new(mapper))
	}

	/// Appends a shared mapper.
	pub fn add_shared(&mut self, mapper: Arc<dyn RequestMapper>) -> &mut Self {
		self.mappers.push(mapper);
		self
	}

	/// Builder-style variant of [`add`](Self::add).
	pub fn with(mut self, mapper: impl RequestMapper + 'static) -> Self {
		self.add(mapper);
		self
	}

	/// Number of mappers.
	pub fn len(&self) -> usize {
		self.mappers.len()
	}

	/// Returns `true` if the chain is empty.
	pub fn is_empty(&self) -> bool {
		self.mappers.is_empty()
	}
}

impl RequestMapper for CompoundRequestMapper {
	fn map_request(&self, request: &Request) -> Option<RequestHandler> {
		let mut scored: Vec<(i32, usize)> = self
			.mappers
			.iter()
			.enumerate()
			.map(|(index, mapper)| (mapper.compatibility_score(request), index))
			.collect();
		// stable: equal scores keep registration order
		scored.sort_by(|a, b| b.0.cmp(&a.0));

		scored.into_iter().find_map(|(score, index)| {
			let handler = self.mappers[index].map_request(request)?;
			tracing::trace!(mapper = index, score, handler = handler.kind(), "request mapped");
			Some(handler)
		})
	}

	fn map_handler(&self, handler: &RequestHandler) -> Option<Url> {
		self.mappers.iter().enumerate().find_map(|(index, mapper)| {
			let url = mapper.map_handler(handler)?;
			tracing::trace!(mapper = index, handler = handler.kind(), url = %url, "handler mapped");
			Some(url)
		})
	}

	fn compatibility_score(&self, request: &Request) -> i32 {
		self.mappers
			.iter()
			.map(|mapper| mapper.compatibility_score(request))
			.max()
			.unwrap_or(0)
	}
}

impl fmt::Debug for CompoundRequestMapper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CompoundRequestMapper")
			.field("mappers", &self.mappers.len())
			.finish()
	}
}
