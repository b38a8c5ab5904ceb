//! Processing of one request: map, respond, recover, detach.

use std::sync::Arc;

use trellis_core::Url;

use crate::MapperResult;
use crate::error::MapperError;
use crate::handler::RequestHandler;
use crate::mapper::RequestMapper;
use crate::request::Request;

/// Observer of request cycles. Every callback defaults to a no-op.
pub trait RequestCycleListener: Send + Sync {
	/// Called before the request is mapped.
	fn on_begin_request(&self, request: &Request) {
		let _ = request;
	}

	/// Called after the handlers were detached.
	fn on_end_request(&self, request: &Request) {
		let _ = request;
	}

	/// Called when responding failed.
	fn on_exception(&self, request: &Request, error: &MapperError) {
		let _ = (request, error);
	}
}

/// Turns a failure into a replacement handler, e.g. an error page.
pub trait ExceptionMapper: Send + Sync {
	/// The handler to respond with instead, or `None` to give up.
	fn map(&self, error: &MapperError) -> Option<RequestHandler>;
}

/// Produces the response for a handler.
pub trait HandlerExecutor: Send + Sync {
	/// Writes the response.
	///
	/// # Errors
	///
	/// Any failure while resolving pages or invoking listeners, including
	/// [`MapperError::StaleComponent`].
	fn respond(&self, handler: &RequestHandler) -> MapperResult<()>;

	/// Releases per-request state held by the handler.
	fn detach(&self, handler: &RequestHandler) {
		let _ = handler;
	}
}

/// Application-wide collaborators of every request cycle.
#[derive(Clone)]
pub struct RequestCycleContext {
	mapper: Arc<dyn RequestMapper>,
	executor: Arc<dyn HandlerExecutor>,
	exception_mapper: Arc<dyn ExceptionMapper>,
	listeners: Vec<Arc<dyn RequestCycleListener>>,
}

impl RequestCycleContext {
	/// Creates the context.
	pub fn new(
		mapper: Arc<dyn RequestMapper>,
		executor: Arc<dyn HandlerExecutor>,
		exception_mapper: Arc<dyn ExceptionMapper>,
	) -> Self {
		Self {
			mapper,
			executor,
			exception_mapper,
			listeners: Vec::new(),
		}
	}

	/// Adds a listener notified by every cycle.
	pub fn add_listener(&mut self, listener: Arc<dyn RequestCycleListener>) -> &mut Self {
		self.listeners.push(listener);
		self
	}

	/// The root mapper.
	pub fn mapper(&self) -> &Arc<dyn RequestMapper> {
		&self.mapper
	}
}

/// One request on its way through the mappers and the executor.
pub struct RequestCycle {
	request: Request,
	context: RequestCycleContext,
	listeners: Vec<Arc<dyn RequestCycleListener>>,
}

impl RequestCycle {
	/// Starts a cycle for `request`.
	pub fn new(request: Request, context: RequestCycleContext) -> Self {
		Self {
			request,
			context,
			listeners: Vec::new(),
		}
	}

	/// Adds a listener for this cycle only; it runs after the application's.
	pub fn add_listener(&mut self, listener: Arc<dyn RequestCycleListener>) -> &mut Self {
		self.listeners.push(listener);
		self
	}

	/// The request.
	pub fn request(&self) -> &Request {
		&self.request
	}

	/// URL that maps back to `handler`.
	pub fn url_for(&self, handler: &RequestHandler) -> Option<Url> {
		self.context.mapper.map_handler(handler)
	}

	/// Maps and responds, then detaches.
	///
	/// Returns `false` when no mapper produced a handler.
	pub fn process_request_and_detach(&self) -> bool {
		let url = self.request.url().to_string();
		tracing::debug!(%url, "request cycle started");
		self.each_listener(|listener| listener.on_begin_request(&self.request));

		let handled = match self.context.mapper.map_request(&self.request) {
			Some(handler) => {
				self.execute(&handler);
				true
			}
			None => {
				tracing::debug!(%url, "no mapper matched request");
				false
			}
		};

		self.each_listener(|listener| listener.on_end_request(&self.request));
		tracing::debug!(%url, handled, "request cycle finished");
		handled
	}

	fn execute(&self, handler: &RequestHandler) {
		let executor = &self.context.executor;
		if let Err(error) = executor.respond(handler) {
			tracing::warn!(%error, handler = handler.kind(), "request handler failed");
			self.each_listener(|listener| listener.on_exception(&self.request, &error));

			if let Some(replacement) = self.context.exception_mapper.map(&error) {
				if let Err(error) = executor.respond(&replacement) {
					tracing::warn!(%error, handler = replacement.kind(), "exception handler failed");
				}
				executor.detach(&replacement);
			}
		}
		executor.detach(handler);
	}

	fn each_listener(&self, notify: impl Fn(&dyn RequestCycleListener)) {
		for listener in self.context.listeners.iter().chain(&self.listeners) {
			notify(listener.as_ref());
		}
	}
}
