//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

use crate::settings::LoggingSettings;

/// Builds the event filter: `RUST_LOG` when set, the configured level otherwise.
pub fn build_filter(settings: &LoggingSettings) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Installs a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(settings: &LoggingSettings) -> bool {
	let installed = tracing_subscriber::fmt()
		.with_env_filter(build_filter(settings))
		.with_target(settings.with_target)
		.try_init()
		.is_ok();

	if installed {
		tracing::debug!(level = %settings.level, "logging initialized");
	}
	installed
}
