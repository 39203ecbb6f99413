// Copyright 2024-2025 Irreducible Inc.

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Defaults to the `info` level when `RUST_LOG` is unset. Calling it more than once is harmless:
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_target(false))
		.try_init();
}
