// Copyright 2024-2025 Irreducible Inc.

use lazy_static::lazy_static;
use swifft_ntt::SwifftTables;

lazy_static! {
	static ref DEFAULT_TABLES: SwifftTables = SwifftTables::generate()
		.unwrap_or_else(|err| panic!("failed to generate the default SWIFFT tables: {err}"));
}

/// The standard tables for $\omega = 42$ and the π key, generated on first use.
pub fn default_tables() -> &'static SwifftTables {
	&DEFAULT_TABLES
}
