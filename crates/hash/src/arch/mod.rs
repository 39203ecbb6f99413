// Copyright 2024-2025 Irreducible Inc.

use cfg_if::cfg_if;

pub mod portable;

cfg_if! {
	if #[cfg(target_arch = "x86_64")] {
		pub mod x86_64;
	}
}
