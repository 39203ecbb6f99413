// Copyright 2024-2025 Irreducible Inc.

use swifft_field::{G, OMEGA};
use tracing::{debug, instrument};

use crate::{CombinationTable, Error, KeyMatrix, MultiplierTable, OmegaPowers, PI_DIGITS};

/// Everything a compression kernel reads: the transform tables and the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwifftTables {
	outer_twiddles: [i16; G / 2],
	multipliers: MultiplierTable,
	fft_table: CombinationTable,
	key: KeyMatrix,
}

impl SwifftTables {
	/// Generates the standard tables, using $\omega = 42$ and the key derived from π.
	pub fn generate() -> Result<Self, Error> {
		Self::generate_with(OMEGA, PI_DIGITS)
	}

	/// Generates the tables for an arbitrary root and key digit source.
	#[instrument(skip(digits), level = "debug")]
	pub fn generate_with(omega: i32, digits: &str) -> Result<Self, Error> {
		let powers = OmegaPowers::generate(omega)?;
		let multipliers = MultiplierTable::generate(&powers);
		let fft_table = CombinationTable::generate(&powers);
		let key = KeyMatrix::from_digits(digits)?;
		debug!(
			multipliers = multipliers.as_slice().len(),
			fft_table = fft_table.as_slice().len(),
			key = key.as_slice().len(),
			"generated SWIFFT tables"
		);
		Ok(Self {
			outer_twiddles: powers.outer_twiddles(),
			multipliers,
			fft_table,
			key,
		})
	}

	/// Replaces the key, keeping the transform tables.
	pub fn with_key(self, key: KeyMatrix) -> Self {
		Self { key, ..self }
	}

	/// See [`OmegaPowers::outer_twiddles`].
	pub fn outer_twiddles(&self) -> &[i16; G / 2] {
		&self.outer_twiddles
	}

	pub fn multipliers(&self) -> &MultiplierTable {
		&self.multipliers
	}

	pub fn fft_table(&self) -> &CombinationTable {
		&self.fft_table
	}

	pub fn key(&self) -> &KeyMatrix {
		&self.key
	}
}
