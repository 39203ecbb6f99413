// Copyright 2024-2025 Irreducible Inc.

use swifft_field::{center, reverse_bits, LOG2_V, LOG2_W, V, W};

use crate::twiddle::OmegaPowers;

/// Precomputed inner transforms of every possible signed input byte.
///
/// An input byte `value` carries [`LOG2_V`] coefficients, bit `k` being the coefficient of
/// $x^{W \cdot rev(k)}$ within its group, and the matching byte of the sign block negates the
/// coefficients whose sign bit is set. The entry for `(sign, value)` holds, for each lane `j`, the
/// centered sum
///
/// $$\sum_{k \in value} (-1)^{sign_k} \omega^{W (2j + 1) rev(k)}.$$
///
/// Bits set in `sign` but not in `value` have no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationTable {
	entries: Box<[[i16; W]]>,
}

impl CombinationTable {
	pub fn generate(powers: &OmegaPowers) -> Self {
		// Contribution of bit `k` to lane `j`, before the sign is applied.
		let mut terms = [[0i32; W]; LOG2_V];
		for (k, row) in terms.iter_mut().enumerate() {
			let position = W * reverse_bits(k, 1 << LOG2_W);
			for (j, term) in row.iter_mut().enumerate() {
				*term = powers.get(position * (2 * j + 1)).val() as i32;
			}
		}

		let entries = (0..V * V)
			.map(|index| {
				let sign = index >> LOG2_V;
				let value = index & (V - 1);
				let mut lanes = [0i16; W];
				for (j, lane) in lanes.iter_mut().enumerate() {
					let sum = (0..LOG2_V)
						.filter(|&k| value >> k & 1 == 1)
						.map(|k| {
							if sign >> k & 1 == 1 {
								-terms[k][j]
							} else {
								terms[k][j]
							}
						})
						.sum::<i32>();
					*lane = center(sum) as i16;
				}
				lanes
			})
			.collect();

		Self { entries }
	}

	/// The lanes for one signed input byte.
	#[inline]
	pub fn row(&self, sign: u8, value: u8) -> &[i16; W] {
		&self.entries[(sign as usize) << LOG2_V | value as usize]
	}

	/// All [`FFT_TABLE_LEN`](swifft_field::FFT_TABLE_LEN) entries, indexed by
	/// `((sign << 8) | value) * W + lane`.
	pub fn as_slice(&self) -> &[i16] {
		bytemuck::cast_slice(&self.entries)
	}
}
