// Copyright 2024-2025 Irreducible Inc.

//! Simple quadratic-time reference implementations of the transform and the keyed compression,
//! used for testing the table-driven and vectorized implementations.

use swifft_field::{reverse_bits, Z257, G, LOG2_W, M, N, ROW_BYTES, W};

use crate::{KeyMatrix, OmegaPowers};

/// Index of the polynomial coefficient carried by bit `bit` of byte `group` of an input row.
///
/// Both indices are bit-reversed over [`LOG2_W`] bits: the byte selects the position within a
/// stride of `W`, the bit selects the stride.
pub const fn coefficient_index(group: usize, bit: usize) -> usize {
	reverse_bits(group, 1 << LOG2_W) + W * reverse_bits(bit, 1 << LOG2_W)
}

/// Unpacks one signed input row into its `N` coefficients in $\{-1, 0, 1\}$.
pub fn row_coefficients(values: &[u8; ROW_BYTES], signs: &[u8; ROW_BYTES]) -> [Z257; N] {
	let mut coefficients = [Z257::ZERO; N];
	for group in 0..G {
		for bit in 0..u8::BITS as usize {
			if values[group] >> bit & 1 == 0 {
				continue;
			}
			coefficients[coefficient_index(group, bit)] = if signs[group] >> bit & 1 == 1 {
				-Z257::ONE
			} else {
				Z257::ONE
			};
		}
	}
	coefficients
}

/// Evaluates the polynomial with the given coefficients at $\omega^{2i+1}$ for every output `i`.
pub fn transform_simple(powers: &OmegaPowers, coefficients: &[Z257; N]) -> [i16; N] {
	std::array::from_fn(|i| {
		coefficients
			.iter()
			.enumerate()
			.map(|(k, &x)| x * powers.get((2 * i + 1) * k))
			.sum::<Z257>()
			.val()
	})
}

/// Keyed compression of one block of `M` signed rows: $\sum_m a_m \cdot y_m$ elementwise.
pub fn compress_simple(
	powers: &OmegaPowers,
	key: &KeyMatrix,
	values: &[[u8; ROW_BYTES]; M],
	signs: &[[u8; ROW_BYTES]; M],
) -> [i16; N] {
	let mut acc = [Z257::ZERO; N];
	for m in 0..M {
		let transformed = transform_simple(powers, &row_coefficients(&values[m], &signs[m]));
		for (t, acc) in acc.iter_mut().enumerate() {
			*acc += Z257::from(key.row(m)[t]) * Z257::from(transformed[t]);
		}
	}
	acc.map(Z257::val)
}
