// Copyright 2024-2025 Irreducible Inc.

//! Scalar two-stage forward transform of one input row.

use swifft_field::{center, G, LOG2_W, N, ROW_BYTES, W};

use crate::SwifftTables;

/// Forward transform of one signed input row.
///
/// `values[i]` and `signs[i]` are the value and sign bytes of group `i`. The result holds the
/// centered evaluations $y_i = \sum_k x_k \omega^{(2i+1)k}$, where the coefficient layout is given
/// by [`crate::reference::coefficient_index`].
///
/// The inner transform over the bits of each byte is a table lookup, scaled by the group's
/// multipliers. The outer transform combines the groups with decimation-in-time butterflies: the
/// groups enter in bit-reversed order and the lanes of group `l` leave as outputs
/// `l * W..(l + 1) * W`.
pub fn forward_transform_row(
	tables: &SwifftTables,
	values: &[u8; ROW_BYTES],
	signs: &[u8; ROW_BYTES],
) -> [i16; N] {
	let mut groups = [[0i32; W]; G];
	for (i, group) in groups.iter_mut().enumerate() {
		let lanes = tables.fft_table().row(signs[i], values[i]);
		let scale = tables.multipliers().group(i);
		for j in 0..W {
			group[j] = center(scale[j] as i32 * lanes[j] as i32);
		}
	}

	let outer_twiddles = tables.outer_twiddles();
	for log_len in 1..=LOG2_W {
		let len = 1 << log_len;
		let half = len / 2;
		for start in (0..G).step_by(len) {
			for t in 0..half {
				let twiddle = outer_twiddles[t * (G / len)] as i32;
				for j in 0..W {
					let u = groups[start + t][j];
					let v = center(twiddle * groups[start + t + half][j]);
					groups[start + t][j] = center(u + v);
					groups[start + t + half][j] = center(u - v);
				}
			}
		}
	}

	let mut output = [0i16; N];
	for (chunk, group) in output.chunks_exact_mut(W).zip(groups) {
		for (dst, src) in chunk.iter_mut().zip(group) {
			*dst = src as i16;
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use std::sync::OnceLock;

	use proptest::prelude::*;

	use super::*;
	use crate::{reference, OmegaPowers};

	fn tables() -> &'static SwifftTables {
		static TABLES: OnceLock<SwifftTables> = OnceLock::new();
		TABLES.get_or_init(|| SwifftTables::generate().unwrap())
	}

	#[test]
	fn test_zero_row() {
		assert_eq!(forward_transform_row(tables(), &[0; ROW_BYTES], &[0xff; ROW_BYTES]), [0; N]);
	}

	#[test]
	fn test_constant_coefficient() {
		let mut values = [0; ROW_BYTES];
		values[0] = 1;
		assert_eq!(forward_transform_row(tables(), &values, &[0; ROW_BYTES]), [1; N]);
		assert_eq!(forward_transform_row(tables(), &values, &[1, 0, 0, 0, 0, 0, 0, 0]), [-1; N]);
	}

	proptest! {
		#[test]
		fn test_matches_naive_transform(
			values in any::<[u8; ROW_BYTES]>(),
			signs in any::<[u8; ROW_BYTES]>(),
		) {
			let expected = reference::transform_simple(
				&OmegaPowers::default(),
				&reference::row_coefficients(&values, &signs),
			);
			prop_assert_eq!(forward_transform_row(tables(), &values, &signs), expected);
		}

		#[test]
		fn test_matches_naive_transform_other_root(values in any::<[u8; ROW_BYTES]>()) {
			// 3 is a generator of the multiplicative group, so 3^2 has order 128.
			static OTHER: OnceLock<SwifftTables> = OnceLock::new();
			let other = OTHER.get_or_init(|| {
				SwifftTables::generate_with(9, crate::PI_DIGITS).unwrap()
			});
			let expected = reference::transform_simple(
				&OmegaPowers::generate(9).unwrap(),
				&reference::row_coefficients(&values, &[0; ROW_BYTES]),
			);
			prop_assert_eq!(forward_transform_row(other, &values, &[0; ROW_BYTES]), expected);
		}
	}
}
