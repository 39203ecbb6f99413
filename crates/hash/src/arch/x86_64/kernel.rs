// Copyright 2024-2025 Irreducible Inc.

//! The compression kernel, written once against [`Lanes`].
//!
//! Every function here is `#[inline(always)]` so that it is compiled into the
//! `#[target_feature]` entry points of each instruction set. Values are kept centered after every
//! operation; centered operands bound any product by $128^2$, which fits a 16-bit lane.

use swifft_field::{G, LOG2_W, M, N, W};
use swifft_ntt::SwifftTables;

use super::lanes::{Lanes, MAX_ROWS};
use crate::buffer::{FftOutput, Input, Output, SignInput};

const ZERO_CHUNK: [i16; W] = [0; W];

/// Centered reduction of every lane, valid for any 16-bit input.
///
/// Since $256 \equiv -1$, `x = 256 h + l` reduces to `l - h` in `[-127, 383]`, which a single
/// conditional subtraction brings into `[-128, 128]`.
#[inline(always)]
unsafe fn center<V: Lanes>(x: V) -> V {
	x.and(V::splat(0xff)).sub(x.shr8()).fold_above_half()
}

#[inline(always)]
fn chunks(row: &[i16; N]) -> &[[i16; W]; G] {
	bytemuck::cast_ref(row)
}

/// Loads chunk `chunk` of each of the first `V::ROWS` rows.
#[inline(always)]
unsafe fn load_chunk<V: Lanes>(rows: &[[i16; N]], chunk: usize) -> V {
	let mut parts = [&ZERO_CHUNK; MAX_ROWS];
	for (part, row) in parts.iter_mut().zip(rows).take(V::ROWS) {
		*part = &chunks(row)[chunk];
	}
	V::load_rows(&parts[..V::ROWS])
}

/// Table values broadcast to vectors once per call.
struct Constants<V> {
	multipliers: [V; G],
	twiddles: [V; G / 2],
}

impl<V: Lanes> Constants<V> {
	#[inline(always)]
	unsafe fn new(tables: &SwifftTables) -> Self {
		let mut multipliers = [V::splat(0); G];
		for (i, multiplier) in multipliers.iter_mut().enumerate() {
			let group = tables.multipliers().group(i);
			*multiplier = V::load_rows(&[group; MAX_ROWS][..V::ROWS]);
		}
		let mut twiddles = [V::splat(0); G / 2];
		for (twiddle, &value) in twiddles.iter_mut().zip(tables.outer_twiddles()) {
			*twiddle = V::splat(value);
		}
		Self {
			multipliers,
			twiddles,
		}
	}
}

/// Transforms rows `first_row..first_row + V::ROWS`. Vector `l` of the result holds outputs
/// `l * W..(l + 1) * W` of each row in the row's slot.
#[inline(always)]
unsafe fn transform_rows<V: Lanes>(
	tables: &SwifftTables,
	constants: &Constants<V>,
	input: &Input,
	sign: &SignInput,
	first_row: usize,
) -> [V; G] {
	let mut groups = [V::splat(0); G];
	for (i, group) in groups.iter_mut().enumerate() {
		let mut parts = [&ZERO_CHUNK; MAX_ROWS];
		for (r, part) in parts.iter_mut().enumerate().take(V::ROWS) {
			let m = first_row + r;
			*part = tables.fft_table().row(sign.row(m)[i], input.row(m)[i]);
		}
		let lanes = V::load_rows(&parts[..V::ROWS]);
		*group = center(lanes.mullo(constants.multipliers[i]));
	}

	for log_len in 1..=LOG2_W {
		let len = 1 << log_len;
		let half = len / 2;
		for start in (0..G).step_by(len) {
			for t in 0..half {
				let twiddle = constants.twiddles[t * (G / len)];
				let u = groups[start + t];
				let v = center(groups[start + t + half].mullo(twiddle));
				groups[start + t] = center(u.add(v));
				groups[start + t + half] = center(u.sub(v));
			}
		}
	}
	groups
}

/// `acc = center(acc + center(key * y))`.
#[inline(always)]
unsafe fn accumulate<V: Lanes>(acc: V, key: V, y: V) -> V {
	center(acc.add(center(key.mullo(y))))
}

/// Sums the row slots of each accumulator into the output.
#[inline(always)]
unsafe fn fold_rows<V: Lanes>(acc: &[V; G], output: &mut Output) {
	let mut lanes = [0i16; MAX_ROWS * W];
	for (l, slots) in acc.iter().enumerate() {
		slots.store(&mut lanes);
		for j in 0..W {
			let sum = (0..V::ROWS).map(|r| lanes[r * W + j] as i32).sum::<i32>();
			output.0[l * W + j] = swifft_field::center(sum) as i16;
		}
	}
}

#[inline(always)]
pub(super) unsafe fn compute_signed<V: Lanes>(
	tables: &SwifftTables,
	input: &Input,
	sign: &SignInput,
	output: &mut Output,
) {
	let constants = Constants::<V>::new(tables);
	let key = tables.key().rows();
	let mut acc = [V::splat(0); G];
	for first_row in (0..M).step_by(V::ROWS) {
		let y = transform_rows(tables, &constants, input, sign, first_row);
		for l in 0..G {
			acc[l] = accumulate(acc[l], load_chunk(&key[first_row..], l), y[l]);
		}
	}
	fold_rows(&acc, output);
}

#[inline(always)]
pub(super) unsafe fn fft<V: Lanes>(
	tables: &SwifftTables,
	input: &Input,
	sign: &SignInput,
	output: &mut FftOutput,
) {
	let constants = Constants::<V>::new(tables);
	let mut lanes = [0i16; MAX_ROWS * W];
	for first_row in (0..M).step_by(V::ROWS) {
		let y = transform_rows(tables, &constants, input, sign, first_row);
		for (l, group) in y.iter().enumerate() {
			group.store(&mut lanes);
			for r in 0..V::ROWS {
				output.0[first_row + r][l * W..(l + 1) * W]
					.copy_from_slice(&lanes[r * W..(r + 1) * W]);
			}
		}
	}
}

/// Expects every element of `transformed` to be centered.
#[inline(always)]
pub(super) unsafe fn fft_sum<V: Lanes>(
	tables: &SwifftTables,
	transformed: &FftOutput,
	output: &mut Output,
) {
	let key = tables.key().rows();
	let mut acc = [V::splat(0); G];
	for first_row in (0..M).step_by(V::ROWS) {
		for l in 0..G {
			acc[l] = accumulate(
				acc[l],
				load_chunk(&key[first_row..], l),
				load_chunk(&transformed.0[first_row..], l),
			);
		}
	}
	fold_rows(&acc, output);
}

#[inline(always)]
pub(super) unsafe fn binary_op<V: Lanes>(
	output: &mut Output,
	operand: &Output,
	op: impl Fn(V, V) -> V,
) {
	for (dst, src) in output
		.0
		.chunks_exact_mut(V::LANES)
		.zip(operand.0.chunks_exact(V::LANES))
	{
		op(V::load(dst), V::load(src)).store(dst);
	}
}

#[inline(always)]
pub(super) unsafe fn const_op<V: Lanes>(output: &mut Output, operand: i16, op: impl Fn(V, V) -> V) {
	let operand = V::splat(swifft_field::center_i16(operand));
	for dst in output.0.chunks_exact_mut(V::LANES) {
		op(V::load(dst), operand).store(dst);
	}
}

#[inline(always)]
pub(super) unsafe fn add<V: Lanes>(a: V, b: V) -> V {
	center(a.add(b))
}

#[inline(always)]
pub(super) unsafe fn sub<V: Lanes>(a: V, b: V) -> V {
	center(a.sub(b))
}

#[inline(always)]
pub(super) unsafe fn mul<V: Lanes>(a: V, b: V) -> V {
	center(a.mullo(b))
}
