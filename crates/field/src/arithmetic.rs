// Copyright 2024-2025 Irreducible Inc.

use crate::params::P;

/// Reduces `x` modulo [`P`] into the centered range `[-P/2, P/2]`.
///
/// The result is congruent to `x`, and the function is idempotent.
#[inline]
pub const fn center(x: i32) -> i32 {
	let result = x % P;
	if result > P / 2 {
		result - P
	} else if result < -(P / 2) {
		result + P
	} else {
		result
	}
}

/// [`center`] for values already narrowed to 16 bits.
#[inline]
pub const fn center_i16(x: i16) -> i16 {
	center(x as i32) as i16
}

/// Reverses the bits of `input` below the stop bit `marker`.
///
/// `marker` must be a power of two, `1 << width`; `input` is expected to be smaller than it.
/// The marker is or-ed above the input and bits are shifted out until only the marker remains, so
/// exactly `width` bits are emitted in reverse order.
#[inline]
pub const fn reverse_bits(input: usize, marker: usize) -> usize {
	let mut input = input | marker;
	let mut reversed = 0;
	while input > 1 {
		reversed = (reversed << 1) | (input & 1);
		input >>= 1;
	}
	reversed
}
