// Copyright 2024-2025 Irreducible Inc.

//! Fixed-size, 64-byte aligned blocks exchanged with the compression kernels.

use bytemuck::{Pod, Zeroable};
use rand::RngCore;
use swifft_field::{Z257, INPUT_BLOCK_SIZE, M, N, ROW_BYTES};

/// One block of `M` input rows of `N` bits each.
///
/// Row `m` is stored in bytes `m * ROW_BYTES..(m + 1) * ROW_BYTES`. Bit `k` of byte `i` of a row is
/// the coefficient of $x^{rev(i) + W \cdot rev(k)}$.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct Input(pub [u8; INPUT_BLOCK_SIZE]);

/// Sign bits for an [`Input`], in the same layout. A set sign bit negates the coefficient carried
/// by the matching input bit and has no effect where the input bit is clear.
pub type SignInput = Input;

// SAFETY: a single byte array field, no padding at 64-byte alignment.
unsafe impl Zeroable for Input {}
unsafe impl Pod for Input {}

impl Input {
	pub const ZERO: Self = Self([0; INPUT_BLOCK_SIZE]);

	pub fn random(mut rng: impl RngCore) -> Self {
		let mut input = Self::ZERO;
		rng.fill_bytes(&mut input.0);
		input
	}

	pub fn rows(&self) -> &[[u8; ROW_BYTES]; M] {
		bytemuck::cast_ref(&self.0)
	}

	pub fn rows_mut(&mut self) -> &mut [[u8; ROW_BYTES]; M] {
		bytemuck::cast_mut(&mut self.0)
	}

	#[inline]
	pub fn row(&self, index: usize) -> &[u8; ROW_BYTES] {
		&self.rows()[index]
	}
}

impl Default for Input {
	fn default() -> Self {
		Self::ZERO
	}
}

impl From<[u8; INPUT_BLOCK_SIZE]> for Input {
	fn from(bytes: [u8; INPUT_BLOCK_SIZE]) -> Self {
		Self(bytes)
	}
}

/// The compression result: `N` field elements in centered form.
///
/// The arithmetic operations on outputs expect every element to be centered, which holds for
/// anything produced by a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct Output(pub [i16; N]);

// SAFETY: a single i16 array field, no padding at 64-byte alignment.
unsafe impl Zeroable for Output {}
unsafe impl Pod for Output {}

impl Output {
	pub const ZERO: Self = Self([0; N]);

	/// An output of uniformly random centered elements.
	pub fn random(mut rng: impl RngCore) -> Self {
		Self(std::array::from_fn(|_| Z257::random(&mut rng).val()))
	}
}

impl Default for Output {
	fn default() -> Self {
		Self::ZERO
	}
}

/// The transforms of all `M` rows of one input block, as produced by the `fft` entry points.
///
/// `fft_sum` expects every element to be centered, which holds for anything produced by `fft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct FftOutput(pub [[i16; N]; M]);

// SAFETY: a single i16 array field, no padding at 64-byte alignment.
unsafe impl Zeroable for FftOutput {}
unsafe impl Pod for FftOutput {}

impl FftOutput {
	pub const ZERO: Self = Self([[0; N]; M]);

	#[inline]
	pub fn row(&self, index: usize) -> &[i16; N] {
		&self.0[index]
	}
}

impl Default for FftOutput {
	fn default() -> Self {
		Self::ZERO
	}
}
