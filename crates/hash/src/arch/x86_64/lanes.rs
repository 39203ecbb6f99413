// Copyright 2024-2025 Irreducible Inc.

use swifft_field::W;

/// Largest number of input rows held by one vector.
pub(super) const MAX_ROWS: usize = 4;

/// A SIMD vector of signed 16-bit lanes, split into [`Self::ROWS`] slots of `W` lanes.
///
/// Each slot carries one input row, so a vector advances `ROWS` rows of the block at once. All
/// methods are `unsafe` because they compile to instructions that the executing CPU must support;
/// they are only called from functions carrying the matching `#[target_feature]`.
pub(super) trait Lanes: Copy {
	const ROWS: usize;
	const LANES: usize = Self::ROWS * W;

	unsafe fn splat(value: i16) -> Self;

	/// Loads [`Self::LANES`] consecutive lanes from `src`.
	unsafe fn load(src: &[i16]) -> Self;

	/// Loads slot `r` from `rows[r]`; `rows` holds exactly [`Self::ROWS`] chunks.
	unsafe fn load_rows(rows: &[&[i16; W]]) -> Self;

	/// Stores [`Self::LANES`] lanes into the front of `dst`.
	unsafe fn store(self, dst: &mut [i16]);

	unsafe fn add(self, rhs: Self) -> Self;

	unsafe fn sub(self, rhs: Self) -> Self;

	/// Lane-wise product truncated to 16 bits.
	unsafe fn mullo(self, rhs: Self) -> Self;

	unsafe fn and(self, rhs: Self) -> Self;

	/// Arithmetic shift right by 8 in every lane.
	unsafe fn shr8(self) -> Self;

	/// Subtracts 257 from every lane greater than 128.
	unsafe fn fold_above_half(self) -> Self;
}
